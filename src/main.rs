use std::{env, path::PathBuf, process::ExitCode};

use anyhow::Context;
use chrono::Utc;
use portfolio_content::{
    errors::ContentError,
    repositories::{
        blog_post::FsBlogPostRepo,
        profile::{JsonFileProfileRepo, ProfileRepository},
    },
    settings::AppConfig,
    telemetry::init_tracing,
    use_cases::{
        blog::BlogHandler,
        validation::{log_report, validate_profile},
    },
    SiteState,
};

/// Checks the profile document and blog posts before a deploy.
///
/// Usage: `content-check [PROFILE_JSON]`. Exits non-zero when any check fails.
#[tokio::main]
async fn main() -> ExitCode {
    let mut config = match AppConfig::new() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Some(path) = env::args().nth(1) {
        config.content_path = PathBuf::from(path);
    }

    init_tracing(&config);
    tracing::debug!("Loaded configuration: {:?}", config);

    match run(&config).await {
        Ok(true) => {
            tracing::info!("All content checks passed");
            ExitCode::SUCCESS
        }
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!("Content check aborted: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: &AppConfig) -> anyhow::Result<bool> {
    let document = JsonFileProfileRepo::new(config.content_path.clone())
        .load_document()
        .await
        .with_context(|| format!("reading {}", config.content_path.display()))?;

    let profile = validate_profile(&document).inspect_err(log_report).ok();

    let mut blog = None;
    let mut blog_passed = true;
    if let Some(dir) = &config.blog_dir {
        let handler = BlogHandler::new(FsBlogPostRepo::new(dir.clone(), config.max_post_size_bytes));
        match handler.load_index().await {
            Ok(index) => {
                tracing::info!(posts = index.len(), "Blog posts checked");
                blog = Some(index);
            }
            Err(ContentError::Validation(report)) => {
                log_report(&report);
                blog_passed = false;
            }
            Err(e) => return Err(e).context("loading blog posts"),
        }
    }

    let Some(profile) = profile.filter(|_| blog_passed) else {
        return Ok(false);
    };

    let site = SiteState::new(profile, blog);
    let entries = site.site_index(site.base_url(config), Utc::now());
    tracing::info!(
        eager = site.plan.eager.len(),
        deferred = site.plan.deferred.len(),
        site_index_entries = entries.len(),
        "Site content ready"
    );

    Ok(true)
}
