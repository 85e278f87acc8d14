use std::sync::Arc;

use chrono::{DateTime, Utc};

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod telemetry;

pub use domain::{entities, schema, use_cases};
pub use interfaces::{renderer, repositories};
pub use infrastructure::{cache, utils};

use entities::{profile::Profile, section::SectionPlan};
use errors::ContentError;
use repositories::{blog_post::FsBlogPostRepo, profile::JsonFileProfileRepo};
use settings::AppConfig;
use use_cases::{
    blog::{site_index, BlogHandler, BlogIndex, SitemapEntry},
    content::ContentHandler,
};

pub type AppContentHandler = ContentHandler<JsonFileProfileRepo>;
pub type AppBlogHandler = BlogHandler<FsBlogPostRepo>;

/// Everything a page needs, loaded once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct SiteState {
    pub profile: Arc<Profile>,
    pub plan: SectionPlan,
    pub blog: Option<BlogIndex>,
}

impl SiteState {
    pub fn new(profile: Profile, blog: Option<BlogIndex>) -> Self {
        SiteState {
            profile: Arc::new(profile),
            plan: SectionPlan::default_layout(),
            blog,
        }
    }

    pub async fn load(config: &AppConfig) -> Result<Self, ContentError> {
        let content: AppContentHandler = ContentHandler::new(
            JsonFileProfileRepo::new(config.content_path.clone()),
            config.validation_policy,
        );
        let profile = content.load_profile().await?;

        let blog = match &config.blog_dir {
            Some(dir) => {
                let handler: AppBlogHandler =
                    BlogHandler::new(FsBlogPostRepo::new(dir.clone(), config.max_post_size_bytes));
                Some(handler.load_index().await?)
            }
            None => None,
        };

        Ok(SiteState::new(profile, blog))
    }

    /// The configured site URL, else the one in the profile.
    pub fn base_url<'a>(&'a self, config: &'a AppConfig) -> &'a str {
        config.site_url.as_deref().unwrap_or(&self.profile.url)
    }

    pub fn site_index(&self, base_url: &str, generated_at: DateTime<Utc>) -> Vec<SitemapEntry> {
        let empty = BlogIndex::default();
        site_index(base_url, self.blog.as_ref().unwrap_or(&empty), generated_at)
    }
}
