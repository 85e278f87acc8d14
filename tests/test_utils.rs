#![allow(dead_code)]

use std::{
    path::Path,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};

use async_trait::async_trait;
use portfolio_content::{
    entities::{profile::Profile, section::Section},
    errors::ContentError,
    renderer::{RendererSource, SectionRenderer},
    settings::{AppConfig, AppEnvironment},
};
use tempfile::TempDir;

pub fn test_config() -> AppConfig {
    AppConfig {
        env: AppEnvironment::Testing,
        ..AppConfig::default()
    }
}

// ───── Renderer fakes ───────────────────────────────────────────────

/// Renders `"<anchor>:<first name>"`, failing or panicking on chosen sections.
#[derive(Debug, Default, Clone)]
pub struct FakeRenderer {
    pub fail_on: Option<Section>,
    pub panic_on: Option<Section>,
}

impl SectionRenderer for FakeRenderer {
    type Output = String;

    fn render(&self, section: Section, profile: &Profile) -> Result<String, ContentError> {
        if self.panic_on == Some(section) {
            panic!("renderer exploded on {section}");
        }
        if self.fail_on == Some(section) {
            return Err(ContentError::Render(format!("cannot render {section}")));
        }
        Ok(format!("{}:{}", section, profile.first_name()))
    }
}

/// Source that counts acquisitions and fails the first `failures` of them.
#[derive(Debug, Default)]
pub struct CountingSource {
    pub calls: Arc<AtomicUsize>,
    pub failures: AtomicUsize,
    pub delay: Option<Duration>,
    pub renderer: FakeRenderer,
}

impl CountingSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(times: usize) -> Self {
        CountingSource {
            failures: AtomicUsize::new(times),
            ..Self::default()
        }
    }

    pub fn with_renderer(mut self, renderer: FakeRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RendererSource for CountingSource {
    type Renderer = FakeRenderer;

    async fn acquire(&self) -> Result<FakeRenderer, ContentError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let remaining = self.failures.load(Ordering::SeqCst);
        if remaining > 0 {
            self.failures.store(remaining - 1, Ordering::SeqCst);
            return Err(ContentError::Acquisition("network unavailable".to_string()));
        }

        Ok(self.renderer.clone())
    }
}

// ───── Blog fixtures ────────────────────────────────────────────────

pub fn post_markdown(title: &str, published_at: &str, summary: Option<&str>) -> String {
    let summary = summary
        .map(|s| format!("summary: {s}\n"))
        .unwrap_or_default();
    format!(
        "---\ntitle: \"{title}\"\npublishedAt: \"{published_at}\"\n{summary}---\n\nFirst paragraph of {title}.\n\nSecond paragraph.\n"
    )
}

pub fn write_post(dir: &Path, file_name: &str, content: &str) {
    std::fs::write(dir.join(file_name), content).expect("Failed to write test post");
}

pub fn blog_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}
