use std::panic::{self, AssertUnwindSafe};

use serde::Serialize;

use crate::{
    constants::HOME_HREF,
    entities::{profile::Profile, section::Section},
    errors::ContentError,
    interfaces::renderer::SectionRenderer,
};

/// What a reader sees in place of content that could not be produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fallback {
    pub title: String,
    pub message: String,
    pub can_retry: bool,
    /// Link back to a page known to work, when offered.
    pub home_href: Option<String>,
}

impl Fallback {
    pub fn unexpected(home_href: &str) -> Self {
        Fallback {
            title: "Something went wrong".to_string(),
            message: "An unexpected error occurred. Please try refreshing the page, or return to the home page.".to_string(),
            can_retry: true,
            home_href: Some(home_href.to_string()),
        }
    }

    pub fn unavailable() -> Self {
        Fallback {
            title: "This part of the page could not be loaded".to_string(),
            message: "Check your connection and try again.".to_string(),
            can_retry: true,
            home_href: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Outcome<O> {
    Content(O),
    Fallback(Fallback),
}

/// Result of rendering one section behind a boundary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rendered<O> {
    pub section: Section,
    pub outcome: Outcome<O>,
}

impl<O> Rendered<O> {
    pub fn content(&self) -> Option<&O> {
        match &self.outcome {
            Outcome::Content(output) => Some(output),
            Outcome::Fallback(_) => None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.outcome, Outcome::Fallback(_))
    }
}

/// Isolates render failures to the section that produced them.
///
/// Both returned errors and panics inside a renderer become a [`Fallback`];
/// sibling sections are rendered regardless.
#[derive(Debug, Clone)]
pub struct ErrorBoundary {
    home_href: String,
}

impl Default for ErrorBoundary {
    fn default() -> Self {
        ErrorBoundary::new(HOME_HREF)
    }
}

impl ErrorBoundary {
    pub fn new(home_href: impl Into<String>) -> Self {
        ErrorBoundary { home_href: home_href.into() }
    }

    pub fn guard<O, F>(&self, section: Section, render: F) -> Rendered<O>
    where
        F: FnOnce() -> Result<O, ContentError>,
    {
        let outcome = match panic::catch_unwind(AssertUnwindSafe(render)) {
            Ok(Ok(output)) => Outcome::Content(output),
            Ok(Err(e)) => {
                tracing::error!(%section, "Error caught by boundary: {}", e);
                Outcome::Fallback(Fallback::unexpected(&self.home_href))
            }
            Err(payload) => {
                let reason = payload
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "unknown panic".to_string());
                tracing::error!(%section, "Renderer panicked: {}", reason);
                Outcome::Fallback(Fallback::unexpected(&self.home_href))
            }
        };

        Rendered { section, outcome }
    }

    /// Renders `sections` in order, each behind its own boundary.
    pub fn render_all<R>(&self, renderer: &R, sections: &[Section], profile: &Profile) -> Vec<Rendered<R::Output>>
    where
        R: SectionRenderer + ?Sized,
    {
        sections
            .iter()
            .map(|&section| self.guard(section, || renderer.render(section, profile)))
            .collect()
    }
}
