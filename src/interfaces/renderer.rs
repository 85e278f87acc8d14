use async_trait::async_trait;

use crate::{
    entities::{profile::Profile, section::Section},
    errors::ContentError,
};

/// Turns validated content into presentation output for one section.
///
/// The output type is owned by the presentation layer; nothing in this crate
/// inspects it.
pub trait SectionRenderer: Send + Sync {
    type Output: Send + Sync;

    fn render(&self, section: Section, profile: &Profile) -> Result<Self::Output, ContentError>;
}

/// Capability to obtain the renderer for deferred sections.
///
/// Acquisition may be slow or fail (a chunk fetch, a plugin load); callers go
/// through [`RendererCache`](crate::cache::renderer_cache::RendererCache) so it
/// happens at most once per process on success.
#[async_trait]
pub trait RendererSource: Send + Sync {
    type Renderer: SectionRenderer + 'static;

    async fn acquire(&self) -> Result<Self::Renderer, ContentError>;
}

/// Output type produced by the renderer a source hands out.
pub type OutputOf<S> = <<S as RendererSource>::Renderer as SectionRenderer>::Output;
