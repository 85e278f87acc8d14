use std::sync::Arc;

use crate::{
    cache::renderer_cache::RendererCache,
    entities::{profile::Profile, section::Section},
    interfaces::renderer::{OutputOf, RendererSource},
    use_cases::boundary::{ErrorBoundary, Fallback, Rendered},
};

/// Where a mount happens. Deferred sections only ever render on the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderContext {
    Server,
    Client,
}

#[derive(Debug, PartialEq)]
pub enum LoaderState<O> {
    Unmounted,
    Acquiring,
    Ready(Vec<Rendered<O>>),
    Failed(Fallback),
}

/// Mount point for the below-the-fold sections of a page.
///
/// ```text
/// Unmounted --client mount--> Acquiring --ok--> Ready (terminal)
///                                 |
///                                 +--err--> Failed --retry--> Acquiring
/// ```
///
/// Unmounting from any state returns to `Unmounted`; an acquisition still in
/// flight is simply dropped.
pub struct DeferredSectionLoader<S: RendererSource> {
    sections: Vec<Section>,
    cache: Arc<RendererCache<S>>,
    boundary: ErrorBoundary,
    state: LoaderState<OutputOf<S>>,
}

impl<S: RendererSource> DeferredSectionLoader<S> {
    pub fn new(sections: Vec<Section>, cache: Arc<RendererCache<S>>) -> Self {
        Self {
            sections,
            cache,
            boundary: ErrorBoundary::default(),
            state: LoaderState::Unmounted,
        }
    }

    pub fn with_boundary(mut self, boundary: ErrorBoundary) -> Self {
        self.boundary = boundary;
        self
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn state(&self) -> &LoaderState<OutputOf<S>> {
        &self.state
    }

    /// Rendered deferred sections; empty until the loader is ready.
    pub fn rendered(&self) -> &[Rendered<OutputOf<S>>] {
        match &self.state {
            LoaderState::Ready(rendered) => rendered,
            _ => &[],
        }
    }

    /// Mounts the loader. On the server this is a no-op; on the client it
    /// acquires the renderer (once per process) and renders every section.
    pub async fn mount(&mut self, ctx: RenderContext, profile: &Profile) -> &LoaderState<OutputOf<S>> {
        if ctx == RenderContext::Server {
            tracing::debug!("Skipping deferred sections during server render");
            return &self.state;
        }

        match self.state {
            LoaderState::Ready(_) | LoaderState::Failed(_) => &self.state,
            LoaderState::Unmounted | LoaderState::Acquiring => self.load(profile).await,
        }
    }

    /// Retries a failed acquisition. Other states are left as they are.
    pub async fn retry(&mut self, profile: &Profile) -> &LoaderState<OutputOf<S>> {
        tracing::debug!("Retry requested for deferred sections");
        match self.state {
            LoaderState::Failed(_) => self.load(profile).await,
            _ => &self.state,
        }
    }

    pub fn unmount(&mut self) {
        self.state = LoaderState::Unmounted;
    }

    async fn load(&mut self, profile: &Profile) -> &LoaderState<OutputOf<S>> {
        self.state = LoaderState::Acquiring;

        self.state = match self.cache.acquire().await {
            Ok(renderer) => {
                LoaderState::Ready(self.boundary.render_all(&*renderer, &self.sections, profile))
            }
            Err(e) => {
                tracing::warn!("Deferred sections unavailable: {}", e);
                LoaderState::Failed(Fallback::unavailable())
            }
        };

        &self.state
    }
}
