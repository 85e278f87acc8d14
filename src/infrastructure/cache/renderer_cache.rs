use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use tokio::sync::OnceCell;

use crate::{errors::ContentError, interfaces::renderer::RendererSource};

/// Process-wide holder of the deferred renderer.
///
/// The first successful acquisition is kept and shared by every later caller.
/// A failed or abandoned acquisition leaves the cache empty so the next caller
/// tries again. Concurrent callers wait on the same in-flight acquisition.
pub struct RendererCache<S: RendererSource> {
    source: S,
    renderer: OnceCell<Arc<S::Renderer>>,
    attempts: AtomicUsize,
}

impl<S: RendererSource> RendererCache<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            renderer: OnceCell::new(),
            attempts: AtomicUsize::new(0),
        }
    }

    /// Returns the cached renderer, acquiring it on first use.
    pub async fn acquire(&self) -> Result<Arc<S::Renderer>, ContentError> {
        self.renderer
            .get_or_try_init(|| async {
                let attempt = self.attempts.fetch_add(1, Ordering::SeqCst) + 1;
                tracing::debug!(attempt, "Acquiring deferred renderer");

                match self.source.acquire().await {
                    Ok(renderer) => {
                        tracing::info!(attempt, "Deferred renderer acquired");
                        Ok(Arc::new(renderer))
                    }
                    Err(e) => {
                        tracing::warn!(attempt, "Deferred renderer acquisition failed: {}", e);
                        Err(e)
                    }
                }
            })
            .await
            .cloned()
    }

    pub fn is_acquired(&self) -> bool {
        self.renderer.initialized()
    }

    /// Number of acquisitions started against the source.
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}
