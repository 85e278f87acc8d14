use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::Value;
use tokio::fs;

use crate::errors::ContentError;

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Loads the raw profile document, unchecked.
    async fn load_document(&self) -> Result<Value, ContentError>;
}

/// Profile document stored as a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileProfileRepo {
    pub path: PathBuf,
}

impl JsonFileProfileRepo {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileProfileRepo { path: path.into() }
    }
}

#[async_trait]
impl ProfileRepository for JsonFileProfileRepo {
    async fn load_document(&self) -> Result<Value, ContentError> {
        let raw = fs::read_to_string(&self.path).await.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => {
                ContentError::NotFound(format!("profile document {}", self.path.display()))
            }
            _ => ContentError::from(e),
        })?;

        let document = serde_json::from_str(&raw)?;
        tracing::debug!(path = %self.path.display(), "Loaded profile document");
        Ok(document)
    }
}
