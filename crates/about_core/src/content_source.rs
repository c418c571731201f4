use std::path::PathBuf;

use async_trait::async_trait;
use shared::{domain::ContentRecord, error::ContentError};
use tracing::debug;

/// Supplies content snapshots. `Ok(None)` means there is nothing to show.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn fetch(&self) -> Result<Option<ContentRecord>, ContentError>;
}

/// Reads a JSON snapshot exported from the content service.
#[derive(Debug, Clone)]
pub struct FileContentSource {
    path: PathBuf,
}

impl FileContentSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ContentSource for FileContentSource {
    async fn fetch(&self) -> Result<Option<ContentRecord>, ContentError> {
        let raw = tokio::fs::read(&self.path)
            .await
            .map_err(|source| ContentError::Io {
                path: self.path.clone(),
                source,
            })?;
        let record: Option<ContentRecord> = serde_json::from_slice(&raw)?;
        debug!(
            path = %self.path.display(),
            present = record.is_some(),
            "content: loaded snapshot"
        );
        Ok(record)
    }
}

#[derive(Debug, Clone, Default)]
pub struct StaticContentSource {
    record: Option<ContentRecord>,
}

impl StaticContentSource {
    pub fn new(record: Option<ContentRecord>) -> Self {
        Self { record }
    }
}

#[async_trait]
impl ContentSource for StaticContentSource {
    async fn fetch(&self) -> Result<Option<ContentRecord>, ContentError> {
        Ok(self.record.clone())
    }
}

#[cfg(test)]
#[path = "tests/content_source_tests.rs"]
mod tests;
