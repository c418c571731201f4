use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content snapshot '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to decode content snapshot: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("malformed image asset reference '{0}'")]
    InvalidAssetRef(String),
    #[error("invalid image CDN base url '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
