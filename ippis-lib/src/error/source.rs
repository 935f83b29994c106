//! Row source error types

use std::path::PathBuf;

/// Error loading rows from an external source.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate row id {0}")]
    DuplicateId(String),
}
