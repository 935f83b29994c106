//! Configuration error types

use std::path::PathBuf;

/// Error loading or validating a [`TableConfig`](crate::config::TableConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("page size options must not be empty")]
    NoPageSizes,
    #[error("page size must be positive")]
    ZeroPageSize,
    #[error("default page size {default} is not one of {options:?}")]
    DefaultNotOffered { default: usize, options: Vec<usize> },
}
