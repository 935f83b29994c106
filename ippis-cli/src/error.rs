//! CLI error type.

use std::path::PathBuf;

use ippis_lib::error::{ConfigError, SourceError};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Source(#[from] SourceError),

    #[error("table config: {0}")]
    Config(#[from] ConfigError),

    #[error("unknown screen {name:?} (expected one of: {known})")]
    UnknownScreen { name: String, known: String },

    #[error("invalid filter {0:?}, expected ID=VALUE")]
    InvalidFilter(String),

    #[error("failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    #[error("failed to set up logging: {0}")]
    Logger(#[from] log::SetLoggerError),
}
