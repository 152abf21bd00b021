//! Error types for the harness.

use thiserror::Error;

/// All possible errors from the harness layer.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read configuration {path}: {source}")]
    ConfigRead {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    ConfigParse(String),

    #[error("token request failed: {0}")]
    Token(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Result type for harness operations.
pub type Result<T> = std::result::Result<T, Error>;
