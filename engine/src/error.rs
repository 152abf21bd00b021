//! Error types for the locdiff engine.

use thiserror::Error;

/// All possible errors from the locdiff engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("document is not valid JSON: {0}")]
    InvalidDocument(String),

    #[error("document has no top-level `data` array")]
    MissingDataArray,

    #[error("record at index {index} is missing `{field}`")]
    MalformedRecord { index: usize, field: &'static str },

    #[error("cannot serialize key map: {0}")]
    SerializeKeyMap(String),
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;
