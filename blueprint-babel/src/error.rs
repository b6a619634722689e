//! Format errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("format not found: {0}")]
    FormatNotFound(String),

    #[error("{0}")]
    NotSupported(String),

    #[error("parse error: {0}")]
    ParseError(String),

    #[error("serialization error: {0}")]
    SerializationError(String),

    #[error("invalid layout JSON: {0}")]
    Json(#[from] serde_json::Error),
}
