//! Import failures. All of them are raised before classification starts.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Figma token is not configured")]
    MissingToken,

    #[error("invalid API base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("invalid design URL: {0}")]
    InvalidReference(String),

    #[error("invalid node-id in design URL: {0}")]
    InvalidNodeId(String),

    #[error("failed to fetch design node (HTTP {status}){}", display_suffix(.message))]
    Http { status: u16, message: String },

    #[error("failed to reach the design API: {0}")]
    Transport(String),

    #[error("unexpected design API response: {0}")]
    UnexpectedResponse(String),

    #[error("design node is not a frame (got {0})")]
    NotAFrame(String),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

fn display_suffix(message: &str) -> String {
    if message.is_empty() {
        String::new()
    } else {
        format!(": {message}")
    }
}
