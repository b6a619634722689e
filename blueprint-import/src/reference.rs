//! Design document references.
//!
//! A reference is the URL of a frame in the visual tool, e.g.
//! `https://www.figma.com/design/<fileKey>/Title?node-id=12-34`. Node ids use `-`
//! in URLs and `:` in the API; both spellings are accepted.

use crate::error::ImportError;
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

static FILE_KEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/(?:design|file)/([^/]+)(?:/|$)").expect("valid file key regex"));

static NODE_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+:\d+$").expect("valid node id regex"));

/// File key and node id of one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRef {
    pub file_key: String,
    pub node_id: String,
}

impl DocumentRef {
    pub fn new(file_key: impl Into<String>, node_id: impl Into<String>) -> Self {
        DocumentRef {
            file_key: file_key.into(),
            node_id: node_id.into(),
        }
    }

    /// Parse a design URL.
    pub fn parse(reference: &str) -> Result<DocumentRef, ImportError> {
        let invalid = || ImportError::InvalidReference(reference.to_string());

        let url = Url::parse(reference.trim()).map_err(|_| invalid())?;

        let file_key = FILE_KEY
            .captures(url.path())
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(invalid)?;

        let raw_node_id = url
            .query_pairs()
            .find(|(key, _)| key == "node-id")
            .map(|(_, value)| value.into_owned())
            .filter(|value| !value.is_empty())
            .ok_or_else(invalid)?;

        let node_id = raw_node_id.replace('-', ":");
        if !NODE_ID.is_match(&node_id) {
            return Err(ImportError::InvalidNodeId(raw_node_id));
        }

        Ok(DocumentRef { file_key, node_id })
    }
}
