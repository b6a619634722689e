//! Node-tree sources: the remote design API and local JSON documents.

use crate::error::ImportError;
use crate::reference::DocumentRef;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Maximum number of body characters quoted in an HTTP error.
const ERROR_BODY_LIMIT: usize = 300;

/// Anything that can hand out the raw node tree of a frame.
pub trait NodeSource {
    /// Fetch the root node of `reference`.
    fn fetch(&self, reference: &DocumentRef) -> Result<Value, ImportError>;
}

/// Connection settings for the design API.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientOptions {
    pub base_url: String,
    pub token: String,
    pub timeout: Duration,
    pub depth: u32,
}

impl Default for ClientOptions {
    fn default() -> Self {
        ClientOptions {
            base_url: "https://api.figma.com/v1".to_string(),
            token: String::new(),
            timeout: Duration::from_secs(20),
            depth: 10,
        }
    }
}

/// Blocking client for the `files/{key}/nodes` endpoint.
pub struct FigmaClient {
    options: ClientOptions,
    base: Url,
    agent: ureq::Agent,
}

impl FigmaClient {
    /// Fails without I/O when no token is configured or the base URL is unusable.
    pub fn new(options: ClientOptions) -> Result<Self, ImportError> {
        if options.token.trim().is_empty() {
            return Err(ImportError::MissingToken);
        }
        let invalid = || ImportError::InvalidBaseUrl(options.base_url.clone());
        let base = Url::parse(options.base_url.trim()).map_err(|_| invalid())?;
        if base.cannot_be_a_base() {
            return Err(invalid());
        }
        let agent = ureq::AgentBuilder::new().timeout(options.timeout).build();
        Ok(FigmaClient {
            options,
            base,
            agent,
        })
    }

    /// `{base}/files/{key}/nodes`, with the key escaped as one path segment.
    fn nodes_url(&self, reference: &DocumentRef) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["files", reference.file_key.as_str(), "nodes"]);
        }
        url
    }
}

impl NodeSource for FigmaClient {
    fn fetch(&self, reference: &DocumentRef) -> Result<Value, ImportError> {
        let url = self.nodes_url(reference);
        info!(file = %reference.file_key, node = %reference.node_id, "fetching design node");

        let response = self
            .agent
            .get(url.as_str())
            .set("X-Figma-Token", &self.options.token)
            .set("Accept", "application/json")
            .query("ids", &reference.node_id)
            .query("depth", &self.options.depth.to_string())
            .call();

        let payload: Value = match response {
            Ok(response) => response
                .into_json()
                .map_err(|e| ImportError::UnexpectedResponse(e.to_string()))?,
            Err(ureq::Error::Status(status, response)) => {
                let body = response.into_string().unwrap_or_default();
                return Err(ImportError::Http {
                    status,
                    message: error_message(&body),
                });
            }
            Err(ureq::Error::Transport(transport)) => {
                return Err(ImportError::Transport(transport.to_string()));
            }
        };

        debug!(url = %url, "design node fetched");
        extract_document(&payload, &reference.node_id)
    }
}

/// Reads a node tree from disk. The file may hold either a bare node or a full
/// `nodes` API response.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        FileSource {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl NodeSource for FileSource {
    fn fetch(&self, reference: &DocumentRef) -> Result<Value, ImportError> {
        let text = std::fs::read_to_string(&self.path).map_err(|source| ImportError::Io {
            path: self.path.display().to_string(),
            source,
        })?;
        let payload: Value = serde_json::from_str(&text)?;

        if payload.get("nodes").is_none() {
            return Ok(payload);
        }
        match sole_node_id(&payload) {
            Some(node_id) if reference.node_id.is_empty() => extract_document(&payload, &node_id),
            _ => extract_document(&payload, &reference.node_id),
        }
    }
}

/// The only key of `nodes`, for saved responses opened without a node id.
fn sole_node_id(payload: &Value) -> Option<String> {
    let nodes = payload.get("nodes")?.as_object()?;
    match nodes.keys().collect::<Vec<_>>().as_slice() {
        [only] => Some(only.to_string()),
        _ => None,
    }
}

/// `nodes[node_id].document` of an API response.
pub fn extract_document(payload: &Value, node_id: &str) -> Result<Value, ImportError> {
    payload
        .get("nodes")
        .and_then(|nodes| nodes.get(node_id))
        .and_then(|node| node.get("document"))
        .filter(|document| document.is_object())
        .cloned()
        .ok_or_else(|| ImportError::UnexpectedResponse(format!("no document for node {node_id}")))
}

/// The body's `err` or `message` field, else the body itself cut to
/// [`ERROR_BODY_LIMIT`] characters.
fn error_message(body: &str) -> String {
    if let Ok(Value::Object(fields)) = serde_json::from_str::<Value>(body) {
        for key in ["err", "message"] {
            match fields.get(key) {
                Some(Value::String(s)) if !s.is_empty() => return s.clone(),
                Some(Value::Number(n)) => return n.to_string(),
                _ => {}
            }
        }
    }

    if body.chars().count() > ERROR_BODY_LIMIT {
        let cut: String = body.chars().take(ERROR_BODY_LIMIT).collect();
        format!("{}...", cut.trim_end())
    } else {
        body.to_string()
    }
}
