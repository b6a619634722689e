//! Frame import: reference → node tree → `section` IR.

use crate::classifier::Classifier;
use crate::client::NodeSource;
use crate::error::ImportError;
use crate::reference::DocumentRef;
use crate::source::{NodeType, SourceNode};
use blueprint_core::LayoutNode;
use serde_json::Value;
use tracing::{info, warn};

/// Label used when a frame has neither classifiable content nor a name.
const FALLBACK_LABEL: &str = "Imported frame";

/// Ties a node source to a classifier.
pub struct Importer<S> {
    source: S,
    classifier: Classifier,
}

impl<S: NodeSource> Importer<S> {
    pub fn new(source: S, classifier: Classifier) -> Self {
        Importer { source, classifier }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Import the frame a design URL points at.
    pub fn import_url(&self, url: &str) -> Result<LayoutNode, ImportError> {
        let reference = DocumentRef::parse(url)?;
        self.import(&reference)
    }

    pub fn import(&self, reference: &DocumentRef) -> Result<LayoutNode, ImportError> {
        let document = self.source.fetch(reference)?;
        import_frame(&self.classifier, &document)
    }
}

/// Classify a frame document into a top-level `section`.
///
/// The root must be a frame. Its classification is unwrapped one level so the
/// section lists the frame's blocks directly; a frame that classifies to nothing
/// becomes a single text node naming it.
pub fn import_frame(classifier: &Classifier, document: &Value) -> Result<LayoutNode, ImportError> {
    if !document.is_object() {
        return Err(ImportError::UnexpectedResponse(
            "frame document is not an object".to_string(),
        ));
    }

    let frame = SourceNode::from_value(document);
    if frame.node_type != NodeType::Frame {
        let got = document
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or("nothing")
            .to_string();
        return Err(ImportError::NotAFrame(got));
    }

    let children = match classifier.classify(&frame) {
        None => {
            warn!(frame = %frame.name, "frame has no classifiable content");
            let name = frame.name.trim();
            let label = if name.is_empty() { FALLBACK_LABEL } else { name };
            vec![LayoutNode::text(label)]
        }
        Some(LayoutNode::Section(block)) | Some(LayoutNode::Container(block)) => block.children,
        Some(other) => vec![other],
    };

    info!(frame = %frame.name, blocks = children.len(), "frame imported");
    Ok(LayoutNode::section(children))
}
