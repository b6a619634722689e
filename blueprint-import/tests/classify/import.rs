//! Frame import through a [`NodeSource`].

use blueprint_core::LayoutNode;
use blueprint_import::{
    Classifier, DocumentRef, FileSource, ImportError, Importer, NodeSource,
};
use serde_json::{json, Value};
use std::cell::Cell;

const LANDING: &str = include_str!("fixtures/landing.json");

/// Serves a canned API response and counts requests.
struct CannedSource {
    payload: Value,
    calls: Cell<usize>,
}

impl CannedSource {
    fn new(payload: Value) -> Self {
        CannedSource {
            payload,
            calls: Cell::new(0),
        }
    }
}

impl NodeSource for CannedSource {
    fn fetch(&self, reference: &DocumentRef) -> Result<Value, ImportError> {
        self.calls.set(self.calls.get() + 1);
        blueprint_import::client::extract_document(&self.payload, &reference.node_id)
    }
}

fn landing_importer() -> Importer<CannedSource> {
    let payload: Value = serde_json::from_str(LANDING).unwrap();
    Importer::new(CannedSource::new(payload), Classifier::default())
}

#[test]
fn landing_frame_imports_as_section_of_blocks() {
    let layout = landing_importer()
        .import_url("https://www.figma.com/design/abc123/Landing?node-id=1-2")
        .unwrap();

    let LayoutNode::Section(section) = &layout else {
        panic!("expected section");
    };
    let kinds: Vec<_> = section.children.iter().map(LayoutNode::kind).collect();
    assert_eq!(kinds, ["columns", "input", "container"]);

    let LayoutNode::Columns(header) = &section.children[0] else {
        unreachable!()
    };
    assert!(matches!(
        &header.columns[1].children[..],
        [LayoutNode::Nav(nav)] if nav.items.len() == 3
    ));

    let LayoutNode::Input(search) = &section.children[1] else {
        unreachable!()
    };
    assert_eq!(search.placeholder, "Search products");

    let LayoutNode::Container(card) = &section.children[2] else {
        unreachable!()
    };
    let card_kinds: Vec<_> = card.children.iter().map(LayoutNode::kind).collect();
    assert_eq!(card_kinds, ["image", "heading", "button"]);
    assert_eq!(
        card.style.as_ref().unwrap().background_color.as_deref(),
        Some("rgba(245,247,250,1)")
    );
    match &card.children[0] {
        LayoutNode::Image(image) => {
            assert_eq!(image.src, "https://placehold.co/328x220?text=Product%20photo")
        }
        other => panic!("expected image, got {}", other.kind()),
    }
}

#[test]
fn import_result_serializes_as_tagged_json() {
    let layout = landing_importer()
        .import(&DocumentRef::new("abc123", "1:2"))
        .unwrap();
    let value = serde_json::to_value(&layout).unwrap();
    assert_eq!(value["type"], "section");
    assert_eq!(value["children"][1]["type"], "input");
    assert_eq!(value["children"][2]["children"][2]["label"], "Buy now");
}

#[test]
fn bad_references_fail_before_fetching() {
    let importer = landing_importer();
    let err = importer
        .import_url("https://www.figma.com/design/abc123/Landing")
        .unwrap_err();
    assert!(matches!(err, ImportError::InvalidReference(_)));
    assert_eq!(importer_calls(&importer), 0);
}

fn importer_calls(importer: &Importer<CannedSource>) -> usize {
    importer.source().calls.get()
}

#[test]
fn missing_document_is_unexpected() {
    let importer = Importer::new(
        CannedSource::new(json!({"nodes": {}})),
        Classifier::default(),
    );
    let err = importer.import(&DocumentRef::new("k", "1:2")).unwrap_err();
    assert!(matches!(err, ImportError::UnexpectedResponse(_)));
}

#[test]
fn file_source_reads_api_responses_and_bare_nodes() {
    let dir = tempfile::tempdir().unwrap();

    let full = dir.path().join("response.json");
    std::fs::write(&full, LANDING).unwrap();
    let bare = dir.path().join("node.json");
    std::fs::write(&bare, r#"{"type":"FRAME","name":"Empty"}"#).unwrap();

    let reference = DocumentRef::new("abc123", "1:2");
    let document = FileSource::new(&full).fetch(&reference).unwrap();
    assert_eq!(document["name"], "Landing");

    let layout = Importer::new(FileSource::new(&bare), Classifier::default())
        .import(&reference)
        .unwrap();
    assert_eq!(layout, LayoutNode::section(vec![LayoutNode::text("Empty")]));
}
