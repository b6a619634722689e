//! The Layout IR itself as a format.
//!
//! Parsing reads the JSON form produced by the importer or written by hand; serializing
//! writes it back pretty-printed. This is the only format that supports parsing, so every
//! conversion starts here.

use crate::error::FormatError;
use crate::format::Format;
use blueprint_core::LayoutNode;

#[derive(Debug, Default, Clone, Copy)]
pub struct LayoutFormat;

impl Format for LayoutFormat {
    fn name(&self) -> &str {
        "layout"
    }

    fn description(&self) -> &str {
        "Layout IR as JSON"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<LayoutNode, FormatError> {
        Ok(LayoutNode::from_json(source)?)
    }

    fn serialize(&self, layout: &LayoutNode) -> Result<String, FormatError> {
        Ok(serde_json::to_string_pretty(layout)?)
    }
}
