//! HTML preview format
//!
//! Renders a layout as one self-contained HTML5 document: a fixed stylesheet plus the
//! layout as nested `div`/`h1-3`/`p`/`img`/`a`/`input`/`nav` markup with inline styles.
//! Serialization only; markup is never parsed back into a layout.
//!
//! The DOM is built with markup5ever_rcdom and written out by html5ever, so escaping of
//! text and attribute values is the serializer's job.

pub mod css;
mod serializer;

use crate::error::FormatError;
use crate::format::Format;
use blueprint_core::LayoutNode;

pub use serializer::serialize_to_html;

/// Format implementation for the HTML preview
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlFormat;

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "Self-contained HTML preview with inline styles"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn supports_parsing(&self) -> bool {
        false
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, layout: &LayoutNode) -> Result<String, FormatError> {
        serialize_to_html(layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_format_name() {
        assert_eq!(HtmlFormat.name(), "html");
    }

    #[test]
    fn test_html_format_capabilities() {
        assert!(!HtmlFormat.supports_parsing());
        assert!(HtmlFormat.supports_serialization());
    }

    #[test]
    fn test_html_format_extensions() {
        assert_eq!(HtmlFormat.file_extensions(), &["html", "htm"]);
    }
}
