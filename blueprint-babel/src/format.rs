//! The `Format` trait shared by the layout backends
//!
//! Three formats ship with the crate: `layout` reads and writes the IR's own JSON
//! document, `html` renders a standalone preview page and `pagebuilder` writes
//! the page-builder template JSON. Only `layout` can be parsed back into a tree.

use crate::error::FormatError;
use blueprint_core::LayoutNode;

/// A named text form of a [`LayoutNode`] tree.
///
/// A format answers for itself whether it reads, writes or both; the
/// registry checks those flags before dispatching.
///
/// # Examples
///
/// ```ignore
/// struct OutlineFormat;
///
/// impl Format for OutlineFormat {
///     fn name(&self) -> &str {
///         "outline"
///     }
///
///     fn supports_serialization(&self) -> bool {
///         true
///     }
///
///     fn serialize(&self, layout: &LayoutNode) -> Result<String, FormatError> {
///         Ok(layout.kind().to_string())
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "layout", "html", "pagebuilder")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions written or read by this format, without the dot
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format reads text back into a layout (only `layout` does)
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether this format writes a layout out as text
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Parse source text into a layout
    ///
    /// Default implementation returns NotSupported error.
    fn parse(&self, _source: &str) -> Result<LayoutNode, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Serialize a layout into text
    ///
    /// Default implementation returns NotSupported error.
    fn serialize(&self, _layout: &LayoutNode) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }
}
