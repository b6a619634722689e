//! Page-builder import documents.
//!
//! Output is the JSON import format of a block-based page builder: a page header and a
//! tree of sections, columns, containers and widgets. See [`dialect`] for the three
//! structural variants and [`visitor`] for the per-kind mapping.
//!
//! Exports are deterministic: element ids hash structural paths, and settings maps are
//! key-ordered, so the same IR and dialect always serialize to the same bytes.

pub mod dialect;
pub mod element;
pub mod visitor;

pub use dialect::{Dialect, DialectStrategy};
pub use element::{ElType, Element, PageDocument, Settings, WidgetType};

use crate::error::FormatError;
use crate::format::Format;
use blueprint_core::LayoutNode;
use tracing::debug;
use visitor::Visitor;

pub const DEFAULT_TITLE: &str = "Template Title";

/// Export `layout` as a page-builder document. An absent or empty layout gives an
/// empty content list.
pub fn export(layout: Option<&LayoutNode>, title: &str, dialect: Dialect) -> PageDocument {
    let content = match layout {
        Some(root) => Visitor::new(dialect).run(root),
        None => Vec::new(),
    };

    debug!(
        %dialect,
        blocks = content.len(),
        elements = content.iter().map(Element::count).sum::<usize>(),
        "page-builder export"
    );
    PageDocument::new(title, content)
}

/// Page-builder output as a registry format.
#[derive(Debug, Clone)]
pub struct PageBuilderFormat {
    pub title: String,
    pub dialect: Dialect,
}

impl PageBuilderFormat {
    pub fn new(title: impl Into<String>, dialect: Dialect) -> Self {
        PageBuilderFormat {
            title: title.into(),
            dialect,
        }
    }
}

impl Default for PageBuilderFormat {
    fn default() -> Self {
        PageBuilderFormat::new(DEFAULT_TITLE, Dialect::default())
    }
}

impl Format for PageBuilderFormat {
    fn name(&self) -> &str {
        "pagebuilder"
    }

    fn description(&self) -> &str {
        "Page-builder import document (classic, classic_simple or container)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, layout: &LayoutNode) -> Result<String, FormatError> {
        let document = export(Some(layout), &self.title, self.dialect);
        Ok(serde_json::to_string_pretty(&document)?)
    }
}
