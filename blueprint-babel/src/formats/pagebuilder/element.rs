//! Page-builder document model.
//!
//! A document is `{title, type, version, page_settings, content}` where content is a list
//! of nested elements. Every element has the same shape:
//!
//! ```json
//! {"id": "1a2b3c4d", "elType": "widget", "widgetType": "heading",
//!  "isInner": false, "settings": {"title": "Hello", "header_size": "h1"}, "elements": []}
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const DOCUMENT_TYPE: &str = "page";
pub const DOCUMENT_VERSION: &str = "0.4";

/// Free-form element settings. An empty map serializes as `{}`.
pub type Settings = Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElType {
    Section,
    Column,
    Container,
    Widget,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WidgetType {
    Heading,
    TextEditor,
    Image,
    Button,
    Html,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub id: String,
    pub el_type: ElType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub widget_type: Option<WidgetType>,
    pub is_inner: bool,
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub elements: Vec<Element>,
}

impl Element {
    pub fn section(id: String, is_inner: bool, settings: Settings, elements: Vec<Element>) -> Self {
        Element {
            id,
            el_type: ElType::Section,
            widget_type: None,
            is_inner,
            settings,
            elements,
        }
    }

    /// Columns are never marked inner.
    pub fn column(id: String, settings: Settings, elements: Vec<Element>) -> Self {
        Element {
            id,
            el_type: ElType::Column,
            widget_type: None,
            is_inner: false,
            settings,
            elements,
        }
    }

    pub fn container(
        id: String,
        is_inner: bool,
        settings: Settings,
        elements: Vec<Element>,
    ) -> Self {
        Element {
            id,
            el_type: ElType::Container,
            widget_type: None,
            is_inner,
            settings,
            elements,
        }
    }

    pub fn widget(id: String, widget_type: WidgetType, settings: Settings) -> Self {
        Element {
            id,
            el_type: ElType::Widget,
            widget_type: Some(widget_type),
            is_inner: false,
            settings,
            elements: Vec::new(),
        }
    }

    pub fn is_inner_section(&self) -> bool {
        self.el_type == ElType::Section && self.is_inner
    }

    /// Number of elements in this subtree, itself included.
    pub fn count(&self) -> usize {
        1 + self.elements.iter().map(Element::count).sum::<usize>()
    }
}

/// A complete page-builder import document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageDocument {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub version: String,
    #[serde(default)]
    pub page_settings: Settings,
    #[serde(default)]
    pub content: Vec<Element>,
}

impl PageDocument {
    pub fn new(title: impl Into<String>, content: Vec<Element>) -> Self {
        PageDocument {
            title: title.into(),
            kind: DOCUMENT_TYPE.to_string(),
            version: DOCUMENT_VERSION.to_string(),
            page_settings: Settings::new(),
            content,
        }
    }
}
