//! Page-builder dialects.
//!
//! The three dialects share the visitor and differ only in structure:
//!
//! | dialect          | section / container        | columns                          | top level  | passes          |
//! |------------------|----------------------------|----------------------------------|------------|-----------------|
//! | `classic`        | section → column → children | section, one column per entry    | sections   | flatten         |
//! | `classic_simple` | same as classic            | same as classic                  | sections   | split, flatten  |
//! | `container`      | container → children       | container of sub-containers      | containers | none            |
//!
//! A dialect is a [`DialectStrategy`]; [`Dialect::strategy`] picks the static instance.

use super::element::{ElType, Element, Settings};
use super::visitor::{wrapper_settings, Visitor, ROOT_PATH};
use crate::mappings::{column_size::column_shares, flatten::flatten, split::split};
use blueprint_core::{Block, Column, Columns, LayoutNode, Style};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum Dialect {
    /// Dialect A
    #[default]
    Classic,
    /// Dialect B
    ClassicSimple,
    /// Dialect C
    Container,
}

impl Dialect {
    pub const ALL: [Dialect; 3] = [Dialect::Classic, Dialect::ClassicSimple, Dialect::Container];

    /// Case-insensitive lookup. Unknown names fall back to `classic`.
    pub fn from_name(name: &str) -> Dialect {
        match name.trim().to_ascii_lowercase().as_str() {
            "classic_simple" => Dialect::ClassicSimple,
            "container" => Dialect::Container,
            _ => Dialect::Classic,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Dialect::Classic => "classic",
            Dialect::ClassicSimple => "classic_simple",
            Dialect::Container => "container",
        }
    }

    pub fn strategy(&self) -> &'static dyn DialectStrategy {
        match self {
            Dialect::Classic => &CLASSIC,
            Dialect::ClassicSimple => &CLASSIC_SIMPLE,
            Dialect::Container => &CONTAINER,
        }
    }
}

impl From<String> for Dialect {
    fn from(name: String) -> Self {
        Dialect::from_name(&name)
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Structural builders of one dialect.
///
/// Builders receive the visitor so they can map children and allocate ids; they only
/// run for nodes that have content.
pub trait DialectStrategy: Sync {
    /// Element type every top-level block must have.
    fn top_level(&self) -> ElType;

    fn wrap_section(&self, v: &mut Visitor, block: &Block, path: &str, depth: usize) -> Element;

    fn wrap_container(&self, v: &mut Visitor, block: &Block, path: &str, depth: usize)
        -> Element;

    fn wrap_columns(&self, v: &mut Visitor, columns: &Columns, path: &str, depth: usize)
        -> Element;

    /// Wrap a root-level element that is not a top-level block.
    fn wrap_leaf(&self, v: &mut Visitor, element: Element, index: usize) -> Element;

    /// Coerce mapped root results into a list of top-level blocks.
    fn normalize_root(&self, v: &mut Visitor, elements: Vec<Element>) -> Vec<Element> {
        elements
            .into_iter()
            .enumerate()
            .map(|(i, element)| {
                if element.el_type == self.top_level() {
                    element
                } else {
                    self.wrap_leaf(v, element, i)
                }
            })
            .collect()
    }

    /// Rewrite passes over the normalized content.
    fn rewrite(&self, _v: &mut Visitor, content: Vec<Element>) -> Vec<Element> {
        content
    }
}

/// Dialects A and B. B additionally splits top-level sections.
pub struct ClassicStrategy {
    split: bool,
}

pub struct ContainerStrategy;

/// Column entries with content, with their original index for id paths.
fn kept_columns(columns: &Columns) -> Vec<(usize, &Column)> {
    columns
        .columns
        .iter()
        .enumerate()
        .filter(|(_, column)| column.has_content())
        .collect()
}

static CLASSIC: ClassicStrategy = ClassicStrategy { split: false };
static CLASSIC_SIMPLE: ClassicStrategy = ClassicStrategy { split: true };
static CONTAINER: ContainerStrategy = ContainerStrategy;

impl ClassicStrategy {
    fn section_from_children(
        &self,
        v: &mut Visitor,
        block: &Block,
        path: &str,
        depth: usize,
    ) -> Element {
        let id = v.id(path);
        let column_id = v.id(&format!("{path}.column.0"));
        let elements = v.map_children(&block.children, &format!("{path}.column.0.elements"), depth + 2);
        Element::section(
            id,
            depth > 0,
            wrapper_settings(block.style.as_ref()),
            vec![Element::column(column_id, Settings::new(), elements)],
        )
    }
}

impl DialectStrategy for ClassicStrategy {
    fn top_level(&self) -> ElType {
        ElType::Section
    }

    fn wrap_section(&self, v: &mut Visitor, block: &Block, path: &str, depth: usize) -> Element {
        // A section around a single row is that row.
        if let [LayoutNode::Columns(columns)] = block.children.as_slice() {
            let mut element = self.wrap_columns(v, columns, path, depth);
            for (key, value) in wrapper_settings(block.style.as_ref()) {
                element.settings.entry(key).or_insert(value);
            }
            return element;
        }
        self.section_from_children(v, block, path, depth)
    }

    fn wrap_container(&self, v: &mut Visitor, block: &Block, path: &str, depth: usize) -> Element {
        self.section_from_children(v, block, path, depth)
    }

    fn wrap_columns(&self, v: &mut Visitor, columns: &Columns, path: &str, depth: usize) -> Element {
        let id = v.id(path);
        let kept = kept_columns(columns);
        let shares = column_shares(kept.iter().map(|(_, column)| column.style.as_ref()));

        let mut elements = Vec::with_capacity(kept.len());
        for (position, (i, column)) in kept.into_iter().enumerate() {
            let column_id = v.id(&format!("{path}.column.{i}"));
            let children = v.map_children(&column.children, &format!("{path}.col.{i}"), depth + 2);
            let mut settings = wrapper_settings(column.style.as_ref());
            if let Some(share) = shares.as_ref().and_then(|s| s.get(position)) {
                settings.insert("_column_size".to_string(), json!(share.to_string()));
            }
            elements.push(Element::column(column_id, settings, children));
        }

        Element::section(id, depth > 0, wrapper_settings(columns.style.as_ref()), elements)
    }

    fn wrap_leaf(&self, v: &mut Visitor, element: Element, index: usize) -> Element {
        let path = format!("{ROOT_PATH}.wrap.section.{index}");
        let id = v.id(&path);
        let column_id = v.id(&format!("{path}.column.0"));
        Element::section(
            id,
            false,
            Settings::new(),
            vec![Element::column(column_id, Settings::new(), vec![element])],
        )
    }

    fn rewrite(&self, v: &mut Visitor, content: Vec<Element>) -> Vec<Element> {
        let before = content.len();
        let content = if self.split {
            split(content, v.ids())
        } else {
            content
        };
        let content = flatten(content);
        debug!(split = self.split, before, after = content.len(), "classic passes applied");
        content
    }
}

impl ContainerStrategy {
    fn settings(style: Option<&Style>, row: bool) -> Settings {
        let mut settings = wrapper_settings(style);
        let direction = if row {
            Some("row")
        } else {
            style.and_then(|s| s.direction).map(|d| d.as_str())
        };
        if let Some(direction) = direction {
            settings.insert("flex_direction".to_string(), json!(direction));
        }
        settings
    }

    fn container(&self, v: &mut Visitor, block: &Block, path: &str, depth: usize) -> Element {
        let id = v.id(path);
        let elements = v.map_children(&block.children, &format!("{path}.elements"), depth + 1);
        Element::container(
            id,
            depth > 0,
            Self::settings(block.style.as_ref(), false),
            elements,
        )
    }
}

impl DialectStrategy for ContainerStrategy {
    fn top_level(&self) -> ElType {
        ElType::Container
    }

    fn wrap_section(&self, v: &mut Visitor, block: &Block, path: &str, depth: usize) -> Element {
        self.container(v, block, path, depth)
    }

    fn wrap_container(&self, v: &mut Visitor, block: &Block, path: &str, depth: usize) -> Element {
        self.container(v, block, path, depth)
    }

    fn wrap_columns(&self, v: &mut Visitor, columns: &Columns, path: &str, depth: usize) -> Element {
        let id = v.id(path);
        let kept = kept_columns(columns);
        let shares = column_shares(kept.iter().map(|(_, column)| column.style.as_ref()));

        let mut elements = Vec::with_capacity(kept.len());
        for (position, (i, column)) in kept.into_iter().enumerate() {
            let column_id = v.id(&format!("{path}.container.{i}"));
            let children = v.map_children(&column.children, &format!("{path}.col.{i}"), depth + 2);
            let mut settings = Self::settings(column.style.as_ref(), false);
            if let Some(share) = shares.as_ref().and_then(|s| s.get(position)) {
                settings.insert(
                    "width".to_string(),
                    json!({"unit": "%", "size": share, "sizes": []}),
                );
            }
            elements.push(Element::container(column_id, true, settings, children));
        }

        Element::container(
            id,
            depth > 0,
            Self::settings(columns.style.as_ref(), true),
            elements,
        )
    }

    fn wrap_leaf(&self, v: &mut Visitor, element: Element, index: usize) -> Element {
        let id = v.id(&format!("{ROOT_PATH}.wrap.container.{index}"));
        Element::container(id, false, Settings::new(), vec![element])
    }
}
