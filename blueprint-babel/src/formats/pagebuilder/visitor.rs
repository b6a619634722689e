//! IR → page-builder elements.
//!
//! One visitor serves all dialects. It owns the recursion, pruning, leaf widgets and id
//! allocation; everything structural (how a section or a columns row is wrapped, what
//! the top level must look like, which rewrite passes run) is asked of the dialect's
//! [`DialectStrategy`].
//!
//! Element ids hash the node's structural path: `root` for the root, `{path}.{i}` for
//! list children, with the wrapper segments (`.column.0.elements`, `.elements`,
//! `.col.{i}`, ...) in between chosen by the strategy.

use super::dialect::{Dialect, DialectStrategy};
use super::element::{Element, Settings, WidgetType};
use crate::ids::IdAllocator;
use blueprint_core::{LayoutNode, Style};
use serde_json::{json, Value};

pub const ROOT_PATH: &str = "root";

pub struct Visitor {
    strategy: &'static dyn DialectStrategy,
    ids: IdAllocator,
}

impl Visitor {
    pub fn new(dialect: Dialect) -> Self {
        Visitor {
            strategy: dialect.strategy(),
            ids: IdAllocator::new(),
        }
    }

    /// Map the tree under `root` to top-level content, passes included.
    pub fn run(mut self, root: &LayoutNode) -> Vec<Element> {
        let strategy = self.strategy;
        let mapped: Vec<Element> = self.map_node(root, ROOT_PATH, 0).into_iter().collect();
        let content = strategy.normalize_root(&mut self, mapped);
        strategy.rewrite(&mut self, content)
    }

    pub fn id(&mut self, path: &str) -> String {
        self.ids.allocate(path)
    }

    pub fn ids(&mut self) -> &mut IdAllocator {
        &mut self.ids
    }

    /// `None` for nodes without renderable content.
    pub fn map_node(&mut self, node: &LayoutNode, path: &str, depth: usize) -> Option<Element> {
        if !node.has_content() {
            return None;
        }

        let strategy = self.strategy;
        let element = match node {
            LayoutNode::Section(block) => strategy.wrap_section(self, block, path, depth),
            LayoutNode::Container(block) => strategy.wrap_container(self, block, path, depth),
            LayoutNode::Columns(columns) => strategy.wrap_columns(self, columns, path, depth),
            leaf => self.leaf(leaf, path)?,
        };
        Some(element)
    }

    /// Map an ordered child list at `{path}.{i}`, dropping empty results.
    pub fn map_children(
        &mut self,
        children: &[LayoutNode],
        path: &str,
        depth: usize,
    ) -> Vec<Element> {
        children
            .iter()
            .enumerate()
            .filter_map(|(i, child)| self.map_node(child, &format!("{path}.{i}"), depth))
            .collect()
    }

    fn leaf(&mut self, node: &LayoutNode, path: &str) -> Option<Element> {
        let (widget_type, settings) = match node {
            LayoutNode::Heading(heading) => {
                let level = heading.level.clamp(1, 6);
                let mut settings = Settings::new();
                settings.insert("title".to_string(), json!(heading.text));
                settings.insert("header_size".to_string(), json!(format!("h{level}")));
                insert_align(&mut settings, heading.style.as_ref());
                (WidgetType::Heading, settings)
            }
            LayoutNode::Text(text) => {
                let mut settings = Settings::new();
                settings.insert(
                    "editor".to_string(),
                    json!(format!("<p>{}</p>", escape_html(&text.text))),
                );
                insert_align(&mut settings, text.style.as_ref());
                (WidgetType::TextEditor, settings)
            }
            LayoutNode::Image(image) => {
                let mut settings = Settings::new();
                settings.insert("image".to_string(), json!({ "url": image.src }));
                settings.insert("caption".to_string(), json!(image.alt));
                (WidgetType::Image, settings)
            }
            LayoutNode::Button(button) => {
                let mut settings = Settings::new();
                settings.insert("text".to_string(), json!(button.label));
                settings.insert("link".to_string(), json!({ "url": button.href }));
                (WidgetType::Button, settings)
            }
            LayoutNode::Input(input) => html_settings(format!(
                r#"<input type="text" placeholder="{}" />"#,
                escape_html(&input.placeholder)
            )),
            LayoutNode::Nav(nav) => {
                let links: String = nav
                    .items
                    .iter()
                    .filter(|item| !item.label.is_empty())
                    .map(|item| {
                        format!(
                            r#"<a href="{}">{}</a>"#,
                            escape_html(&item.href),
                            escape_html(&item.label)
                        )
                    })
                    .collect();
                html_settings(format!("<nav>{links}</nav>"))
            }
            LayoutNode::Section(_)
            | LayoutNode::Container(_)
            | LayoutNode::Columns(_)
            | LayoutNode::Unknown(_) => return None,
        };

        Some(Element::widget(self.id(path), widget_type, settings))
    }
}

fn html_settings(html: String) -> (WidgetType, Settings) {
    let mut settings = Settings::new();
    settings.insert("html".to_string(), Value::String(html));
    (WidgetType::Html, settings)
}

fn insert_align(settings: &mut Settings, style: Option<&Style>) {
    if let Some(align) = style.and_then(|s| s.text_align.as_deref()) {
        if !align.is_empty() {
            settings.insert("align".to_string(), json!(align));
        }
    }
}

/// Background and padding settings shared by sections, columns and containers.
pub fn wrapper_settings(style: Option<&Style>) -> Settings {
    let mut settings = Settings::new();
    let Some(style) = style else {
        return settings;
    };

    if let Some(color) = style.background_color.as_deref().filter(|c| !c.is_empty()) {
        settings.insert("background_background".to_string(), json!("classic"));
        settings.insert("background_color".to_string(), json!(color));
    }

    if let Some(padding) = style.padding {
        let edges = [padding.top, padding.right, padding.bottom, padding.left]
            .map(|edge| (edge.round() as i64).to_string());
        let linked = edges.iter().all(|edge| *edge == edges[0]);
        let [top, right, bottom, left] = edges;
        settings.insert(
            "padding".to_string(),
            json!({
                "unit": "px",
                "top": top,
                "right": right,
                "bottom": bottom,
                "left": left,
                "isLinked": linked,
            }),
        );
    }

    settings
}

/// Escape text for HTML content and double- or single-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}
