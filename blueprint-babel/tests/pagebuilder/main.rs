//! Page-builder export tests.

mod dialects;
mod export;

use blueprint_babel::Element;
use blueprint_core::LayoutNode;
use serde_json::Value;

pub fn landing() -> LayoutNode {
    LayoutNode::from_json(include_str!("fixtures/landing.layout.json"))
        .expect("landing fixture parses")
}

/// One line per element, indented by depth: type, inner flag, widget and settings.
/// Ids are left out so snapshots only move when the structure does.
pub fn outline(content: &[Element]) -> String {
    let mut lines = Vec::new();
    for element in content {
        outline_into(element, 0, &mut lines);
    }
    lines.join("\n")
}

fn outline_into(element: &Element, depth: usize, lines: &mut Vec<String>) {
    let mut line = format!("{}{:?}", "  ".repeat(depth), element.el_type);
    if element.is_inner {
        line.push_str(" inner");
    }
    if let Some(widget) = element.widget_type {
        line.push_str(&format!(" {widget:?}"));
    }
    if !element.settings.is_empty() {
        line.push_str(&format!(" {}", Value::Object(element.settings.clone())));
    }
    lines.push(line);

    for child in &element.elements {
        outline_into(child, depth + 1, lines);
    }
}
