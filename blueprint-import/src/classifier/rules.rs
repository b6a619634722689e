//! Pattern rules tried before the layout-axis dispatch.
//!
//! Each rule is a `(predicate, builder)` pair over the same node. Predicates only
//! inspect structure and style; builders classify children and may still decline
//! by returning `None`, in which case the next rule is tried.

use super::Classifier;
use crate::source::{LayoutMode, NodeType, SourceNode};
use crate::style::{layout_style, own_direction, text_font_size, text_style, visual_style};
use blueprint_core::{Button, Direction, Input, LayoutNode, Nav, NavItem, Style};

pub type Predicate = fn(&Classifier, &SourceNode) -> bool;
pub type Builder = fn(&Classifier, &SourceNode) -> Option<LayoutNode>;

pub struct Rule {
    pub name: &'static str,
    pub matches: Predicate,
    pub build: Builder,
}

/// Rules in priority order; the first one that fires wins.
pub const RULES: &[Rule] = &[
    Rule {
        name: "card",
        matches: is_card,
        build: build_card,
    },
    Rule {
        name: "input",
        matches: is_input,
        build: build_input,
    },
    Rule {
        name: "button",
        matches: is_button,
        build: build_button,
    },
    Rule {
        name: "nav",
        matches: is_nav,
        build: build_nav,
    },
];

const INPUT_KEYWORDS: [&str; 4] = ["search", "input", "field", "enter"];

/// A framed node stacking content over a full-bleed background shape.
pub fn is_card(classifier: &Classifier, node: &SourceNode) -> bool {
    node.node_type.is_frame_like()
        && node.layout_mode != LayoutMode::Horizontal
        && node.children.len() >= 2
        && classifier.split_background(node).1.is_some()
}

/// Container with the background's visual style under the node's own, holding
/// every other child. Needs at least two children with content.
pub fn build_card(classifier: &Classifier, node: &SourceNode) -> Option<LayoutNode> {
    let (children, background) = classifier.split_background(node);
    let background = background?;

    let content = classifier.classify_all(children);
    if content.len() < 2 {
        return None;
    }

    let style = visual_style(background).merged(&visual_style(node));
    Some(LayoutNode::container(style.into_option(), content))
}

/// Label plus optional icon inside a styled or padded frame.
struct Control<'a> {
    text: &'a SourceNode,
    icons: usize,
    visual: Style,
}

impl Control<'_> {
    fn label(&self) -> &str {
        self.text.text()
    }
}

/// Split a frame-like node into one text child, icon-like siblings and the
/// merged visual style. `None` for any other child mix.
fn control_parts<'a>(classifier: &Classifier, node: &'a SourceNode) -> Option<Control<'a>> {
    if !node.node_type.is_frame_like() || node.children.is_empty() {
        return None;
    }

    let (children, background) = classifier.split_background(node);
    let mut visual = visual_style(node);
    if let Some(background) = background {
        visual = visual.merged(&visual_style(background));
    }

    let mut text = None;
    let mut icons = 0;
    for child in children {
        if child.node_type == NodeType::Text {
            if text.replace(child).is_some() {
                return None;
            }
        } else if child.node_type.is_icon_like() {
            icons += 1;
        } else {
            return None;
        }
    }

    let control = Control {
        text: text?,
        icons,
        visual,
    };
    if control.icons > 1 || control.label().is_empty() {
        return None;
    }
    if !control.visual.has_visual() && !node.padding.is_nonzero() {
        return None;
    }
    Some(control)
}

fn control_style(node: &SourceNode, control: &Control<'_>) -> Option<Style> {
    layout_style(node, own_direction(node))
        .merged(&control.visual)
        .merged(&text_style(control.text))
        .into_option()
}

/// Auto-layout field with a placeholder, recognized by its name or placeholder
/// wording, or by a leading or trailing icon.
pub fn is_input(classifier: &Classifier, node: &SourceNode) -> bool {
    if node.layout_mode == LayoutMode::None {
        return false;
    }
    let Some(control) = control_parts(classifier, node) else {
        return false;
    };

    let name = node.name.trim().to_lowercase();
    let placeholder = control.label().to_lowercase();
    let worded = INPUT_KEYWORDS
        .iter()
        .any(|word| name.contains(word) || placeholder.contains(word));

    worded || control.icons > 0
}

pub fn build_input(classifier: &Classifier, node: &SourceNode) -> Option<LayoutNode> {
    let control = control_parts(classifier, node)?;
    Some(LayoutNode::Input(Input {
        placeholder: control.label().to_string(),
        style: control_style(node, &control),
    }))
}

/// Styled label with at most one icon.
pub fn is_button(classifier: &Classifier, node: &SourceNode) -> bool {
    control_parts(classifier, node).is_some()
}

pub fn build_button(classifier: &Classifier, node: &SourceNode) -> Option<LayoutNode> {
    let control = control_parts(classifier, node)?;
    Some(LayoutNode::Button(Button {
        label: control.label().to_string(),
        href: "#".to_string(),
        style: control_style(node, &control),
    }))
}

/// Horizontal run of two or more non-empty, body-sized text labels. A heading-sized
/// label makes the row a title bar instead.
pub fn is_nav(classifier: &Classifier, node: &SourceNode) -> bool {
    node.layout_mode == LayoutMode::Horizontal
        && node.children.len() >= 2
        && node.children.iter().all(|child| {
            child.node_type == NodeType::Text
                && !child.text().is_empty()
                && classifier
                    .thresholds()
                    .heading_level(text_font_size(child))
                    .is_none()
        })
}

pub fn build_nav(_classifier: &Classifier, node: &SourceNode) -> Option<LayoutNode> {
    let items: Vec<NavItem> = crate::rows::sorted_children(node)
        .into_iter()
        .filter(|child| !child.text().is_empty())
        .map(|child| NavItem {
            label: child.text().to_string(),
            href: "#".to_string(),
            style: text_style(child).into_option(),
        })
        .collect();

    if items.is_empty() {
        return None;
    }

    let style = layout_style(node, Direction::Row).merged(&visual_style(node));
    Some(LayoutNode::Nav(Nav {
        style: style.into_option(),
        items,
    }))
}
