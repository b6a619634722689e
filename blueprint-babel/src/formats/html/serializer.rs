//! HTML serialization (Layout IR → HTML preview)
//!
//! Pipeline: LayoutNode → RcDom → HTML string → complete document.
//! Every node's style becomes one inline `style` attribute; there are no rewrite passes.

use super::css::inline_css;
use crate::error::FormatError;
use blueprint_core::{Column, LayoutNode, Style};
use html5ever::{
    ns, serialize, serialize::SerializeOpts, serialize::TraversalScope, Attribute, LocalName,
    QualName,
};
use markup5ever_rcdom::{Handle, Node, NodeData, SerializableHandle};
use std::cell::{Cell, RefCell};
use std::default::Default;
use std::rc::Rc;
use tracing::debug;

/// Render `layout` as a complete HTML document. A layout without content gives a
/// document with an empty container.
pub fn serialize_to_html(layout: &LayoutNode) -> Result<String, FormatError> {
    let body = match build_node(layout) {
        Some(root) => serialize_node(&root)?,
        None => String::new(),
    };
    debug!(bytes = body.len(), "html body rendered");
    Ok(wrap_in_document(&body))
}

/// Build the DOM subtree of one IR node. `None` for nodes without content.
/// Unknown nodes always render, as a `<pre>` dump of their JSON.
fn build_node(node: &LayoutNode) -> Option<Handle> {
    if !matches!(node, LayoutNode::Unknown(_)) && !node.has_content() {
        return None;
    }

    let element = match node {
        LayoutNode::Section(block) | LayoutNode::Container(block) => {
            let css = inline_css(block.style.as_ref(), false);
            let div = create_element("div", with_style(vec![("class", "section")], &css));
            append_all(&div, block.children.iter().filter_map(build_node));
            div
        }

        LayoutNode::Columns(columns) => {
            let css = inline_css(columns.style.as_ref(), true);
            let row = create_element("div", with_style(vec![("class", "row")], &css));
            for column in columns.columns.iter().filter(|c| c.has_content()) {
                append(&row, build_column(column));
            }
            row
        }

        LayoutNode::Heading(heading) => {
            let tag = format!("h{}", heading.level.clamp(1, 3));
            let css = inline_css(heading.style.as_ref(), false);
            let h = create_element(&tag, with_style(vec![], &css));
            append(&h, create_text(&heading.text));
            h
        }

        LayoutNode::Text(text) => {
            let css = inline_css(text.style.as_ref(), false);
            let p = create_element("p", with_style(vec![], &css));
            append(&p, create_text(&text.text));
            p
        }

        LayoutNode::Image(image) => {
            let css = inline_css(image.style.as_ref(), false);
            create_element(
                "img",
                with_style(vec![("src", image.src.as_str()), ("alt", image.alt.as_str())], &css),
            )
        }

        LayoutNode::Button(button) => {
            let css = inline_css(button.style.as_ref(), false);
            let a = create_element(
                "a",
                with_style(vec![("class", "button"), ("href", button.href.as_str())], &css),
            );
            append(&a, create_text(&button.label));
            a
        }

        LayoutNode::Input(input) => {
            let css = inline_css(input.style.as_ref(), false);
            create_element(
                "input",
                with_style(
                    vec![("type", "text"), ("placeholder", input.placeholder.as_str())],
                    &css,
                ),
            )
        }

        LayoutNode::Nav(nav) => {
            let css = inline_css(nav.style.as_ref(), true);
            let element = create_element("nav", with_style(vec![], &css));
            for item in nav.items.iter().filter(|item| !item.label.is_empty()) {
                let item_css = inline_css(item.style.as_ref(), false);
                let a = create_element("a", with_style(vec![("href", item.href.as_str())], &item_css));
                append(&a, create_text(&item.label));
                append(&element, a);
            }
            element
        }

        LayoutNode::Unknown(unknown) => {
            debug!(kind = %unknown.kind, "rendering unknown node as JSON");
            let json = serde_json::to_string_pretty(&unknown.to_value()).unwrap_or_default();
            let pre = create_element("pre", vec![]);
            append(&pre, create_text(&json));
            pre
        }
    };

    Some(element)
}

/// A `div.col`. Columns without any sizing hint share the row equally.
fn build_column(column: &Column) -> Handle {
    let mut style = column.style.clone().unwrap_or_default();
    if style.width_percent.is_none() && style.flex_grow.is_none() && style.flex_basis.is_none() {
        style = style.merged(&Style {
            flex_grow: Some(1.0),
            flex_basis: Some(0.0),
            ..Style::default()
        });
    }

    let css = inline_css(Some(&style), false);
    let col = create_element("div", with_style(vec![("class", "col")], &css));
    append_all(&col, column.children.iter().filter_map(build_node));
    col
}

fn with_style<'a>(mut attrs: Vec<(&'a str, &'a str)>, css: &'a str) -> Vec<(&'a str, &'a str)> {
    if !css.is_empty() {
        attrs.push(("style", css));
    }
    attrs
}

fn append(parent: &Handle, child: Handle) {
    parent.children.borrow_mut().push(child);
}

fn append_all(parent: &Handle, children: impl Iterator<Item = Handle>) {
    parent.children.borrow_mut().extend(children);
}

/// Create an HTML element with attributes
fn create_element(tag: &str, attrs: Vec<(&str, &str)>) -> Handle {
    let qual_name = QualName::new(None, ns!(html), LocalName::from(tag));
    let attributes = attrs
        .into_iter()
        .map(|(name, value)| Attribute {
            name: QualName::new(None, ns!(), LocalName::from(name)),
            value: value.to_string().into(),
        })
        .collect();

    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Element {
            name: qual_name,
            attrs: RefCell::new(attributes),
            template_contents: Default::default(),
            mathml_annotation_xml_integration_point: false,
        },
    })
}

/// Create a text node
fn create_text(text: &str) -> Handle {
    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Text {
            contents: RefCell::new(text.to_string().into()),
        },
    })
}

/// Serialize a node and its subtree
fn serialize_node(node: &Handle) -> Result<String, FormatError> {
    let mut output = Vec::new();
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::IncludeNode,
        ..Default::default()
    };

    let serializable = SerializableHandle::from(node.clone());
    serialize(&mut output, &serializable, opts).map_err(|e| {
        FormatError::SerializationError(format!("HTML serialization failed: {}", e))
    })?;

    String::from_utf8(output)
        .map_err(|e| FormatError::SerializationError(format!("UTF-8 conversion failed: {}", e)))
}

/// Wrap the body in a complete HTML document with the preview stylesheet
fn wrap_in_document(body_html: &str) -> String {
    let stylesheet = include_str!("../../../css/preview.css");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <meta name="generator" content="blueprint">
  <style>
{}
  </style>
</head>
<body>
<div class="container">
{}
</div>
</body>
</html>"#,
        stylesheet, body_html
    )
}
