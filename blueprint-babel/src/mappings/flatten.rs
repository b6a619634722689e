//! Removes redundant wrapper pairs from classic page-builder content.
//!
//! # The High-Level Concept
//!
//! The generic mapping wraps every nested section/container of the IR in an inner
//! section holding one column. When neither of the two carries settings, the pair adds
//! nothing but nesting depth: the column that holds it can take the inner column's
//! children directly.
//!
//! # The Algorithm
//!
//! 1. Walk the content depth-first, children before parents (innermost-first).
//! 2. Inside a column, look at each (already flattened) child:
//!    - an inner section with empty settings,
//!    - holding exactly one column,
//!    - that column having empty settings and not being inner,
//!
//!    is replaced in place by that column's children.
//! 3. Every other element is kept as is.
//!
//! Sections that carry settings (a background, padding, column sizes) are never
//! touched, so flattening does not change the rendered result.

use crate::formats::pagebuilder::element::{ElType, Element};

/// Flatten every top-level element.
pub fn flatten(content: Vec<Element>) -> Vec<Element> {
    content.into_iter().map(flatten_element).collect()
}

fn flatten_element(mut element: Element) -> Element {
    let children = std::mem::take(&mut element.elements);
    element.elements = if element.el_type == ElType::Column {
        flatten_column_children(children)
    } else {
        children.into_iter().map(flatten_element).collect()
    };
    element
}

fn flatten_column_children(children: Vec<Element>) -> Vec<Element> {
    let mut out = Vec::with_capacity(children.len());

    for child in children {
        let mut child = flatten_element(child);
        if is_redundant_inner_section(&child) {
            if let Some(inner_column) = child.elements.pop() {
                out.extend(inner_column.elements);
            }
            continue;
        }
        out.push(child);
    }

    out
}

/// An inner section whose only job is to hold one plain column.
pub fn is_redundant_inner_section(element: &Element) -> bool {
    if !element.is_inner_section() || !element.settings.is_empty() {
        return false;
    }

    match element.elements.as_slice() {
        [column] => {
            column.el_type == ElType::Column && column.settings.is_empty() && !column.is_inner
        }
        _ => false,
    }
}
