//! Promotes nested blocks of a classic section to the top level.
//!
//! # The High-Level Concept
//!
//! An imported frame usually maps to one top-level section whose single column holds the
//! whole page. That is valid but awkward to edit: every visually distinct block sits one
//! or more levels down. Splitting turns each inner section of that column into a
//! top-level section of its own and regroups the loose widgets between them.
//!
//! # The Algorithm
//!
//! For each top-level, non-inner section with empty settings and exactly one column:
//!
//! 1. Scan the column's children in order, buffering everything that is not an inner
//!    section.
//! 2. On an inner section, flush the buffer as a new top-level section (one column
//!    wrapping the buffered children), then emit the inner section itself at the top
//!    level with its inner flag cleared.
//! 3. Flush what is left in the buffer at the end.
//! 4. Keep the original section when the split would not produce more than one block.
//!
//! Synthetic wrappers get ids from the seed `simple.{index}.buf.{n}`, `n` being the
//! number of blocks emitted before them.

use crate::formats::pagebuilder::element::{ElType, Element, Settings};
use crate::ids::IdAllocator;

pub fn split(content: Vec<Element>, ids: &mut IdAllocator) -> Vec<Element> {
    let mut out = Vec::with_capacity(content.len());

    for (i, element) in content.into_iter().enumerate() {
        if element.el_type == ElType::Section && !element.is_inner {
            out.extend(split_section(element, &format!("simple.{i}"), ids));
        } else {
            out.push(element);
        }
    }

    out
}

fn split_section(mut section: Element, seed: &str, ids: &mut IdAllocator) -> Vec<Element> {
    let splittable = section.settings.is_empty()
        && matches!(section.elements.as_slice(), [column] if column.el_type == ElType::Column);
    if !splittable {
        return vec![section];
    }

    let children = &section.elements[0].elements;
    if block_count(children) <= 1 {
        return vec![section];
    }

    let children = match section.elements.pop() {
        Some(column) => column.elements,
        None => return vec![section],
    };

    let mut out = Vec::new();
    let mut buffer = Vec::new();

    for mut child in children {
        if child.is_inner_section() {
            if !buffer.is_empty() {
                let seed = format!("{seed}.buf.{}", out.len());
                out.push(wrap_top_level(std::mem::take(&mut buffer), &seed, ids));
            }
            child.is_inner = false;
            out.push(child);
        } else {
            buffer.push(child);
        }
    }

    if !buffer.is_empty() {
        let seed = format!("{seed}.buf.{}", out.len());
        out.push(wrap_top_level(buffer, &seed, ids));
    }

    out
}

/// Number of top-level blocks a split of `children` would produce.
fn block_count(children: &[Element]) -> usize {
    let mut count = 0;
    let mut buffering = false;

    for child in children {
        if child.is_inner_section() {
            count += 1;
            buffering = false;
        } else if !buffering {
            count += 1;
            buffering = true;
        }
    }

    count
}

fn wrap_top_level(elements: Vec<Element>, seed: &str, ids: &mut IdAllocator) -> Element {
    let section_id = ids.allocate(&format!("section.{seed}"));
    let column_id = ids.allocate(&format!("column.{seed}"));
    Element::section(
        section_id,
        false,
        Settings::new(),
        vec![Element::column(column_id, Settings::new(), elements)],
    )
}
