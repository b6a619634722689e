//! Sibling geometry: reading order, background detection and row grouping.

use crate::source::{LayoutMode, NodeType, SourceNode};
use crate::thresholds::Thresholds;
use std::cmp::Ordering;

/// Children in reading order: left to right under horizontal auto-layout, top to
/// bottom otherwise, with the other axis breaking ties. The sort is stable.
pub fn sorted_children(node: &SourceNode) -> Vec<&SourceNode> {
    let mut children: Vec<&SourceNode> = node.children.iter().collect();
    let horizontal = node.layout_mode == LayoutMode::Horizontal;

    children.sort_by(|a, b| {
        let (a, b) = (a.bbox(), b.bbox());
        if horizontal {
            a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y))
        } else {
            a.y.total_cmp(&b.y).then(a.x.total_cmp(&b.x))
        }
    });
    children
}

/// Index of the first child that reads as the parent's background: a styled
/// rectangle or vector nearly covering the parent and anchored at its origin.
pub fn find_background_index(
    parent: &SourceNode,
    children: &[&SourceNode],
    thresholds: &Thresholds,
) -> Option<usize> {
    let pb = parent.bbox();
    if pb.width <= 0.0 || pb.height <= 0.0 {
        return None;
    }

    children.iter().position(|child| {
        if !matches!(child.node_type, NodeType::Rectangle | NodeType::Vector) {
            return false;
        }
        if !crate::style::visual_style(child).has_visual() {
            return false;
        }

        let cb = child.bbox();
        if cb.width <= 0.0 || cb.height <= 0.0 {
            return false;
        }

        let covers = cb.width / pb.width >= thresholds.background_coverage
            && cb.height / pb.height >= thresholds.background_coverage;
        let anchored = (cb.x - pb.x).abs() <= thresholds.background_offset
            && (cb.y - pb.y).abs() <= thresholds.background_offset;

        covers && anchored
    })
}

/// Group siblings into visual rows by vertical-center proximity.
///
/// A child joins the first row whose running center lies within
/// `max(row_threshold_min, height × row_threshold_factor)` of its own center; the
/// row center then moves to the average of the two. Rows come back ordered top
/// to bottom, members in arrival order.
pub fn group_into_rows<'a>(
    children: &[&'a SourceNode],
    thresholds: &Thresholds,
) -> Vec<Vec<&'a SourceNode>> {
    struct Row<'a> {
        cy: f64,
        items: Vec<&'a SourceNode>,
    }

    let mut rows: Vec<Row<'a>> = Vec::new();

    for child in children {
        let b = child.bbox();
        let cy = b.center_y();
        let threshold = thresholds
            .row_threshold_min
            .max(b.height * thresholds.row_threshold_factor);

        match rows.iter_mut().find(|row| (row.cy - cy).abs() <= threshold) {
            Some(row) => {
                row.items.push(child);
                row.cy = (row.cy + cy) / 2.0;
            }
            None => rows.push(Row {
                cy,
                items: vec![child],
            }),
        }
    }

    rows.sort_by(|a, b| a.cy.partial_cmp(&b.cy).unwrap_or(Ordering::Equal));
    rows.into_iter().map(|row| row.items).collect()
}
