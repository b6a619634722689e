//! Auto-layout rows and stacks, and free-positioned groups.

use super::Classifier;
use crate::rows::group_into_rows;
use crate::source::{BoundingBox, Sizing, SourceNode};
use crate::style::{align_self, cross_align, grow_weight, layout_style};
use blueprint_core::{Align, Column, Columns, Direction, LayoutNode, Style};

/// Vertical auto-layout: a `container` stacking the classified children, each
/// carrying its self alignment and vertical flex sizing.
pub(super) fn vertical(classifier: &Classifier, node: &SourceNode) -> Option<LayoutNode> {
    let (children, visual) = classifier.absorb_background(node);

    let mut content = Vec::new();
    for child in children {
        let Some(mut mapped) = classifier.classify(child) else {
            continue;
        };
        let sizing = vertical_child_style(child);
        if !sizing.is_empty() {
            let slot = mapped.style_mut();
            let merged = match slot.take() {
                Some(own) => sizing.merged(&own),
                None => sizing,
            };
            *slot = Some(merged);
        }
        content.push(mapped);
    }

    if content.is_empty() {
        return None;
    }

    let style = layout_style(node, Direction::Column).merged(&visual);
    Some(LayoutNode::container(style.into_option(), content))
}

fn vertical_child_style(child: &SourceNode) -> Style {
    let mut style = Style {
        align_self: align_self(child),
        ..Style::default()
    };

    if let Some(grow) = grow_weight(child) {
        style.flex_grow = Some(grow);
        style.flex_shrink = Some(1.0);
        style.flex_basis = Some(0.0);
    } else {
        match child.sizing_vertical {
            Some(Sizing::Fill) => {
                style.flex_grow = Some(1.0);
                style.flex_shrink = Some(1.0);
                style.flex_basis = Some(0.0);
            }
            Some(Sizing::Hug) => {
                style.flex_grow = Some(0.0);
                style.flex_shrink = Some(1.0);
                style.flex_basis_auto = Some(true);
            }
            _ => {}
        }
    }

    style
}

/// Horizontal auto-layout: one column per classified child, sized from the
/// child's fill, hug or fixed width.
pub(super) fn horizontal(classifier: &Classifier, node: &SourceNode) -> Option<LayoutNode> {
    let parent_box = node.bbox();
    let (children, visual) = classifier.absorb_background(node);
    let mut layout = layout_style(node, Direction::Row);
    let available = available_width(node, &parent_box, children.len(), &layout);

    let mut columns = Vec::new();
    let mut sources = Vec::new();
    for child in children {
        let Some(mapped) = classifier.classify(child) else {
            continue;
        };
        let sizing = column_sizing(child, available);
        columns.push(Column::new(sizing.into_option(), vec![mapped]));
        sources.push(child);
    }

    if columns.is_empty() {
        return None;
    }

    if layout.justify == Some(Align::SpaceBetween)
        && columns.len() == 2
        && is_centered_label(classifier, &columns[0], sources[0], &parent_box)
    {
        layout.justify = Some(Align::Min);

        let left = columns[0].style.take().unwrap_or_default();
        columns[0].style = Some(Style {
            flex_grow: Some(1.0),
            flex_shrink: Some(1.0),
            flex_basis: Some(0.0),
            width_px: None,
            width_percent: None,
            text_align: left.text_align.clone().or_else(|| Some("center".to_string())),
            ..left
        });
    }

    let style = layout.merged(&visual);
    Some(LayoutNode::Columns(Columns {
        style: style.into_option(),
        columns,
    }))
}

/// A text label whose center sits near the row's center: the left half of a
/// "centered title + trailing action" bar.
fn is_centered_label(
    classifier: &Classifier,
    column: &Column,
    source: &SourceNode,
    parent_box: &BoundingBox,
) -> bool {
    let is_text = matches!(
        column.children.first(),
        Some(LayoutNode::Text(_)) | Some(LayoutNode::Heading(_))
    );
    is_text
        && (source.bbox().center_x() - parent_box.center_x()).abs()
            <= classifier.thresholds().centered_label_tolerance
}

/// Parent width left for children after horizontal padding and gaps.
fn available_width(
    node: &SourceNode,
    parent_box: &BoundingBox,
    count: usize,
    layout: &Style,
) -> f64 {
    let mut available = parent_box.width;
    if available <= 0.0 {
        return available;
    }

    let pad_left = node.padding.left.unwrap_or(0.0);
    let pad_right = node.padding.right.unwrap_or(0.0);
    available = (available - pad_left - pad_right).max(0.0);

    let gap = layout.gap.unwrap_or(0.0);
    if gap > 0.0 && count > 1 {
        available = (available - gap * (count - 1) as f64).max(0.0);
    }
    available
}

/// Flex sizing of a child within a row. Fill or grow weight wins over hug; a
/// fixed child keeps its pixel width and, when it fits, its share of the row.
fn column_sizing(child: &SourceNode, available: f64) -> Style {
    let mut style = Style::default();
    let bbox = child.bbox();
    let grow = grow_weight(child);

    if child.sizing_horizontal == Some(Sizing::Fill) || grow.is_some() {
        style.flex_grow = Some(grow.unwrap_or(1.0));
        style.flex_shrink = Some(1.0);
        style.flex_basis = Some(0.0);
    } else if child.sizing_horizontal == Some(Sizing::Hug) {
        style.flex_grow = Some(0.0);
        style.flex_shrink = Some(1.0);
        style.flex_basis_auto = Some(true);
    } else if bbox.width > 0.0 {
        style.flex_grow = Some(0.0);
        style.flex_shrink = Some(0.0);
        style.width_px = Some(bbox.width);
        if available > 0.0 {
            let percent = bbox.width / available * 100.0;
            if percent > 0.0 && percent <= 100.0 {
                style.width_percent = Some(percent);
            }
        }
    } else if available > 0.0 {
        style.flex_grow = Some(1.0);
        style.flex_basis = Some(0.0);
    }

    if bbox.height > 0.0 {
        style.min_height_px = Some(bbox.height);
    }

    style.align_self = cross_align(child, child.sizing_vertical);

    style
}

/// No auto-layout: visual rows from top to bottom. Rows with several members
/// become `columns` ordered left to right.
pub(super) fn free(classifier: &Classifier, node: &SourceNode) -> Option<LayoutNode> {
    let (children, visual) = classifier.absorb_background(node);
    if children.is_empty() {
        return None;
    }

    let mut content = Vec::new();
    for mut row in group_into_rows(&children, classifier.thresholds()) {
        if let [single] = row.as_slice() {
            content.extend(classifier.classify(single));
            continue;
        }

        row.sort_by(|a, b| a.bbox().x.total_cmp(&b.bbox().x));
        let columns: Vec<Column> = row
            .into_iter()
            .filter_map(|child| classifier.classify(child))
            .map(|mapped| Column::new(None, vec![mapped]))
            .collect();

        if !columns.is_empty() {
            content.push(LayoutNode::Columns(Columns {
                style: None,
                columns,
            }));
        }
    }

    if content.is_empty() {
        return None;
    }

    Some(LayoutNode::container(visual.into_option(), content))
}
