//! Advisory statistics over a layout tree.
//!
//! The report is read-only information for a human looking at an import: how many
//! nodes of each kind came out, which style fields survived, whether placeholder
//! images are in use. Nothing here changes or validates the tree.

use crate::ir::nodes::LayoutNode;
use serde::Serialize;
use std::collections::BTreeMap;

const PLACEHOLDER_HOST: &str = "placehold.co";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DiagnosticsReport {
    pub total_nodes: usize,
    pub types: BTreeMap<String, usize>,
    pub styles: StyleCounts,
    pub images: ImageCounts,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleCounts {
    pub background_color: usize,
    pub border: usize,
    pub border_radius: usize,
    pub box_shadow: usize,
    pub typography: usize,
    pub gap: usize,
    pub padding: usize,
    pub width_percent: usize,
    pub flex_grow: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImageCounts {
    pub total: usize,
    pub placeholders: usize,
}

/// Count nodes, style fields and images in `layout`.
pub fn analyze(layout: Option<&LayoutNode>) -> DiagnosticsReport {
    let mut report = DiagnosticsReport::default();

    let Some(root) = layout else {
        report.warnings.push("Layout JSON is empty.".to_string());
        return report;
    };

    walk(root, &mut report);

    if report.styles.background_color == 0 {
        report
            .warnings
            .push("No background colors detected.".to_string());
    }
    if report.styles.typography == 0 {
        report
            .warnings
            .push("No typography styles detected.".to_string());
    }
    if report.images.placeholders > 0 {
        report
            .warnings
            .push("Placeholder images are being used.".to_string());
    }

    report
}

fn walk(node: &LayoutNode, report: &mut DiagnosticsReport) {
    count(node.kind(), node.style(), report);

    match node {
        LayoutNode::Section(block) | LayoutNode::Container(block) => {
            for child in &block.children {
                walk(child, report);
            }
        }
        LayoutNode::Columns(columns) => {
            for column in &columns.columns {
                count("container", column.style.as_ref(), report);
                for child in &column.children {
                    walk(child, report);
                }
            }
        }
        LayoutNode::Nav(nav) => {
            for item in &nav.items {
                count("navItem", item.style.as_ref(), report);
            }
        }
        LayoutNode::Image(image) => {
            report.images.total += 1;
            if image.src.contains(PLACEHOLDER_HOST) {
                report.images.placeholders += 1;
            }
        }
        _ => {}
    }
}

fn count(kind: &str, style: Option<&crate::ir::style::Style>, report: &mut DiagnosticsReport) {
    report.total_nodes += 1;
    *report.types.entry(kind.to_string()).or_insert(0) += 1;

    let Some(style) = style else {
        return;
    };
    let styles = &mut report.styles;

    styles.background_color += style.background_color.is_some() as usize;
    styles.border += style.border.is_some() as usize;
    styles.border_radius += style.border_radius.is_some() as usize;
    styles.box_shadow += style.box_shadow.is_some() as usize;
    styles.typography += style.has_typography() as usize;
    styles.gap += style.gap.is_some() as usize;
    styles.padding += style.padding.is_some() as usize;
    styles.width_percent += style.width_percent.is_some() as usize;
    styles.flex_grow += style.flex_grow.is_some() as usize;
}
