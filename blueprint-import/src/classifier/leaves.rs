//! Text and image leaves.

use super::Classifier;
use crate::source::{PaintKind, SourceNode};
use crate::style::{radius_css, text_font_size, text_style};
use blueprint_core::{Heading, Image, LayoutNode, Style, Text};

/// `heading` at or above the heading sizes, `text` below. Blank text yields nothing.
pub(super) fn text(classifier: &Classifier, node: &SourceNode) -> Option<LayoutNode> {
    let content = node.text();
    if content.is_empty() {
        return None;
    }

    let style = text_style(node).into_option();
    let level = classifier
        .thresholds()
        .heading_level(text_font_size(node));

    Some(match level {
        Some(level) => LayoutNode::Heading(Heading {
            text: content.to_string(),
            level,
            style,
        }),
        None => LayoutNode::Text(Text {
            text: content.to_string(),
            style,
        }),
    })
}

/// Placeholder `image` for a shape painted with an image fill.
pub(super) fn image(classifier: &Classifier, node: &SourceNode) -> Option<LayoutNode> {
    if !node.node_type.is_shape() {
        return None;
    }
    if !node.fills.iter().any(|fill| fill.kind == PaintKind::Image) {
        return None;
    }

    let thresholds = classifier.thresholds();
    let bbox = node.bbox();
    let width = thresholds.clamp_image_side(bbox.width);
    let height = thresholds.clamp_image_side(bbox.height);

    let label = match node.name.trim() {
        "" => "Image",
        name => name,
    };

    let style = Style {
        border_radius: radius_css(node),
        ..Style::default()
    };

    Some(LayoutNode::Image(Image {
        src: format!(
            "{}/{}x{}?text={}",
            thresholds.placeholder_base.trim_end_matches('/'),
            width,
            height,
            urlencoding::encode(label)
        ),
        alt: label.to_string(),
        style: style.into_option(),
    }))
}
