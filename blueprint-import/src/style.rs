//! Source paint, stroke, effect and typography records to normalized [`Style`]s.
//!
//! Every function here is pure and total: an absent or malformed record simply
//! produces no style field.

use crate::source::{LayoutMode, Paint, PaintKind, Rgba, Sizing, SourceNode};
use blueprint_core::{Align, Direction, Padding, Style};

/// `rgba(r,g,b,a)` with 0..255 channels. Alpha is `opacity × a`, printed with at
/// most three decimals.
pub fn color_css(color: &Rgba, opacity: f64) -> String {
    let channel = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as i64;
    let alpha = (opacity * color.a).clamp(0.0, 1.0);
    let alpha = format!("{alpha:.3}");
    let alpha = alpha.trim_end_matches('0').trim_end_matches('.');
    format!(
        "rgba({},{},{},{})",
        channel(color.r),
        channel(color.g),
        channel(color.b),
        alpha
    )
}

/// First visible solid paint, as CSS.
pub fn solid_paint_css(paints: &[Paint]) -> Option<String> {
    paints
        .iter()
        .filter(|p| p.visible && p.kind == PaintKind::Solid)
        .find_map(|p| p.color.map(|c| color_css(&c, p.opacity.unwrap_or(1.0))))
}

pub fn border_css(node: &SourceNode) -> Option<String> {
    let weight = node.stroke_weight.filter(|w| *w > 0.0)?;
    let color = solid_paint_css(&node.strokes)?;
    Some(format!("{}px solid {}", weight.round() as i64, color))
}

/// Uniform radius as `Npx`, or the four-corner form when only per-corner radii
/// are set.
pub fn radius_css(node: &SourceNode) -> Option<String> {
    if let Some(r) = node.corner_radius {
        let r = r.round() as i64;
        if r > 0 {
            return Some(format!("{r}px"));
        }
    }

    let radii = node.corner_radii?.map(|v| v.round() as i64);
    if radii.iter().copied().max().unwrap_or(0) > 0 {
        Some(format!(
            "{}px {}px {}px {}px",
            radii[0], radii[1], radii[2], radii[3]
        ))
    } else {
        None
    }
}

/// First visible drop shadow as `x y blur spread color`.
pub fn shadow_css(node: &SourceNode) -> Option<String> {
    node.effects
        .iter()
        .filter(|e| e.visible && e.is_drop_shadow)
        .find_map(|e| {
            let color = e.color?;
            Some(format!(
                "{}px {}px {}px {}px {}",
                e.offset_x.round() as i64,
                e.offset_y.round() as i64,
                e.radius.round() as i64,
                e.spread.round() as i64,
                color_css(&color, 1.0)
            ))
        })
}

/// Fill, border, radius and shadow of a container or shape.
pub fn visual_style(node: &SourceNode) -> Style {
    Style {
        background_color: solid_paint_css(&node.fills),
        border: border_css(node),
        border_radius: radius_css(node),
        box_shadow: shadow_css(node),
        ..Style::default()
    }
}

/// Font size of a text node: its own style, else the first positive override.
/// Zero when neither is known.
pub fn text_font_size(node: &SourceNode) -> f64 {
    node.type_style
        .as_ref()
        .and_then(|s| s.font_size)
        .filter(|size| *size > 0.0)
        .or_else(|| node.override_font_sizes.iter().copied().find(|s| *s > 0.0))
        .unwrap_or(0.0)
}

pub fn text_style(node: &SourceNode) -> Style {
    let mut style = Style::default();

    if let Some(ts) = &node.type_style {
        style.font_family = ts.font_family.clone();
        style.font_size = ts.font_size;
        style.font_weight = ts.font_weight.filter(|w| *w >= 0.0).map(|w| w as u32);
        style.letter_spacing = ts.letter_spacing;
        style.line_height_px = ts.line_height_px;
        style.text_align = ts.text_align_horizontal.as_deref().map(|align| {
            match align.to_ascii_lowercase().as_str() {
                "justified" => "justify".to_string(),
                other => other.to_string(),
            }
        });
        style.text_transform = ts.text_case.as_deref().and_then(|case| {
            match case.to_ascii_uppercase().as_str() {
                "UPPER" => Some("uppercase".to_string()),
                "LOWER" => Some("lowercase".to_string()),
                "TITLE" => Some("capitalize".to_string()),
                _ => None,
            }
        });
    }

    style.color = solid_paint_css(&node.fills);

    if style.font_size.is_none() {
        let size = text_font_size(node);
        if size > 0.0 {
            style.font_size = Some(size);
        }
    }

    style
}

/// Direction, gap, padding and axis alignment of an auto-layout node.
///
/// The gap is dropped under distributing justification, where the spacing is
/// implied by the free space.
pub fn layout_style(node: &SourceNode, direction: Direction) -> Style {
    let justify = node.primary_axis_align.as_deref().and_then(Align::parse);
    let distributing = justify.map(|j| j.is_distributing()).unwrap_or(false);

    let padding = node.padding.is_nonzero().then(|| Padding {
        top: node.padding.top.unwrap_or(0.0),
        right: node.padding.right.unwrap_or(0.0),
        bottom: node.padding.bottom.unwrap_or(0.0),
        left: node.padding.left.unwrap_or(0.0),
    });

    Style {
        direction: Some(direction),
        gap: node.item_spacing.filter(|_| !distributing),
        padding,
        justify,
        align: node.counter_axis_align.as_deref().and_then(Align::parse),
        ..Style::default()
    }
}

/// Row direction unless the node stacks vertically.
pub fn own_direction(node: &SourceNode) -> Direction {
    if node.layout_mode == LayoutMode::Vertical {
        Direction::Column
    } else {
        Direction::Row
    }
}

/// Cross-axis self alignment of a vertical auto-layout child.
pub fn align_self(node: &SourceNode) -> Option<Align> {
    cross_align(node, node.sizing_horizontal)
}

/// A recognized explicit alignment, else stretch when the child fills the cross
/// axis. Values such as `INHERIT` fall through to the fill check.
pub fn cross_align(node: &SourceNode, cross_sizing: Option<Sizing>) -> Option<Align> {
    node.layout_align
        .as_deref()
        .and_then(Align::parse)
        .or_else(|| (cross_sizing == Some(Sizing::Fill)).then_some(Align::Stretch))
}

/// Positive grow weight, if any.
pub fn grow_weight(node: &SourceNode) -> Option<f64> {
    node.layout_grow.filter(|g| *g > 0.0)
}
