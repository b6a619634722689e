//! Style record → inline CSS.
//!
//! Declarations are emitted in a fixed order and joined with `;`, so equal styles give
//! equal strings.

use blueprint_core::{Align, Direction, Style};

/// Inline declarations for `style`. `force_row` makes the element a row flexbox
/// whatever its own direction (rows and navs).
pub fn inline_css(style: Option<&Style>, force_row: bool) -> String {
    let empty = Style::default();
    let style = style.unwrap_or(&empty);
    let mut css: Vec<String> = Vec::new();

    let direction = if force_row {
        Some(Direction::Row)
    } else {
        style.direction
    };
    if let Some(direction) = direction {
        css.push("display:flex".to_string());
        css.push(format!("flex-direction:{}", direction.as_str()));
    }

    if let Some(grow) = style.flex_grow {
        css.push(format!("flex-grow:{grow}"));
    }
    if let Some(shrink) = style.flex_shrink {
        css.push(format!("flex-shrink:{shrink}"));
    }
    match style.flex_basis {
        Some(basis) => css.push(format!("flex-basis:{basis}px")),
        None if style.flex_basis_auto == Some(true) => css.push("flex-basis:auto".to_string()),
        None => {}
    }

    if let Some(percent) = style.width_percent {
        let percent = trim_decimal(percent.clamp(0.0, 100.0));
        css.push(format!("flex:0 0 {percent}%"));
        css.push(format!("max-width:{percent}%"));
    }

    if let Some(min_height) = style.min_height_px {
        css.push(format!("min-height:{}px", min_height.round() as i64));
    }

    if let Some(gap) = style.gap {
        css.push(format!("gap:{gap}px"));
    }

    push_text(&mut css, "background-color", &style.background_color);
    push_text(&mut css, "border", &style.border);
    push_text(&mut css, "border-radius", &style.border_radius);
    push_text(&mut css, "box-shadow", &style.box_shadow);

    if let Some(padding) = style.padding.filter(|p| !p.is_zero()) {
        css.push(format!(
            "padding:{}px {}px {}px {}px",
            padding.top, padding.right, padding.bottom, padding.left
        ));
    }

    if let Some(justify) = style.justify.and_then(justify_content) {
        css.push(format!("justify-content:{justify}"));
    }
    if let Some(align) = style.align.and_then(align_value) {
        css.push(format!("align-items:{align}"));
    }
    if let Some(align) = style.align_self.and_then(align_value) {
        css.push(format!("align-self:{align}"));
    }

    push_text(&mut css, "font-family", &style.font_family);
    if let Some(size) = style.font_size {
        css.push(format!("font-size:{size}px"));
    }
    if let Some(weight) = style.font_weight {
        css.push(format!("font-weight:{weight}"));
    }
    if let Some(line_height) = style.line_height_px {
        css.push(format!("line-height:{line_height}px"));
    }
    if let Some(spacing) = style.letter_spacing {
        css.push(format!("letter-spacing:{spacing}px"));
    }
    push_text(&mut css, "color", &style.color);
    push_text(&mut css, "text-align", &style.text_align);
    push_text(&mut css, "text-transform", &style.text_transform);

    css.join(";")
}

fn push_text(css: &mut Vec<String>, property: &str, value: &Option<String>) {
    if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
        css.push(format!("{property}:{value}"));
    }
}

fn justify_content(align: Align) -> Option<&'static str> {
    match align {
        Align::Min => Some("flex-start"),
        Align::Center => Some("center"),
        Align::Max => Some("flex-end"),
        Align::SpaceBetween => Some("space-between"),
        Align::SpaceAround => Some("space-around"),
        Align::SpaceEvenly => Some("space-evenly"),
        Align::Baseline | Align::Stretch => None,
    }
}

fn align_value(align: Align) -> Option<&'static str> {
    match align {
        Align::Min => Some("flex-start"),
        Align::Center => Some("center"),
        Align::Max => Some("flex-end"),
        Align::Baseline => Some("baseline"),
        Align::Stretch => Some("stretch"),
        Align::SpaceBetween | Align::SpaceAround | Align::SpaceEvenly => None,
    }
}

/// Up to three decimals, without trailing zeros.
fn trim_decimal(value: f64) -> String {
    let fixed = format!("{value:.3}");
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}
