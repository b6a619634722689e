//! Style record attached to IR nodes.
//!
//! All fields are optional; an unset field is omitted from the JSON form. Keys use
//! the camelCase names of the design data (`backgroundColor`, `widthPercent`, ...)
//! so authored layouts and imported ones share one shape.

use super::lenient;
use serde::{de, Deserialize, Deserializer, Serialize};

/// Main axis of a flex-like container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Row,
    Column,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Row => "row",
            Direction::Column => "column",
        }
    }
}

/// Alignment along either axis, using the visual tool's vocabulary.
///
/// Written in upper case; read in any case through [`Align::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Align {
    Min,
    Center,
    Max,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
    Baseline,
    Stretch,
}

impl Align {
    /// Parse a case-insensitive alignment name. Unknown names (`INHERIT`, `AUTO`,
    /// empty strings) yield `None`.
    pub fn parse(value: &str) -> Option<Align> {
        match value.trim().to_ascii_uppercase().as_str() {
            "MIN" => Some(Align::Min),
            "CENTER" => Some(Align::Center),
            "MAX" => Some(Align::Max),
            "SPACE_BETWEEN" => Some(Align::SpaceBetween),
            "SPACE_AROUND" => Some(Align::SpaceAround),
            "SPACE_EVENLY" => Some(Align::SpaceEvenly),
            "BASELINE" => Some(Align::Baseline),
            "STRETCH" => Some(Align::Stretch),
            _ => None,
        }
    }

    /// True for the distributing alignments, which make an explicit gap meaningless.
    pub fn is_distributing(&self) -> bool {
        matches!(
            self,
            Align::SpaceBetween | Align::SpaceAround | Align::SpaceEvenly
        )
    }
}

const ALIGN_NAMES: &[&str] = &[
    "MIN",
    "CENTER",
    "MAX",
    "SPACE_BETWEEN",
    "SPACE_AROUND",
    "SPACE_EVENLY",
    "BASELINE",
    "STRETCH",
];

impl<'de> Deserialize<'de> for Align {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Align::parse(&name).ok_or_else(|| de::Error::unknown_variant(&name, ALIGN_NAMES))
    }
}

/// Per-edge padding in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    #[serde(default)]
    pub top: f64,
    #[serde(default)]
    pub right: f64,
    #[serde(default)]
    pub bottom: f64,
    #[serde(default)]
    pub left: f64,
}

impl Padding {
    pub fn is_zero(&self) -> bool {
        self.top == 0.0 && self.right == 0.0 && self.bottom == 0.0 && self.left == 0.0
    }
}

/// Normalized style fields shared by every IR node kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<Padding>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_align",
        skip_serializing_if = "Option::is_none"
    )]
    pub justify: Option<Align>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_align",
        skip_serializing_if = "Option::is_none"
    )]
    pub align: Option<Align>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_align",
        skip_serializing_if = "Option::is_none"
    )]
    pub align_self: Option<Align>,

    // Sizing hints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flex_grow: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flex_shrink: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flex_basis: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flex_basis_auto: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width_px: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width_percent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_height_px: Option<f64>,

    // Visual
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub box_shadow: Option<String>,

    // Typography
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_u32",
        skip_serializing_if = "Option::is_none"
    )]
    pub font_weight: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height_px: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_transform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

macro_rules! overlay {
    ($base:ident, $over:ident; $($field:ident),+ $(,)?) => {
        $(
            if $over.$field.is_some() {
                $base.$field = $over.$field.clone();
            }
        )+
    };
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        *self == Style::default()
    }

    /// Returns a copy of `self` with every field set in `over` replacing ours.
    pub fn merged(&self, over: &Style) -> Style {
        let mut out = self.clone();
        overlay!(out, over;
            direction, gap, padding, justify, align, align_self,
            flex_grow, flex_shrink, flex_basis, flex_basis_auto,
            width_px, width_percent, min_height_px,
            background_color, border, border_radius, box_shadow,
            font_family, font_size, font_weight, letter_spacing, line_height_px,
            text_align, text_transform, color,
        );
        out
    }

    /// True when any of the four visual fields (fill, border, radius, shadow) is set.
    pub fn has_visual(&self) -> bool {
        self.background_color.is_some()
            || self.border.is_some()
            || self.border_radius.is_some()
            || self.box_shadow.is_some()
    }

    /// True when any typography field counted by diagnostics is set.
    pub fn has_typography(&self) -> bool {
        self.font_family.is_some()
            || self.font_size.is_some()
            || self.font_weight.is_some()
            || self.color.is_some()
    }

    /// `Some(self)` unless nothing is set.
    pub fn into_option(self) -> Option<Style> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}
