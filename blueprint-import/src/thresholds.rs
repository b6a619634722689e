//! Tunable constants of the classification heuristics.

use serde::Deserialize;

/// Geometric and typographic thresholds used by the classifier.
///
/// The defaults reproduce the behavior the heuristics were calibrated on. They are
/// exposed so a configuration file can adjust them without touching code.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Minimum fraction of the parent's width and height a background-like child
    /// must cover.
    pub background_coverage: f64,
    /// Maximum offset of a background-like child from the parent origin.
    pub background_offset: f64,
    /// Maximum distance between a space-between label's center and the parent's
    /// horizontal center for the centering rewrite to apply.
    pub centered_label_tolerance: f64,
    /// Lower bound of the row-grouping threshold.
    pub row_threshold_min: f64,
    /// Row-grouping threshold as a fraction of the child's height.
    pub row_threshold_factor: f64,
    /// Font sizes at or above which text becomes a level 1, 2 or 3 heading.
    pub heading_sizes: [f64; 3],
    /// Placeholder image side clamp, in pixels.
    pub image_min: u32,
    pub image_max: u32,
    /// Base URL of the placeholder image service.
    pub placeholder_base: String,
}

impl Default for Thresholds {
    fn default() -> Self {
        Thresholds {
            background_coverage: 0.92,
            background_offset: 8.0,
            centered_label_tolerance: 48.0,
            row_threshold_min: 8.0,
            row_threshold_factor: 0.35,
            heading_sizes: [32.0, 24.0, 20.0],
            image_min: 80,
            image_max: 1200,
            placeholder_base: "https://placehold.co".to_string(),
        }
    }
}

impl Thresholds {
    /// Heading level for a font size, or `None` for body text.
    pub fn heading_level(&self, font_size: f64) -> Option<u8> {
        self.heading_sizes
            .iter()
            .position(|min| font_size >= *min)
            .map(|index| index as u8 + 1)
    }

    pub fn clamp_image_side(&self, side: f64) -> u32 {
        let rounded = side.round().max(0.0) as u32;
        rounded.clamp(self.image_min, self.image_max.max(self.image_min))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_levels_follow_size_steps() {
        let t = Thresholds::default();
        assert_eq!(t.heading_level(40.0), Some(1));
        assert_eq!(t.heading_level(32.0), Some(1));
        assert_eq!(t.heading_level(24.0), Some(2));
        assert_eq!(t.heading_level(20.0), Some(3));
        assert_eq!(t.heading_level(19.9), None);
        assert_eq!(t.heading_level(0.0), None);
    }

    #[test]
    fn image_sides_are_clamped() {
        let t = Thresholds::default();
        assert_eq!(t.clamp_image_side(12.0), 80);
        assert_eq!(t.clamp_image_side(320.4), 320);
        assert_eq!(t.clamp_image_side(5000.0), 1200);
    }

    #[test]
    fn partial_tables_keep_defaults() {
        let t: Thresholds =
            serde_json::from_value(serde_json::json!({"centered_label_tolerance": 24.0}))
                .unwrap();
        assert_eq!(t.centered_label_tolerance, 24.0);
        assert_eq!(t.background_coverage, 0.92);
    }
}
