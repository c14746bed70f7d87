//! Page orientation detection.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::model::Glyph;

/// Reading direction of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutDirection {
    /// Lines read left-to-right, stacked top-to-bottom.
    Horizontal,
    /// Columns read top-to-bottom, ordered right-to-left.
    Vertical,
}

/// Fewer glyphs than this carry too little signal; such pages default to
/// horizontal.
const MIN_SAMPLE: usize = 10;

/// Distinct-coordinate counts backing the orientation decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionSignal {
    /// Distinct `x0` values, rounded to a tenth of a point.
    pub unique_x: usize,
    /// Distinct `top` values, rounded to a tenth of a point.
    pub unique_y: usize,
}

/// Count distinct quantized x0/top coordinates over a glyph set.
///
/// Coordinates are quantized to deci-points and counted through an ordered
/// set, so the counts are reproducible regardless of input order.
pub fn direction_signal(glyphs: &[Glyph]) -> DirectionSignal {
    let unique_x: BTreeSet<i64> = glyphs.iter().map(|g| quantize(g.x0)).collect();
    let unique_y: BTreeSet<i64> = glyphs.iter().map(|g| quantize(g.top)).collect();
    DirectionSignal {
        unique_x: unique_x.len(),
        unique_y: unique_y.len(),
    }
}

fn quantize(v: f32) -> i64 {
    (v * 10.0).round() as i64
}

/// Decide whether a page is laid out horizontally or vertically.
///
/// Vertical traditional text stacks glyphs at a small number of x-positions
/// with many distinct y-positions; horizontal text is the mirror image. A
/// page is vertical when it has fewer than half as many distinct columns as
/// distinct rows.
pub fn classify_direction(glyphs: &[Glyph]) -> LayoutDirection {
    if glyphs.len() < MIN_SAMPLE {
        return LayoutDirection::Horizontal;
    }

    let signal = direction_signal(glyphs);
    log::debug!(
        "direction signal: {} distinct x, {} distinct y",
        signal.unique_x,
        signal.unique_y
    );

    if signal.unique_x * 2 < signal.unique_y {
        LayoutDirection::Vertical
    } else {
        LayoutDirection::Horizontal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyph_at(x0: f32, top: f32) -> Glyph {
        Glyph::new("字", x0, x0 + 16.0, top, top + 16.0, 16.0, "SimSun")
    }

    #[test]
    fn test_small_sets_default_horizontal() {
        // A single tall column, but below the sample threshold.
        let glyphs: Vec<Glyph> = (0..9).map(|i| glyph_at(100.0, i as f32 * 17.0)).collect();
        assert_eq!(classify_direction(&glyphs), LayoutDirection::Horizontal);
        assert_eq!(classify_direction(&[]), LayoutDirection::Horizontal);
    }

    #[test]
    fn test_single_column_is_vertical() {
        let glyphs: Vec<Glyph> = (0..20).map(|i| glyph_at(100.0, i as f32 * 17.0)).collect();
        let signal = direction_signal(&glyphs);
        assert_eq!(signal.unique_x, 1);
        assert_eq!(signal.unique_y, 20);
        assert_eq!(classify_direction(&glyphs), LayoutDirection::Vertical);
    }

    #[test]
    fn test_single_row_is_horizontal() {
        let glyphs: Vec<Glyph> = (0..20).map(|i| glyph_at(i as f32 * 17.0, 100.0)).collect();
        let signal = direction_signal(&glyphs);
        assert_eq!(signal.unique_x, 20);
        assert_eq!(signal.unique_y, 1);
        assert_eq!(classify_direction(&glyphs), LayoutDirection::Horizontal);
    }

    #[test]
    fn test_quantization_folds_near_coordinates() {
        // 100.02 and 100.04 both round to 100.0.
        let glyphs = vec![glyph_at(100.02, 0.0), glyph_at(100.04, 17.0)];
        assert_eq!(direction_signal(&glyphs).unique_x, 1);
    }
}
