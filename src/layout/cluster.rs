//! Grouping glyphs into lines (horizontal) or columns (vertical).

use std::cmp::Ordering;

use super::LayoutDirection;
use crate::model::Glyph;

/// Fraction of the previous glyph's size used as the grouping tolerance.
const GROUP_TOLERANCE: f32 = 0.5;

/// An ordered group of glyphs forming one visual line or column.
///
/// Glyphs are held in reading order along the secondary axis (x0 ascending
/// for lines, top ascending for columns).
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    pub glyphs: Vec<Glyph>,
}

impl Cluster {
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Concatenated raw glyph text.
    pub fn raw_text(&self) -> String {
        self.glyphs.iter().map(|g| g.text.as_str()).collect()
    }
}

/// Primary-axis coordinate: the stacking axis of lines/columns.
fn primary(g: &Glyph, direction: LayoutDirection) -> f32 {
    match direction {
        LayoutDirection::Horizontal => g.top,
        LayoutDirection::Vertical => g.x0,
    }
}

/// Secondary-axis coordinate: the reading axis within a line/column.
fn secondary(g: &Glyph, direction: LayoutDirection) -> f32 {
    match direction {
        LayoutDirection::Horizontal => g.x0,
        LayoutDirection::Vertical => g.top,
    }
}

fn cmp_f32(a: f32, b: f32) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Group glyphs into ordered clusters along the primary axis.
///
/// Glyphs are sorted by the primary axis (secondary axis breaks ties, keeping
/// the order deterministic over equal float keys) and walked once: a glyph
/// joins the open cluster when its primary-axis step from the previous glyph
/// stays under half that glyph's size, otherwise it starts a new cluster.
/// The tolerance is per-step, so it drifts with the previous glyph's size;
/// that matches the layout convention of the source material and is kept.
///
/// Vertical pages read right-to-left, so the cluster sequence is reversed
/// there before each cluster is re-sorted into reading order along the
/// secondary axis.
pub fn cluster_glyphs(direction: LayoutDirection, mut glyphs: Vec<Glyph>) -> Vec<Cluster> {
    if glyphs.is_empty() {
        return Vec::new();
    }

    glyphs.sort_by(|a, b| {
        cmp_f32(primary(a, direction), primary(b, direction))
            .then_with(|| cmp_f32(secondary(a, direction), secondary(b, direction)))
    });

    let mut clusters: Vec<Cluster> = Vec::new();
    let mut current: Vec<Glyph> = Vec::new();

    for glyph in glyphs {
        if let Some(prev) = current.last() {
            let tolerance = prev.size * GROUP_TOLERANCE;
            let step = primary(&glyph, direction) - primary(prev, direction);
            if step >= tolerance {
                clusters.push(Cluster {
                    glyphs: std::mem::take(&mut current),
                });
            }
        }
        current.push(glyph);
    }
    clusters.push(Cluster { glyphs: current });

    if direction == LayoutDirection::Vertical {
        clusters.reverse();
    }

    for cluster in &mut clusters {
        cluster.glyphs.sort_by(|a, b| {
            cmp_f32(secondary(a, direction), secondary(b, direction))
                .then_with(|| cmp_f32(primary(a, direction), primary(b, direction)))
        });
    }

    clusters
}
