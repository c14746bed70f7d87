//! Merging cluster glyphs into styled or size-keyed runs.

use unicode_normalization::UnicodeNormalization;

use super::{Cluster, LayoutDirection};
use crate::model::{Glyph, Line, LineItem, SizePt, Span, TextStyle};
use crate::translit::Transliterator;

/// Fraction of the previous glyph's size beyond which a reading-axis gap
/// becomes a synthetic space.
const GAP_TOLERANCE: f32 = 1.5;

/// How a cluster's glyphs are merged into runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergePolicy {
    /// Runs delimited by derived style changes, with synthetic spaces at
    /// geometric gaps. Used for styled markup output.
    #[default]
    Styled,
    /// Runs delimited by quantized size changes only. Used for the two-tier
    /// scripture/commentary output.
    Sized,
}

/// Leading edge of a glyph along the reading axis.
fn lead(g: &Glyph, direction: LayoutDirection) -> f32 {
    match direction {
        LayoutDirection::Horizontal => g.x0,
        LayoutDirection::Vertical => g.top,
    }
}

/// Trailing edge of a glyph along the reading axis.
fn trail(g: &Glyph, direction: LayoutDirection) -> f32 {
    match direction {
        LayoutDirection::Horizontal => g.x1,
        LayoutDirection::Vertical => g.bottom,
    }
}

/// Merge a cluster under the given policy.
pub fn merge_cluster<T: Transliterator + ?Sized>(
    direction: LayoutDirection,
    cluster: &Cluster,
    policy: MergePolicy,
    translit: &T,
) -> Line {
    match policy {
        MergePolicy::Styled => merge_styled(direction, cluster, translit),
        MergePolicy::Sized => merge_sized(cluster, translit),
    }
}

/// Walk a cluster in reading order and split it into style-constant runs.
///
/// Two independent triggers flush the accumulating buffer: a reading-axis
/// gap wider than 1.5x the previous glyph's size (which also emits a
/// synthetic space), and a change of derived style. The flushed text is
/// NFC-normalized and transliterated; runs that trim to nothing are dropped.
pub fn merge_styled<T: Transliterator + ?Sized>(
    direction: LayoutDirection,
    cluster: &Cluster,
    translit: &T,
) -> Line {
    let mut line = Line::new();
    let mut buffer = String::new();
    let mut current_style: Option<TextStyle> = None;
    let mut prev_edge: Option<(f32, f32)> = None; // (trailing edge, size)

    for glyph in &cluster.glyphs {
        if let Some((edge, size)) = prev_edge {
            if lead(glyph, direction) - edge > size * GAP_TOLERANCE {
                flush_styled(&mut line, &mut buffer, &current_style, translit);
                line.items.push(LineItem::Gap);
            }
        }

        let style = TextStyle::of(glyph);
        if current_style.as_ref() != Some(&style) {
            flush_styled(&mut line, &mut buffer, &current_style, translit);
            current_style = Some(style);
        }

        buffer.push_str(&glyph.text);
        prev_edge = Some((trail(glyph, direction), glyph.size));
    }

    flush_styled(&mut line, &mut buffer, &current_style, translit);
    line
}

fn flush_styled<T: Transliterator + ?Sized>(
    line: &mut Line,
    buffer: &mut String,
    style: &Option<TextStyle>,
    translit: &T,
) {
    if buffer.is_empty() {
        return;
    }
    let text = translit.convert(&normalize(buffer));
    buffer.clear();
    if text.trim().is_empty() {
        return;
    }
    if let Some(style) = style {
        line.items.push(LineItem::Span(Span::styled(text, style.clone())));
    }
}

/// Walk a cluster in reading order and split it into size-constant runs.
///
/// No gap handling here: runs are delimited purely by a change of the
/// quantized size. Flushed text is NFC-normalized, transliterated and
/// trimmed; empty results are dropped.
pub fn merge_sized<T: Transliterator + ?Sized>(cluster: &Cluster, translit: &T) -> Line {
    let mut line = Line::new();
    let mut buffer = String::new();
    let mut current_size: Option<SizePt> = None;

    for glyph in &cluster.glyphs {
        let size = SizePt::from_pt(glyph.size);
        if current_size != Some(size) {
            flush_sized(&mut line, &mut buffer, current_size, translit);
            current_size = Some(size);
        }
        buffer.push_str(&glyph.text);
    }

    flush_sized(&mut line, &mut buffer, current_size, translit);
    line
}

fn flush_sized<T: Transliterator + ?Sized>(
    line: &mut Line,
    buffer: &mut String,
    size: Option<SizePt>,
    translit: &T,
) {
    if buffer.is_empty() {
        return;
    }
    let text = translit.convert(&normalize(buffer)).trim().to_string();
    buffer.clear();
    if text.is_empty() {
        return;
    }
    if let Some(size) = size {
        line.items.push(LineItem::Span(Span::sized(text, size)));
    }
}

fn normalize(text: &str) -> String {
    text.nfc().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translit::{CharTable, Passthrough};

    fn glyph(text: &str, x0: f32, top: f32, size: f32, fontname: &str) -> Glyph {
        Glyph::new(text, x0, x0 + size, top, top + size, size, fontname)
    }

    fn column(glyphs: Vec<Glyph>) -> Cluster {
        Cluster { glyphs }
    }

    #[test]
    fn test_uniform_style_single_run() {
        let cluster = column(vec![
            glyph("觀", 100.0, 0.0, 16.0, "SimSun"),
            glyph("自", 100.0, 17.0, 16.0, "SimSun"),
            glyph("在", 100.0, 34.0, 16.0, "SimSun"),
        ]);
        let line = merge_styled(LayoutDirection::Vertical, &cluster, &Passthrough);
        assert_eq!(line.spans().count(), 1);
        assert_eq!(line.plain_text(), "觀自在");
    }

    #[test]
    fn test_style_change_splits_runs() {
        let cluster = column(vec![
            glyph("經", 100.0, 0.0, 16.0, "SimSun"),
            glyph("注", 100.0, 17.0, 16.0, "SimSun-Bold"),
        ]);
        let line = merge_styled(LayoutDirection::Vertical, &cluster, &Passthrough);
        let spans: Vec<_> = line.spans().collect();
        assert_eq!(spans.len(), 2);
        assert!(!spans[0].style.as_ref().unwrap().weight.is_bold());
        assert!(spans[1].style.as_ref().unwrap().weight.is_bold());
    }

    #[test]
    fn test_wide_gap_inserts_space() {
        // Second glyph starts 30pt after the first ends: > 16 * 1.5 = 24.
        let cluster = column(vec![
            glyph("上", 100.0, 0.0, 16.0, "SimSun"),
            glyph("下", 100.0, 46.0, 16.0, "SimSun"),
        ]);
        let line = merge_styled(LayoutDirection::Vertical, &cluster, &Passthrough);
        assert_eq!(line.plain_text(), "上 下");
        assert!(line.items.iter().any(|i| matches!(i, LineItem::Gap)));
    }

    #[test]
    fn test_narrow_gap_no_space() {
        // 20pt gap <= 24pt threshold.
        let cluster = column(vec![
            glyph("上", 100.0, 0.0, 16.0, "SimSun"),
            glyph("下", 100.0, 36.0, 16.0, "SimSun"),
        ]);
        let line = merge_styled(LayoutDirection::Vertical, &cluster, &Passthrough);
        assert_eq!(line.plain_text(), "上下");
    }

    #[test]
    fn test_gap_threshold_uses_previous_glyph_size() {
        // 21pt gap: over the 13pt glyph's threshold (19.5), under 16pt's (24).
        let cluster = column(vec![
            glyph("小", 100.0, 0.0, 13.0, "SimSun"),
            glyph("下", 100.0, 34.0, 13.0, "SimSun"),
        ]);
        let line = merge_styled(LayoutDirection::Vertical, &cluster, &Passthrough);
        assert_eq!(line.plain_text(), "小 下");
    }

    #[test]
    fn test_styled_runs_transliterated() {
        let table = CharTable::from_pairs([('觀', '观')]);
        let cluster = column(vec![glyph("觀", 100.0, 0.0, 16.0, "SimSun")]);
        let line = merge_styled(LayoutDirection::Vertical, &cluster, &table);
        assert_eq!(line.plain_text(), "观");
    }

    #[test]
    fn test_sized_merge_splits_on_size_only() {
        let cluster = column(vec![
            glyph("經", 100.0, 0.0, 16.0, "SimSun"),
            glyph("文", 100.0, 17.0, 16.0, "SimSun-Bold"), // style differs, size same
            glyph("注", 100.0, 34.0, 13.0, "SimSun"),
        ]);
        let line = merge_sized(&cluster, &Passthrough);
        let spans: Vec<_> = line.spans().collect();
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].text, "經文");
        assert_eq!(spans[0].size, SizePt::from_pt(16.0));
        assert_eq!(spans[1].text, "注");
        assert_eq!(spans[1].size, SizePt::from_pt(13.0));
        assert!(spans.iter().all(|s| s.style.is_none()));
    }

    #[test]
    fn test_whitespace_only_runs_dropped() {
        let cluster = column(vec![
            glyph(" ", 100.0, 0.0, 16.0, "SimSun"),
            glyph("　", 100.0, 17.0, 13.0, "SimSun"),
        ]);
        assert_eq!(merge_sized(&cluster, &Passthrough).spans().count(), 0);
        assert_eq!(
            merge_styled(LayoutDirection::Vertical, &cluster, &Passthrough)
                .spans()
                .count(),
            0
        );
    }
}
