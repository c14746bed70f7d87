//! Merged text runs and reconstructed lines.

use serde::{Deserialize, Serialize};

use super::{SizePt, TextStyle};

/// Minimum quantized size for the scripture tier.
const SCRIPTURE_MIN_PT: f32 = 15.5;

/// Semantic class of a run, decided by point size.
///
/// The source material uses a fixed two-font-size convention: large glyphs
/// are quoted scripture, normal glyphs are commentary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Scripture,
    Commentary,
}

/// A maximal run of text with constant style (styled merge) or constant
/// quantized size (sized merge).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Span {
    /// Transliterated text content.
    pub text: String,
    /// Derived style; present only for the styled merge policy.
    pub style: Option<TextStyle>,
    /// Quantized point size of the run.
    pub size: SizePt,
}

impl Span {
    /// Create a styled run.
    pub fn styled(text: impl Into<String>, style: TextStyle) -> Self {
        let size = style.size;
        Self {
            text: text.into(),
            style: Some(style),
            size,
        }
    }

    /// Create a size-only run.
    pub fn sized(text: impl Into<String>, size: SizePt) -> Self {
        Self {
            text: text.into(),
            style: None,
            size,
        }
    }

    /// Classify the run by its size.
    pub fn tier(&self) -> Tier {
        if self.size.pt() >= SCRIPTURE_MIN_PT {
            Tier::Scripture
        } else {
            Tier::Commentary
        }
    }
}

/// One item of a reconstructed line: a run, or a synthetic space where a
/// geometric gap was detected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LineItem {
    Span(Span),
    Gap,
}

/// One visual line (horizontal layout) or column (vertical layout) after
/// run merging, in reading order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub items: Vec<LineItem>,
}

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterate over the runs, skipping gaps.
    pub fn spans(&self) -> impl Iterator<Item = &Span> {
        self.items.iter().filter_map(|item| match item {
            LineItem::Span(span) => Some(span),
            LineItem::Gap => None,
        })
    }

    /// Whether the line carries any text.
    pub fn has_text(&self) -> bool {
        self.spans().any(|span| !span.text.is_empty())
    }

    /// Concatenated text with gaps rendered as single spaces.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for item in &self.items {
            match item {
                LineItem::Span(span) => out.push_str(&span.text),
                LineItem::Gap => out.push(' '),
            }
        }
        out
    }
}
