//! Per-page output of the layout pipeline.

use serde::{Deserialize, Serialize};

use super::Line;
use crate::layout::LayoutDirection;

/// Why a page produced no reconstructed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyReason {
    /// The extraction layer yielded no glyphs at all.
    NoGlyphs,
    /// Glyphs existed but none survived the size-band filter.
    NoBandGlyphs,
}

impl EmptyReason {
    /// Placeholder caption text for the page block.
    pub fn label(&self) -> &'static str {
        match self {
            EmptyReason::NoGlyphs => "无文字内容",
            EmptyReason::NoBandGlyphs => "无匹配字号内容",
        }
    }
}

/// Body of a reconstructed page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageBody {
    /// Placeholder for a page with no usable text.
    Empty { reason: EmptyReason },
    /// Reconstructed lines in reading order.
    Content {
        direction: LayoutDirection,
        lines: Vec<Line>,
    },
}

/// One page of reconstructed text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageText {
    /// Page number in the source document (1-indexed).
    pub number: u32,
    pub body: PageBody,
}

impl PageText {
    /// Create a placeholder page.
    pub fn empty(number: u32, reason: EmptyReason) -> Self {
        Self {
            number,
            body: PageBody::Empty { reason },
        }
    }

    /// Create a content page.
    pub fn content(number: u32, direction: LayoutDirection, lines: Vec<Line>) -> Self {
        Self {
            number,
            body: PageBody::Content { direction, lines },
        }
    }

    /// Whether the page is a placeholder.
    pub fn is_empty(&self) -> bool {
        matches!(self.body, PageBody::Empty { .. })
    }

    /// Reconstructed lines, if any.
    pub fn lines(&self) -> &[Line] {
        match &self.body {
            PageBody::Content { lines, .. } => lines,
            PageBody::Empty { .. } => &[],
        }
    }

    /// Plain text of the page, one reconstructed line per text line.
    pub fn plain_text(&self) -> String {
        self.lines()
            .iter()
            .map(Line::plain_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
