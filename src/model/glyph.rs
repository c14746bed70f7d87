//! The positioned-character record consumed from the external PDF text layer.

use serde::{Deserialize, Serialize};

/// One decoded character with geometry and font metadata.
///
/// Coordinates follow the extraction layer's convention: `x0`/`x1` are the
/// horizontal extent (left/right), `top`/`bottom` the vertical extent with
/// `top` increasing downward. Immutable once produced; scoped to one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Glyph {
    /// The character (or ligature) text.
    pub text: String,
    /// Left edge in points.
    pub x0: f32,
    /// Right edge in points.
    pub x1: f32,
    /// Top edge in points.
    pub top: f32,
    /// Bottom edge in points.
    pub bottom: f32,
    /// Font size in points.
    pub size: f32,
    /// Raw font name, possibly carrying a subset prefix (e.g. "ABCDEF+SimSun").
    pub fontname: String,
}

impl Glyph {
    /// Create a new glyph.
    pub fn new(
        text: impl Into<String>,
        x0: f32,
        x1: f32,
        top: f32,
        bottom: f32,
        size: f32,
        fontname: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            x0,
            x1,
            top,
            bottom,
            size,
            fontname: fontname.into(),
        }
    }

    /// Width of the glyph box in points.
    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    /// Height of the glyph box in points.
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}
