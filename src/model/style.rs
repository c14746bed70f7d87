//! Derived text style: cleaned font family, weight, and quantized size.
//!
//! Scanned CJK PDFs carry subset-prefixed font names ("ABCDEF+SimSun-Bold");
//! the style layer normalizes those into a small set of web-safe CSS stacks
//! and a bold/normal weight, which together with the quantized point size
//! decide run boundaries in styled output.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Glyph;

/// Fixed mapping from cleaned font names to web-safe CSS font stacks.
const FONT_MAP: &[(&str, &str)] = &[
    ("SimSun", r#""SimSun", "宋体", serif"#),
    ("SimHei", r#""SimHei", "黑体", sans-serif"#),
    ("KaiTi", r#""KaiTi", "楷体", serif"#),
    ("FangSong", r#""FangSong", "仿宋", serif"#),
    ("FZShuSong", r#""FZShuSong", "方正书宋", serif"#),
    ("FZKai", r#""FZKai", "方正楷体", serif"#),
    ("FZSong", r#""FZSong", "方正宋体", serif"#),
    ("STSong", r#""STSong", "华文宋体", serif"#),
    ("STKaiti", r#""STKaiti", "华文楷体", serif"#),
    ("STHeiti", r#""STHeiti", "华文黑体", sans-serif"#),
    ("STFangsong", r#""STFangsong", "华文仿宋", serif"#),
    ("Arial", "Arial, sans-serif"),
    ("Times", r#""Times New Roman", Times, serif"#),
    ("Courier", r#""Courier New", Courier, monospace"#),
];

/// Strip the subset prefix and common weight suffixes from a raw font name.
///
/// `"ABCDEF+SimSun-Bold"` becomes `"SimSun"`.
pub fn clean_font_name(raw: &str) -> String {
    let name = match raw.split_once('+') {
        Some((_, rest)) => rest,
        None => raw,
    };
    name.replace("-Bold", "")
        .replace("-Italic", "")
        .replace("-Regular", "")
        .replace("-Medium", "")
}

/// Font family derived from a cleaned font name.
///
/// `Known` families map to a fixed CSS stack; anything else falls back to the
/// cleaned name followed by a SimSun serif stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum FontFamily {
    /// A name present in the fixed font table.
    Known(String),
    /// Any other cleaned name.
    Fallback(String),
}

impl FontFamily {
    /// Derive the family from a raw (possibly prefixed) font name.
    pub fn from_raw(raw: &str) -> Self {
        let cleaned = clean_font_name(raw);
        if FONT_MAP.iter().any(|(name, _)| *name == cleaned) {
            FontFamily::Known(cleaned)
        } else {
            FontFamily::Fallback(cleaned)
        }
    }

    /// The cleaned font name.
    pub fn name(&self) -> &str {
        match self {
            FontFamily::Known(name) | FontFamily::Fallback(name) => name,
        }
    }

    /// Whether the family maps through the fixed table.
    pub fn is_known(&self) -> bool {
        matches!(self, FontFamily::Known(_))
    }

    /// CSS `font-family` stack for this family.
    pub fn css_stack(&self) -> String {
        match self {
            FontFamily::Known(name) => FONT_MAP
                .iter()
                .find(|(key, _)| *key == name.as_str())
                .map(|(_, stack)| (*stack).to_string())
                .unwrap_or_else(|| fallback_stack(name)),
            FontFamily::Fallback(name) => fallback_stack(name),
        }
    }
}

fn fallback_stack(name: &str) -> String {
    format!(r#""{}", "SimSun", serif"#, name)
}

/// Font weight derived from keywords in the raw font name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Normal,
    Bold,
}

impl FontWeight {
    /// Detect bold from the raw font name (bold/heavy/black/bd keywords).
    pub fn from_raw(raw: &str) -> Self {
        let lower = raw.to_lowercase();
        if ["bold", "heavy", "black", "bd"]
            .iter()
            .any(|kw| lower.contains(kw))
        {
            FontWeight::Bold
        } else {
            FontWeight::Normal
        }
    }

    /// CSS `font-weight` value.
    pub fn as_css(&self) -> &'static str {
        match self {
            FontWeight::Normal => "normal",
            FontWeight::Bold => "bold",
        }
    }

    pub fn is_bold(&self) -> bool {
        matches!(self, FontWeight::Bold)
    }
}

/// Point size quantized to a tenth of a point.
///
/// Stored in deci-points so sizes compare and hash exactly; two glyphs whose
/// sizes round to the same tenth are the same size for run-merging purposes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(from = "f32", into = "f32")]
pub struct SizePt(i32);

impl SizePt {
    /// Quantize a point size.
    pub fn from_pt(pt: f32) -> Self {
        SizePt((pt * 10.0).round() as i32)
    }

    /// The size in points.
    pub fn pt(self) -> f32 {
        self.0 as f32 / 10.0
    }
}

impl From<f32> for SizePt {
    fn from(pt: f32) -> Self {
        SizePt::from_pt(pt)
    }
}

impl From<SizePt> for f32 {
    fn from(size: SizePt) -> f32 {
        size.pt()
    }
}

impl fmt::Display for SizePt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}pt", self.pt())
    }
}

/// Derived style triple deciding run boundaries in styled output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStyle {
    pub family: FontFamily,
    pub weight: FontWeight,
    pub size: SizePt,
}

impl TextStyle {
    /// Derive the style of a glyph.
    pub fn of(glyph: &Glyph) -> Self {
        Self {
            family: FontFamily::from_raw(&glyph.fontname),
            weight: FontWeight::from_raw(&glyph.fontname),
            size: SizePt::from_pt(glyph.size),
        }
    }

    /// Inline CSS declaration list for a styled span.
    pub fn css(&self) -> String {
        format!(
            "font-family: {}; font-size: {}; font-weight: {}",
            self.family.css_stack(),
            self.size,
            self.weight.as_css()
        )
    }
}
