//! # pdfreflow
//!
//! Reading-order reconstruction for scanned CJK books.
//!
//! Given positioned glyphs extracted from a PDF by an external text-layout
//! layer, this library detects whether each page is laid out horizontally or
//! vertically (traditional right-to-left columns), groups glyphs into lines
//! or columns, merges them into styled or size-keyed runs, and renders the
//! result as styled HTML, two-tier Markdown (scripture bolded, commentary
//! plain), or JSON.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdfreflow::{extract_file, render, ExtractOptions};
//!
//! fn main() -> pdfreflow::Result<()> {
//!     // Reconstruct a glyph dump produced by the extraction layer
//!     let options = ExtractOptions::new().skip_pages(2);
//!     let doc = extract_file("lengyan.glyphs.json", &options)?;
//!
//!     // Convert to HTML
//!     let html = render::to_html(&doc, &render::RenderOptions::default())?;
//!     println!("{}", html);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Layout detection**: horizontal lines vs. traditional vertical columns
//! - **Geometric clustering**: proximity-based line/column grouping
//! - **Two-tier classification**: scripture vs. commentary by point size
//! - **Transliteration boundary**: pluggable Traditional→Simplified mapping
//! - **Parallel processing**: pages reflow independently via Rayon
//! - **Post-processing**: quote-block extraction and volume splitting

pub mod error;
pub mod layout;
pub mod model;
pub mod pipeline;
pub mod postprocess;
pub mod render;
pub mod source;
pub mod translit;

// Re-export commonly used types
pub use error::{Error, Result};
pub use layout::{
    classify_direction, cluster_glyphs, direction_signal, Cluster, DirectionSignal,
    LayoutDirection, MergePolicy,
};
pub use model::{
    clean_font_name, EmptyReason, FontFamily, FontWeight, Glyph, Line, LineItem, PageBody,
    PageText, SizePt, Span, TextDocument, TextStyle, Tier,
};
pub use pipeline::{extract, ExtractOptions};
pub use render::{JsonFormat, RenderOptions};
pub use source::{GlyphSource, JsonGlyphSource};
pub use translit::{CharTable, Passthrough, Transliterator};

use std::path::Path;

/// Reconstruct a glyph dump file into a document, without transliteration.
///
/// # Example
///
/// ```no_run
/// use pdfreflow::{extract_file, ExtractOptions};
///
/// let doc = extract_file("scan.glyphs.json", &ExtractOptions::new()).unwrap();
/// println!("Pages: {}", doc.page_count());
/// ```
pub fn extract_file<P: AsRef<Path>>(path: P, options: &ExtractOptions) -> Result<TextDocument> {
    let source = JsonGlyphSource::open(path)?;
    pipeline::extract(&source, &Passthrough, options)
}

/// Builder for reconstructing and rendering documents.
///
/// # Example
///
/// ```no_run
/// use pdfreflow::{MergePolicy, Reflow};
///
/// let markdown = Reflow::new()
///     .skip_pages(2)
///     .with_policy(MergePolicy::Sized)
///     .with_title("楞严经讲义")
///     .extract("lengyan.glyphs.json")?
///     .to_markdown()?;
/// # Ok::<(), pdfreflow::Error>(())
/// ```
pub struct Reflow {
    extract_options: ExtractOptions,
    render_options: RenderOptions,
    translit: Box<dyn Transliterator + Send + Sync>,
}

impl Reflow {
    /// Create a new builder with identity transliteration.
    pub fn new() -> Self {
        Self {
            extract_options: ExtractOptions::default(),
            render_options: RenderOptions::default(),
            translit: Box::new(Passthrough),
        }
    }

    /// Skip the first `n` pages.
    pub fn skip_pages(mut self, n: u32) -> Self {
        self.extract_options = self.extract_options.skip_pages(n);
        self
    }

    /// Consider at most `n` pages.
    pub fn max_pages(mut self, n: u32) -> Self {
        self.extract_options = self.extract_options.max_pages(n);
        self
    }

    /// Set the run-merging policy.
    pub fn with_policy(mut self, policy: MergePolicy) -> Self {
        self.extract_options = self.extract_options.with_policy(policy);
        self
    }

    /// Disable parallel page processing.
    pub fn sequential(mut self) -> Self {
        self.extract_options = self.extract_options.sequential();
        self
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.extract_options = self.extract_options.with_title(title);
        self
    }

    /// Drop placeholder blocks for empty pages from rendered output.
    pub fn skip_empty_pages(mut self) -> Self {
        self.render_options = self.render_options.with_empty_pages(false);
        self
    }

    /// Use a custom transliterator.
    pub fn with_transliterator(
        mut self,
        translit: Box<dyn Transliterator + Send + Sync>,
    ) -> Self {
        self.translit = translit;
        self
    }

    /// Load a Traditional→Simplified mapping table from a JSON object file.
    pub fn with_mapping_table<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        self.translit = Box::new(CharTable::load(path)?);
        Ok(self)
    }

    /// Reconstruct a glyph dump file.
    pub fn extract<P: AsRef<Path>>(self, path: P) -> Result<ReflowResult> {
        let source = JsonGlyphSource::open(path)?;
        self.extract_source(&source)
    }

    /// Reconstruct from an arbitrary glyph source.
    pub fn extract_source<S: GlyphSource + Sync + ?Sized>(self, source: &S) -> Result<ReflowResult> {
        let document = pipeline::extract(source, &*self.translit, &self.extract_options)?;
        Ok(ReflowResult {
            document,
            render_options: self.render_options,
        })
    }
}

impl Default for Reflow {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of reconstructing a document, ready for rendering.
pub struct ReflowResult {
    /// The reconstructed document
    pub document: TextDocument,
    render_options: RenderOptions,
}

impl ReflowResult {
    /// Convert to styled HTML.
    pub fn to_html(&self) -> Result<String> {
        render::to_html(&self.document, &self.render_options)
    }

    /// Convert to two-tier Markdown.
    pub fn to_markdown(&self) -> Result<String> {
        render::to_markdown(&self.document, &self.render_options)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Plain text of the reconstruction.
    pub fn plain_text(&self) -> String {
        self.document.plain_text()
    }

    /// Get the document.
    pub fn document(&self) -> &TextDocument {
        &self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column_page() -> Vec<Glyph> {
        "觀自在菩薩行深般若波羅蜜"
            .chars()
            .enumerate()
            .map(|(i, c)| {
                Glyph::new(
                    c.to_string(),
                    100.0,
                    116.0,
                    i as f32 * 17.0,
                    i as f32 * 17.0 + 16.0,
                    16.0,
                    "SimSun",
                )
            })
            .collect()
    }

    #[test]
    fn test_builder_end_to_end() {
        let source = JsonGlyphSource::from_pages(vec![column_page()]);
        let result = Reflow::new()
            .with_policy(MergePolicy::Sized)
            .with_title("心经")
            .sequential()
            .extract_source(&source)
            .unwrap();

        let md = result.to_markdown().unwrap();
        assert!(md.starts_with("# 心经"));
        assert!(md.contains("**觀自在菩薩行深般若波羅蜜**"));
    }

    #[test]
    fn test_builder_with_transliterator() {
        let source = JsonGlyphSource::from_pages(vec![column_page()]);
        let table = CharTable::from_pairs([('觀', '观'), ('薩', '萨'), ('羅', '罗')]);
        let result = Reflow::new()
            .with_transliterator(Box::new(table))
            .extract_source(&source)
            .unwrap();

        assert_eq!(result.plain_text(), "观自在菩萨行深般若波罗蜜");
    }

    #[test]
    fn test_extract_missing_file() {
        let err = extract_file("no-such.glyphs.json", &ExtractOptions::new()).unwrap_err();
        assert!(matches!(err, Error::MissingInput(_)));
    }
}
