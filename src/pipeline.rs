//! Page extraction driver.
//!
//! Pulls glyphs from a [`GlyphSource`], applies the size-band pre-filter,
//! runs the layout core per page, and assembles a [`TextDocument`]. Pages are
//! independent; processing is page-parallel by default with output
//! re-assembled in source order.

use rayon::prelude::*;

use crate::error::Result;
use crate::layout::{classify_direction, cluster_glyphs, merge_cluster, MergePolicy};
use crate::model::{EmptyReason, Glyph, PageText, TextDocument};
use crate::source::GlyphSource;
use crate::translit::Transliterator;

/// Accepted size band for commentary glyphs, in points.
pub const COMMENTARY_BAND: std::ops::RangeInclusive<f32> = 12.5..=13.5;

/// Accepted size band for scripture glyphs, in points.
pub const SCRIPTURE_BAND: std::ops::RangeInclusive<f32> = 15.5..=16.5;

/// Whether a glyph size falls in one of the two accepted bands.
///
/// The source material sets scripture at 16pt and commentary at 13pt; glyphs
/// outside both bands (page furniture, folio marks) are discarded before
/// layout analysis.
pub fn in_size_band(size: f32) -> bool {
    COMMENTARY_BAND.contains(&size) || SCRIPTURE_BAND.contains(&size)
}

/// Options controlling page selection and processing.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Number of leading pages to skip (front matter).
    pub skip_pages: u32,
    /// Cap on the number of pages considered, front matter included.
    pub max_pages: Option<u32>,
    /// Run-merging policy.
    pub policy: MergePolicy,
    /// Process pages in parallel.
    pub parallel: bool,
    /// Title attached to the resulting document.
    pub title: Option<String>,
}

impl ExtractOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip the first `n` pages.
    pub fn skip_pages(mut self, n: u32) -> Self {
        self.skip_pages = n;
        self
    }

    /// Consider at most `n` pages of the source.
    pub fn max_pages(mut self, n: u32) -> Self {
        self.max_pages = Some(n);
        self
    }

    /// Set the run-merging policy.
    pub fn with_policy(mut self, policy: MergePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Disable parallel page processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            skip_pages: 0,
            max_pages: None,
            policy: MergePolicy::Styled,
            parallel: true,
            title: None,
        }
    }
}

/// Reconstruct the selected pages of a source into a document.
///
/// A page with no glyphs, or none surviving the size bands, becomes a
/// placeholder page; any source failure aborts the run with the underlying
/// error.
pub fn extract<S, T>(source: &S, translit: &T, options: &ExtractOptions) -> Result<TextDocument>
where
    S: GlyphSource + Sync + ?Sized,
    T: Transliterator + Sync + ?Sized,
{
    let total = source.page_count();
    let last = options.max_pages.map_or(total, |cap| cap.min(total));
    let first = options.skip_pages + 1;

    let mut doc = TextDocument {
        title: options.title.clone(),
        pages: Vec::new(),
    };
    if first > last {
        log::info!("no pages selected (source has {} pages)", total);
        return Ok(doc);
    }

    let numbers: Vec<u32> = (first..=last).collect();
    log::info!(
        "reflowing pages {}..{} of {} ({} selected)",
        first,
        last,
        total,
        numbers.len()
    );

    let pages: Vec<PageText> = if options.parallel && numbers.len() > 1 {
        numbers
            .par_iter()
            .map(|&number| {
                let glyphs = source.page_glyphs(number)?;
                let page = process_page(number, glyphs, options.policy, translit);
                log::debug!("processed page {}", number);
                Ok(page)
            })
            .collect::<Result<Vec<_>>>()?
    } else {
        let mut pages = Vec::with_capacity(numbers.len());
        for (i, &number) in numbers.iter().enumerate() {
            let glyphs = source.page_glyphs(number)?;
            pages.push(process_page(number, glyphs, options.policy, translit));
            log::info!("processed {}/{} pages", i + 1, numbers.len());
        }
        pages
    };

    doc.pages = pages;
    Ok(doc)
}

/// Run the layout core over one page's glyphs.
pub fn process_page<T: Transliterator + ?Sized>(
    number: u32,
    glyphs: Vec<Glyph>,
    policy: MergePolicy,
    translit: &T,
) -> PageText {
    if glyphs.is_empty() {
        return PageText::empty(number, EmptyReason::NoGlyphs);
    }

    let banded: Vec<Glyph> = glyphs
        .into_iter()
        .filter(|g| in_size_band(g.size))
        .collect();
    if banded.is_empty() {
        return PageText::empty(number, EmptyReason::NoBandGlyphs);
    }

    let direction = classify_direction(&banded);
    log::debug!("page {}: {:?}, {} glyphs in band", number, direction, banded.len());

    let lines = cluster_glyphs(direction, banded)
        .iter()
        .map(|cluster| merge_cluster(direction, cluster, policy, translit))
        .filter(|line| line.has_text())
        .collect();

    PageText::content(number, direction, lines)
}
