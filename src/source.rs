//! Glyph source boundary.
//!
//! The library does not parse PDFs itself; an external text-layout layer
//! produces positioned glyphs per page. [`GlyphSource`] is the contract, and
//! [`JsonGlyphSource`] reads the interchange format that layer emits: a JSON
//! array of pages, each page an array of glyph records.

use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::Glyph;

/// Provider of positioned glyphs, one set per page.
pub trait GlyphSource {
    /// Total number of pages available.
    fn page_count(&self) -> u32;

    /// Glyphs of the given page (1-indexed), in no particular order.
    fn page_glyphs(&self, number: u32) -> Result<Vec<Glyph>>;
}

/// Glyph dump file produced by the external extraction layer.
#[derive(Debug, Clone, Default)]
pub struct JsonGlyphSource {
    pages: Vec<Vec<Glyph>>,
}

impl JsonGlyphSource {
    /// Open a glyph dump file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::MissingInput(path.to_path_buf()));
        }
        let data = std::fs::read(path)?;
        Self::from_bytes(&data)
    }

    /// Decode a glyph dump from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let pages: Vec<Vec<Glyph>> = serde_json::from_slice(data)
            .map_err(|e| Error::GlyphData(format!("invalid glyph dump: {}", e)))?;
        Ok(Self { pages })
    }

    /// Decode a glyph dump from a reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(&data)
    }

    /// Build a source from in-memory pages.
    pub fn from_pages(pages: Vec<Vec<Glyph>>) -> Self {
        Self { pages }
    }
}

impl GlyphSource for JsonGlyphSource {
    fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    fn page_glyphs(&self, number: u32) -> Result<Vec<Glyph>> {
        if number == 0 || number > self.page_count() {
            return Err(Error::PageOutOfRange(number, self.page_count()));
        }
        Ok(self.pages[(number - 1) as usize].clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bytes() {
        let data = r#"[
            [{"text": "觀", "x0": 100.0, "x1": 116.0, "top": 50.0, "bottom": 66.0, "size": 16.0, "fontname": "SimSun"}],
            []
        ]"#.as_bytes();
        let source = JsonGlyphSource::from_bytes(data).unwrap();
        assert_eq!(source.page_count(), 2);
        assert_eq!(source.page_glyphs(1).unwrap().len(), 1);
        assert!(source.page_glyphs(2).unwrap().is_empty());
    }

    #[test]
    fn test_page_out_of_range() {
        let source = JsonGlyphSource::from_pages(vec![vec![]]);
        assert!(matches!(
            source.page_glyphs(0),
            Err(Error::PageOutOfRange(0, 1))
        ));
        assert!(matches!(
            source.page_glyphs(2),
            Err(Error::PageOutOfRange(2, 1))
        ));
    }

    #[test]
    fn test_open_missing_file() {
        let err = JsonGlyphSource::open("no-such-dump.json").unwrap_err();
        assert!(matches!(err, Error::MissingInput(_)));
    }

    #[test]
    fn test_invalid_dump() {
        let err = JsonGlyphSource::from_bytes(b"{not json").unwrap_err();
        assert!(matches!(err, Error::GlyphData(_)));
    }
}
