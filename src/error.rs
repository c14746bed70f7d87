//! Error types for the pdfreflow library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pdfreflow operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during layout reconstruction.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input file does not exist.
    #[error("Input file not found: {0}")]
    MissingInput(PathBuf),

    /// The glyph dump is malformed or cannot be decoded.
    #[error("Glyph data error: {0}")]
    GlyphData(String),

    /// The external glyph source failed while producing a page.
    #[error("Glyph source error: {0}")]
    Source(String),

    /// Page number is out of range.
    #[error("Page {0} is out of range (source has {1} pages)")]
    PageOutOfRange(u32, u32),

    /// A transliteration mapping entry is invalid.
    #[error("Transliteration table error: {0}")]
    Mapping(String),

    /// A user-supplied pattern failed to compile or is unusable.
    #[error("Pattern error: {0}")]
    Pattern(String),

    /// Error during rendering (HTML, Markdown, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}
