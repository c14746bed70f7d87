//! Post-processing of converted Markdown: quote extraction and volume
//! splitting. These operate on rendered text only and are independent of the
//! layout pipeline.

mod quotes;
mod volumes;

pub use quotes::{QuoteExtractor, DEFAULT_EXCLUDES};
pub use volumes::{Volume, VolumeSplitter};
