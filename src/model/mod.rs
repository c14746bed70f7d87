//! Data model for layout reconstruction.

mod document;
mod glyph;
mod page;
mod run;
mod style;

pub use document::TextDocument;
pub use glyph::Glyph;
pub use page::{EmptyReason, PageBody, PageText};
pub use run::{Line, LineItem, Span, Tier};
pub use style::{clean_font_name, FontFamily, FontWeight, SizePt, TextStyle};
