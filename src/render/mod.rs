//! Rendering module for serializing reconstructed documents.

mod html;
mod json;
mod markdown;
mod options;

pub use html::to_html;
pub use json::{to_json, JsonFormat};
pub use markdown::to_markdown;
pub use options::RenderOptions;
