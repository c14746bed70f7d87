//! Document-level types.

use serde::{Deserialize, Serialize};

use super::PageText;

/// A reconstructed document: the selected pages of a source, in order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextDocument {
    /// Document title, used as the HTML `<title>` and Markdown heading.
    pub title: Option<String>,
    /// Pages in source order.
    pub pages: Vec<PageText>,
}

impl TextDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document with a title.
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            pages: Vec::new(),
        }
    }

    /// Number of pages carried by the document.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Append a page.
    pub fn add_page(&mut self, page: PageText) {
        self.pages.push(page);
    }

    /// Whether the document carries no pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Plain text of the whole document, pages separated by blank lines.
    pub fn plain_text(&self) -> String {
        self.pages
            .iter()
            .filter(|p| !p.is_empty())
            .map(PageText::plain_text)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
