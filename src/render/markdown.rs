//! Two-tier Markdown rendering.
//!
//! Scripture runs (large size tier) are wrapped in bold markers, commentary
//! runs stay plain. Each reconstructed line becomes one paragraph; pages are
//! bracketed by an HTML-style comment and closed with a horizontal rule and
//! page-number caption.

use crate::error::Result;
use crate::model::{PageBody, PageText, TextDocument, Tier};

use super::RenderOptions;

/// Convert a document to two-tier Markdown.
pub fn to_markdown(doc: &TextDocument, options: &RenderOptions) -> Result<String> {
    let mut out = String::new();

    if let Some(title) = &doc.title {
        out.push_str(&format!("# {}\n\n", title));
    }

    for page in &doc.pages {
        render_page(&mut out, page, options);
    }

    Ok(out.trim_end().to_string() + "\n")
}

fn render_page(out: &mut String, page: &PageText, options: &RenderOptions) {
    match &page.body {
        PageBody::Empty { reason } => {
            if options.include_empty_pages {
                out.push_str(&format!(
                    "<!-- 第 {} 页（{}） -->\n\n",
                    page.number,
                    reason.label()
                ));
            }
        }
        PageBody::Content { lines, .. } => {
            out.push_str(&format!("<!-- 第 {} 页 -->\n\n", page.number));

            for line in lines {
                for span in line.spans() {
                    match span.tier() {
                        Tier::Scripture => out.push_str(&format!("**{}**", span.text)),
                        Tier::Commentary => out.push_str(&span.text),
                    }
                }
                out.push_str("\n\n");
            }

            out.push_str(&format!("\n---\n*第 {} 页*\n\n", page.number));
        }
    }
}
