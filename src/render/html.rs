//! Styled HTML rendering.
//!
//! One `.page` block per page, one `.text-line` div per reconstructed line,
//! styled runs as spans with inline font declarations, synthetic gaps as
//! literal spaces.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::error::Result;
use crate::model::{LineItem, PageBody, PageText, TextDocument};

use super::RenderOptions;

const DEFAULT_TITLE: &str = "重排文稿";

const STYLESHEET: &str = r#"        body {
            font-family: "Microsoft YaHei", "SimSun", serif;
            max-width: 900px;
            margin: 0 auto;
            padding: 40px 20px;
            background-color: #f0f2f5;
            color: #333;
            line-height: 1.8;
        }
        .page {
            background-color: white;
            padding: 50px;
            margin-bottom: 30px;
            box-shadow: 0 4px 12px rgba(0,0,0,0.1);
            border-radius: 4px;
        }
        .page-number {
            text-align: center;
            color: #aaa;
            font-size: 13px;
            margin-top: 40px;
            padding-top: 20px;
            border-top: 1px solid #eee;
        }
        .text-line {
            margin-bottom: 8px;
            min-height: 1.2em;
        }"#;

/// Convert a document to a styled HTML page.
pub fn to_html(doc: &TextDocument, options: &RenderOptions) -> Result<String> {
    let title = doc.title.as_deref().unwrap_or(DEFAULT_TITLE);

    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"zh-CN\">\n<head>\n");
    out.push_str("    <meta charset=\"UTF-8\">\n");
    out.push_str(
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    out.push_str(&format!("    <title>{}</title>\n", encode_text(title)));
    out.push_str("    <style>\n");
    out.push_str(STYLESHEET);
    out.push_str("\n    </style>\n</head>\n<body>\n");

    for page in &doc.pages {
        if page.is_empty() && !options.include_empty_pages {
            continue;
        }
        render_page(&mut out, page);
    }

    out.push_str("</body>\n</html>\n");
    Ok(out)
}

fn render_page(out: &mut String, page: &PageText) {
    match &page.body {
        PageBody::Empty { reason } => {
            out.push_str(&format!(
                "<div class=\"page\"><p class=\"page-number\">第 {} 页（{}）</p></div>\n",
                page.number,
                reason.label()
            ));
        }
        PageBody::Content { lines, .. } => {
            out.push_str("<div class=\"page\">\n");
            for line in lines {
                out.push_str("<div class=\"text-line\">");
                for item in &line.items {
                    match item {
                        LineItem::Span(span) => match &span.style {
                            Some(style) => {
                                out.push_str(&format!(
                                    "<span style=\"{}\">{}</span>",
                                    encode_double_quoted_attribute(&style.css()),
                                    encode_text(&span.text)
                                ));
                            }
                            None => out.push_str(&encode_text(&span.text)),
                        },
                        LineItem::Gap => out.push(' '),
                    }
                }
                out.push_str("</div>\n");
            }
            out.push_str(&format!(
                "<p class=\"page-number\">第 {} 页</p>\n</div>\n",
                page.number
            ));
        }
    }
}
