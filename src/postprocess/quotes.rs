//! Extraction of bracketed scripture quotes from converted Markdown.
//!
//! The converted commentaries mark quoted scripture as `**【…】**` blocks.
//! Apparatus sections (注释 / 义贯 / 诠论 by default) use the same bracket
//! notation and must be left out.

use regex::Regex;

use crate::error::{Error, Result};

/// Default excluded section markers.
pub const DEFAULT_EXCLUDES: [&str; 3] = ["注释", "义贯", "诠论"];

/// Extracts `**【…】**` quote blocks from Markdown text.
#[derive(Debug)]
pub struct QuoteExtractor {
    excludes: Vec<String>,
    block_re: Regex,
    heading_re: Option<Regex>,
    mend_re: Regex,
    collapse_re: Regex,
    squash_re: Regex,
}

impl QuoteExtractor {
    /// Create an extractor excluding blocks that open with any of the given
    /// markers.
    pub fn new<S: AsRef<str>>(excludes: &[S]) -> Result<Self> {
        let excludes: Vec<String> = excludes.iter().map(|s| s.as_ref().to_string()).collect();

        let heading_re = if excludes.is_empty() {
            None
        } else {
            let alternation = excludes
                .iter()
                .map(|m| regex::escape(m))
                .collect::<Vec<_>>()
                .join("|");
            Some(compile(&format!(
                r"(?m)^\s*\*\*【(?:{})】\*\*\s*$",
                alternation
            ))?)
        };

        Ok(Self {
            excludes,
            block_re: compile(r"\*\*【[\s\S]+?】\*\*")?,
            heading_re,
            mend_re: compile(r"\*\*\s*\n+\s*\*\*")?,
            collapse_re: compile(r"\s*\n+\s*")?,
            squash_re: compile(r"\n{3,}")?,
        })
    }

    /// Create an extractor with the default excluded markers.
    pub fn with_default_markers() -> Result<Self> {
        Self::new(&DEFAULT_EXCLUDES)
    }

    /// Extract all quote blocks, cleaned and folded to single lines.
    pub fn extract(&self, content: &str) -> Vec<String> {
        self.block_re
            .find_iter(content)
            .map(|m| m.as_str())
            .filter(|block| !self.is_excluded(block))
            .filter_map(|block| self.clean_block(block))
            .collect()
    }

    /// Extract and join all quote blocks with blank lines.
    pub fn extract_joined(&self, content: &str) -> String {
        self.extract(content).join("\n\n")
    }

    /// Whether the block opens with an excluded marker.
    fn is_excluded(&self, block: &str) -> bool {
        match block.strip_prefix("**【") {
            Some(rest) => self.excludes.iter().any(|m| rest.starts_with(m.as_str())),
            None => false,
        }
    }

    /// Drop excluded heading lines swept up by a multi-line match, mend bold
    /// markers broken across blank lines, and fold the block to one line.
    fn clean_block(&self, block: &str) -> Option<String> {
        let mut cleaned = block.to_string();
        if let Some(heading_re) = &self.heading_re {
            cleaned = heading_re.replace_all(&cleaned, "").into_owned();
        }
        cleaned = self.mend_re.replace_all(&cleaned, "").into_owned();
        cleaned = self.collapse_re.replace_all(&cleaned, "").into_owned();
        cleaned = self
            .squash_re
            .replace_all(&cleaned, "\n\n")
            .trim()
            .to_string();

        if cleaned.is_empty() {
            None
        } else {
            Some(cleaned)
        }
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| Error::Pattern(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_quote_blocks() {
        let content = "前言\n\n**【观世音菩萨】**\n\n白话注解。\n\n**【耳根圆通】**\n";
        let extractor = QuoteExtractor::with_default_markers().unwrap();
        let blocks = extractor.extract(content);
        assert_eq!(blocks, vec!["**【观世音菩萨】**", "**【耳根圆通】**"]);
    }

    #[test]
    fn test_excluded_markers_skipped() {
        let content = "**【注释】**\n\n**【义贯】**\n\n**【经文正宗】**\n";
        let extractor = QuoteExtractor::with_default_markers().unwrap();
        let blocks = extractor.extract(content);
        assert_eq!(blocks, vec!["**【经文正宗】**"]);
    }

    #[test]
    fn test_multiline_block_folded() {
        let content = "**【尔时世尊\n从肉髻中】**";
        let extractor = QuoteExtractor::with_default_markers().unwrap();
        let blocks = extractor.extract(content);
        assert_eq!(blocks, vec!["**【尔时世尊从肉髻中】**"]);
    }

    #[test]
    fn test_split_bold_markers_mended() {
        let content = "**【阿难白佛**\n\n**言世尊】**";
        let extractor = QuoteExtractor::with_default_markers().unwrap();
        let blocks = extractor.extract(content);
        assert_eq!(blocks, vec!["**【阿难白佛言世尊】**"]);
    }

    #[test]
    fn test_swept_heading_lines_removed() {
        // A lazy multi-line match can drag an apparatus heading along.
        let content = "**【大佛顶首楞严经\n**【注释】**\n卷一】**";
        let extractor = QuoteExtractor::with_default_markers().unwrap();
        let blocks = extractor.extract(content);
        assert_eq!(blocks.len(), 1);
        assert!(!blocks[0].contains("注释"));
    }

    #[test]
    fn test_joined_output() {
        let content = "**【甲】**x**【乙】**";
        let extractor = QuoteExtractor::with_default_markers().unwrap();
        assert_eq!(extractor.extract_joined(content), "**【甲】**\n\n**【乙】**");
    }

    #[test]
    fn test_no_excludes() {
        let extractor = QuoteExtractor::new::<&str>(&[]).unwrap();
        let blocks = extractor.extract("**【注释】**");
        assert_eq!(blocks, vec!["**【注释】**"]);
    }
}
