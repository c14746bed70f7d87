//! Splitting a converted Markdown document into volumes.

use regex::Regex;

use crate::error::{Error, Result};

/// One volume cut out of a larger document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Volume {
    /// Label captured from the volume heading (e.g. "一", "二").
    pub label: String,
    /// Content from the heading up to the next heading or end of input.
    pub content: String,
}

/// Splits Markdown content at volume headings.
///
/// The heading pattern must contain exactly one capture group yielding the
/// volume label, e.g. `## .*第(.+?)卷`.
#[derive(Debug)]
pub struct VolumeSplitter {
    pattern: Regex,
}

impl VolumeSplitter {
    /// Compile a splitter from a heading pattern.
    pub fn new(pattern: &str) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(|e| Error::Pattern(e.to_string()))?;
        if pattern.captures_len() != 2 {
            return Err(Error::Pattern(
                "volume pattern must contain exactly one capture group for the label".to_string(),
            ));
        }
        Ok(Self { pattern })
    }

    /// Split content into volumes. Text before the first heading is dropped;
    /// no headings means no volumes.
    pub fn split(&self, content: &str) -> Vec<Volume> {
        let marks: Vec<(String, usize)> = self
            .pattern
            .captures_iter(content)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let label = caps.get(1)?.as_str().to_string();
                Some((label, whole.start()))
            })
            .collect();

        marks
            .iter()
            .enumerate()
            .map(|(i, (label, start))| {
                let end = marks
                    .get(i + 1)
                    .map_or(content.len(), |(_, next_start)| *next_start);
                Volume {
                    label: label.clone(),
                    content: content[*start..end].to_string(),
                }
            })
            .collect()
    }
}
