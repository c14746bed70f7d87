//! Traditional-to-Simplified conversion boundary.
//!
//! The conversion itself is an external concern; the pipeline only needs a
//! total, synchronous mapping over run text. [`Passthrough`] keeps the text
//! as-is, [`CharTable`] applies a per-character mapping loaded from a JSON
//! object file (`{"觀": "观", ...}`) exported from a real conversion service.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{Error, Result};

/// Per-run text conversion applied before rendering.
pub trait Transliterator {
    /// Convert one run of text. Must be total over valid text input.
    fn convert(&self, text: &str) -> String;
}

/// Identity conversion.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl Transliterator for Passthrough {
    fn convert(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Character-for-character mapping table.
#[derive(Debug, Clone, Default)]
pub struct CharTable {
    map: HashMap<char, char>,
}

impl CharTable {
    /// Create an empty table (behaves like [`Passthrough`]).
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(from, to)` character pairs.
    pub fn from_pairs<I: IntoIterator<Item = (char, char)>>(pairs: I) -> Self {
        Self {
            map: pairs.into_iter().collect(),
        }
    }

    /// Load a table from a JSON object file mapping single characters to
    /// single characters.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::MissingInput(path.to_path_buf()));
        }
        let data = std::fs::read(path)?;
        Self::from_json(&data)
    }

    /// Parse a table from JSON object bytes.
    pub fn from_json(data: &[u8]) -> Result<Self> {
        let raw: HashMap<String, String> = serde_json::from_slice(data)
            .map_err(|e| Error::Mapping(format!("invalid mapping file: {}", e)))?;

        let mut map = HashMap::with_capacity(raw.len());
        for (from, to) in raw {
            let from = single_char(&from)?;
            let to = single_char(&to)?;
            map.insert(from, to);
        }
        Ok(Self { map })
    }

    /// Number of mapped characters.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

fn single_char(s: &str) -> Result<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(Error::Mapping(format!(
            "mapping entries must be single characters, got {:?}",
            s
        ))),
    }
}

impl Transliterator for CharTable {
    fn convert(&self, text: &str) -> String {
        text.chars()
            .map(|c| *self.map.get(&c).unwrap_or(&c))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passthrough() {
        assert_eq!(Passthrough.convert("觀自在菩薩"), "觀自在菩薩");
    }

    #[test]
    fn test_char_table_maps_known_chars() {
        let table = CharTable::from_pairs([('觀', '观'), ('薩', '萨')]);
        assert_eq!(table.convert("觀自在菩薩"), "观自在菩萨");
    }

    #[test]
    fn test_char_table_from_json() {
        let table = CharTable::from_json(r#"{"楞": "楞", "嚴": "严"}"#.as_bytes()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.convert("楞嚴經"), "楞严經");
    }

    #[test]
    fn test_char_table_rejects_multichar_entries() {
        let err = CharTable::from_json(br#"{"ab": "c"}"#).unwrap_err();
        assert!(matches!(err, Error::Mapping(_)));
    }
}
