//! Text codec for the persisted board format.
//!
//! The shared board file is either one JSON document (an array of items,
//! or a single item object) or newline-delimited JSON records. Decoding is
//! tolerant: a bad record is skipped, never fatal.

use anyhow::{Context, Result};
use log::{debug, warn};
use serde_json::Value;

use crate::item::Item;

/// Outcome of decoding one text: the usable items and how many records were dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decoded {
    pub items: Vec<Item>,
    pub skipped: usize,
}

impl Decoded {
    /// True when the text held records but none of them were usable
    pub fn is_unusable(&self) -> bool {
        self.items.is_empty() && self.skipped > 0
    }
}

/// Decode persisted text into an item list.
///
/// Blank input yields an empty list. Text starting with `[` or `{` is
/// parsed as one document; anything else is read line by line and lines
/// that fail to parse or carry no `name` are dropped.
pub fn decode(text: &str) -> Vec<Item> {
    decode_report(text).items
}

/// Like [`decode`], but also reports how many records were dropped.
///
/// Inside an array document each element is decoded on its own, so one
/// bad record never costs the others.
pub fn decode_report(text: &str) -> Decoded {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Decoded::default();
    }

    if trimmed.starts_with('[') {
        return match serde_json::from_str::<Vec<Value>>(trimmed) {
            Ok(records) => decode_records(records),
            Err(e) => {
                warn!("⚠️  Failed to parse item document: {e}");
                Decoded { items: Vec::new(), skipped: 1 }
            }
        };
    }

    if trimmed.starts_with('{') {
        return match serde_json::from_str::<Item>(trimmed) {
            Ok(item) => Decoded { items: vec![item], skipped: 0 },
            Err(e) => {
                warn!("⚠️  Failed to parse item document: {e}");
                Decoded { items: Vec::new(), skipped: 1 }
            }
        };
    }

    decode_lines(trimmed)
}

fn decode_records(records: Vec<Value>) -> Decoded {
    let mut decoded = Decoded::default();

    for (index, record) in records.into_iter().enumerate() {
        match serde_json::from_value::<Item>(record) {
            Ok(item) => decoded.items.push(item),
            Err(e) => {
                decoded.skipped += 1;
                debug!("Skipping unparsable record at index {index}: {e}");
            }
        }
    }

    if decoded.skipped > 0 {
        warn!(
            "⚠️  Decoded {} records, skipped {}",
            decoded.items.len(),
            decoded.skipped
        );
    }
    decoded
}

fn decode_lines(text: &str) -> Decoded {
    let mut decoded = Decoded::default();

    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str::<Item>(line) {
            Ok(item) if !item.name.is_empty() => decoded.items.push(item),
            Ok(_) => {
                decoded.skipped += 1;
                debug!("Skipping record on line {} without a name", index + 1);
            }
            Err(e) => {
                decoded.skipped += 1;
                debug!("Skipping unparsable record on line {}: {e}", index + 1);
            }
        }
    }

    if decoded.skipped > 0 {
        debug!("Decoded {} records, skipped {}", decoded.items.len(), decoded.skipped);
    }
    decoded
}

/// Encode the full item list as a pretty-printed JSON array.
pub fn encode(items: &[Item]) -> Result<String> {
    serde_json::to_string_pretty(items).context("Failed to serialize items")
}

/// Encode the item list on a single line, as stored in the local backup.
pub fn encode_compact(items: &[Item]) -> Result<String> {
    serde_json::to_string(items).context("Failed to serialize items for backup")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::demo_items;

    #[test]
    fn blank_input_is_empty() {
        assert!(decode("").is_empty());
        assert!(decode("  \n\n ").is_empty());
    }

    #[test]
    fn pretty_output_is_indented_array() {
        let text = encode(&demo_items()).unwrap();
        assert!(text.starts_with("[\n  {"));
        assert!(text.contains("\"reporterName\": \"Rahul\""));
    }

    #[test]
    fn single_object_document_decodes_to_one_item() {
        let one = serde_json::to_string(&demo_items()[0]).unwrap();
        let items = decode(&one);
        assert_eq!(items, vec![demo_items()[0].clone()]);
    }

    #[test]
    fn broken_document_yields_nothing() {
        let decoded = decode_report("[{\"id\": 1, ");
        assert!(decoded.is_unusable());
    }

    #[test]
    fn empty_array_is_usable() {
        let decoded = decode_report("[]");
        assert!(decoded.items.is_empty());
        assert!(!decoded.is_unusable());
    }
}
