//! Tagged view over the JSON shapes the platform returns.

use serde_json::{Map, Value};

/// Structural classification of one JSON node.
///
/// Every shape decision in this crate goes through [`RawNode::classify`] so
/// the rules live in one place.
#[derive(Debug)]
pub enum RawNode<'a> {
    /// A JSON array: either a plain list of items or a wrapped record made of
    /// single-key maps. Which one depends on the caller's intent.
    Array(&'a [Value]),
    /// An object with at least one decimal-index key (`"0"`, `"1"`, ...),
    /// items sorted by numeric index. Non-index keys such as `count` are
    /// dropped.
    IndexedMap(Vec<(u64, &'a Value)>),
    /// Any other object.
    Map(&'a Map<String, Value>),
    /// Null, bool, number, or string.
    Scalar(&'a Value),
}

impl<'a> RawNode<'a> {
    /// Classify a JSON value.
    pub fn classify(value: &'a Value) -> Self {
        match value {
            Value::Array(items) => RawNode::Array(items),
            Value::Object(map) => {
                let indexed = indexed_entries(map);
                if indexed.is_empty() {
                    RawNode::Map(map)
                } else {
                    RawNode::IndexedMap(indexed)
                }
            }
            other => RawNode::Scalar(other),
        }
    }
}

/// Parse a key as a non-negative decimal index.
///
/// Only plain ASCII digits qualify; `"+1"` and `"-1"` do not.
pub fn parse_index(key: &str) -> Option<u64> {
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse().ok()
}

/// Collect the index-keyed entries of an object in ascending numeric order.
pub fn indexed_entries(map: &Map<String, Value>) -> Vec<(u64, &Value)> {
    let mut entries: Vec<(u64, &Value)> = map
        .iter()
        .filter_map(|(key, value)| parse_index(key).map(|idx| (idx, value)))
        .collect();
    entries.sort_by_key(|(idx, _)| *idx);
    entries
}

#[cfg(test)]
#[path = "node_test.rs"]
mod tests;
