//! Collection extraction and record flattening.

use crate::node::RawNode;
use serde_json::{Map, Value};

/// Flattened record: one plain key-value map per logical entity.
pub type Record = Map<String, Value>;

/// Yield the items of a collection-valued node.
///
/// - array: every element, in order
/// - indexed map: the values under index keys, ascending numerically
/// - plain object: the object itself, as a single item
/// - scalar: nothing
pub fn extract_items(value: &Value) -> Vec<&Value> {
    match RawNode::classify(value) {
        RawNode::Array(items) => items.iter().collect(),
        RawNode::IndexedMap(entries) => entries.into_iter().map(|(_, v)| v).collect(),
        RawNode::Map(_) => vec![value],
        RawNode::Scalar(_) => Vec::new(),
    }
}

/// Merge a wrapped list of single-key maps into one record.
///
/// Maps merge left to right with later keys overwriting earlier ones; nested
/// lists are flattened recursively in place; scalars inside the list are
/// ignored. A plain object is returned unchanged. Returns `None` when nothing
/// object-like was found.
pub fn flatten(value: &Value) -> Option<Record> {
    match value {
        Value::Object(map) => Some(map.clone()),
        Value::Array(items) => {
            let mut merged = Record::new();
            let mut saw_object = false;
            merge_list_into(items, &mut merged, &mut saw_object);
            saw_object.then_some(merged)
        }
        _ => None,
    }
}

fn merge_list_into(items: &[Value], merged: &mut Record, saw_object: &mut bool) {
    for item in items {
        match item {
            Value::Object(map) => {
                *saw_object = true;
                for (key, value) in map {
                    merged.insert(key.clone(), value.clone());
                }
            }
            Value::Array(nested) => merge_list_into(nested, merged, saw_object),
            _ => {}
        }
    }
}

/// Flatten one collection item into a record.
///
/// Items are often wrapped under a singular key (`{"team": [...]}`). When the
/// item is an object whose only key is `wrapper`, the wrapped value is
/// flattened instead; records that merely contain a `wrapper` field among
/// others are left intact.
pub fn unwrap_record(item: &Value, wrapper: &str) -> Option<Record> {
    match item {
        Value::Object(map) if map.len() == 1 => match map.get(wrapper) {
            Some(inner) => flatten(inner),
            None => flatten(item),
        },
        _ => flatten(item),
    }
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
