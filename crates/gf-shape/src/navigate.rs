//! Path navigation through the platform's envelope structures.
//!
//! Resources wrap their records as `root.<resource>.<collection>.<items>`, but
//! any node on the way may be a plain object, an indexed map, or a list whose
//! payload sits at an unpredictable position (`[primaryInfo, subResource]`).
//! Navigation never fails: a dead end yields nothing.

use crate::extract::{extract_items, flatten, Record};
use crate::node::indexed_entries;
use serde_json::{Map, Value};
use std::borrow::Cow;

/// Walk `path` from `root` and return the node at its end.
///
/// At each step:
/// - an object yields the key directly, or failing that the first indexed
///   item that yields it (`{"0": {"teams": ...}, "count": 1}`)
/// - a list yields it from the first element that holds the key, either as a
///   plain object or once flattened from a nested list of single-key maps;
///   element position is never assumed
/// - a scalar is a dead end
pub fn resolve_path<'a>(root: &'a Value, path: &[&str]) -> Option<Cow<'a, Value>> {
    let mut current = Cow::Borrowed(root);
    for key in path {
        current = match current {
            Cow::Borrowed(node) => step(node, key)?,
            Cow::Owned(node) => Cow::Owned(step(&node, key)?.into_owned()),
        };
    }
    Some(current)
}

/// Walk `path` from a flattened record, see [`resolve_path`].
pub fn resolve_in_record<'a>(record: &'a Record, path: &[&str]) -> Option<Cow<'a, Value>> {
    let (first, rest) = path.split_first()?;
    match step_map(record, first)? {
        Cow::Borrowed(node) => resolve_path(node, rest),
        Cow::Owned(node) => resolve_path(&node, rest).map(|v| Cow::Owned(v.into_owned())),
    }
}

/// Walk `path` from `root` and return the items of the collection found there.
///
/// Returns an empty vector when the path dead-ends; callers treat every
/// result as advisory.
pub fn navigate(root: &Value, path: &[&str]) -> Vec<Value> {
    match resolve_path(root, path) {
        Some(node) => extract_items(&node).into_iter().cloned().collect(),
        None => Vec::new(),
    }
}

/// [`navigate`] starting from a flattened record.
pub fn navigate_record(record: &Record, path: &[&str]) -> Vec<Value> {
    match resolve_in_record(record, path) {
        Some(node) => extract_items(&node).into_iter().cloned().collect(),
        None => Vec::new(),
    }
}

fn step<'a>(node: &'a Value, key: &str) -> Option<Cow<'a, Value>> {
    match node {
        Value::Object(map) => step_map(map, key),
        Value::Array(items) => pick_from_list(items, key),
        _ => None,
    }
}

fn step_map<'a>(map: &'a Map<String, Value>, key: &str) -> Option<Cow<'a, Value>> {
    if let Some(value) = map.get(key) {
        return Some(Cow::Borrowed(value));
    }
    indexed_entries(map)
        .into_iter()
        .find_map(|(_, item)| step(item, key))
}

fn pick_from_list<'a>(items: &'a [Value], key: &str) -> Option<Cow<'a, Value>> {
    for item in items {
        match item {
            Value::Object(map) => {
                if let Some(value) = map.get(key) {
                    return Some(Cow::Borrowed(value));
                }
            }
            Value::Array(_) => {
                if let Some(value) = flatten(item).and_then(|mut rec| rec.remove(key)) {
                    return Some(Cow::Owned(value));
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
#[path = "navigate_test.rs"]
mod tests;
