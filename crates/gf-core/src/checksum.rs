//! SHA-256 digests used for cache keys and snapshot content hashes.

use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

/// Compute the hex SHA-256 digest of a string.
pub fn compute_checksum(s: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(s.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Rebuild `value` with every object's keys in sorted order.
///
/// The result serializes identically no matter how the input maps were
/// ordered in memory.
pub fn canonicalize(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            let mut sorted = Map::new();
            for key in keys {
                sorted.insert(key.clone(), canonicalize(&map[key]));
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.iter().map(canonicalize).collect()),
        other => other.clone(),
    }
}

/// Serialize `value` with sorted keys and hash the result.
pub fn canonical_checksum(value: &Value) -> String {
    compute_checksum(&canonicalize(value).to_string())
}

#[cfg(test)]
#[path = "checksum_test.rs"]
mod tests;
