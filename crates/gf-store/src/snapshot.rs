//! Content-addressed snapshots of raw responses.
//!
//! The hash covers endpoint, parameters and body with every object key
//! sorted, so two byte-different but logically identical payloads share a
//! snapshot row.

use crate::error::{StoreError, StoreResult};
use duckdb::Connection;
use gf_core::{canonical_checksum, canonicalize};
use serde_json::{json, Value};

/// Result of [`record`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotOutcome {
    pub content_hash: String,
    /// `false` when a snapshot with the same hash already existed
    pub was_inserted: bool,
}

/// Hash of one `(endpoint, params, raw)` tuple.
pub fn snapshot_hash(endpoint: &str, params: &Value, raw: &Value) -> String {
    canonical_checksum(&json!({
        "endpoint": endpoint,
        "params": params,
        "raw": raw,
    }))
}

/// Record a raw response, skipping it when an identical one exists.
///
/// A hash collision is not an error; it is reported as
/// `was_inserted = false`.
pub fn record(
    conn: &Connection,
    endpoint: &str,
    params: &Value,
    raw: &Value,
) -> StoreResult<SnapshotOutcome> {
    let content_hash = snapshot_hash(endpoint, params, raw);
    let params_json = serde_json::to_string(&canonicalize(params))?;
    let raw_json = serde_json::to_string(raw)?;

    let inserted = conn
        .execute(
            "INSERT INTO snapshots (endpoint, params_json, content_hash, raw_json)
             VALUES (?, ?, ?, ?)
             ON CONFLICT (content_hash) DO NOTHING",
            duckdb::params![endpoint, params_json, content_hash, raw_json],
        )
        .map_err(|e| StoreError::SnapshotError(format!("{endpoint}: {e}")))?;

    if inserted == 0 {
        log::debug!("Snapshot of {} unchanged ({})", endpoint, &content_hash[..12]);
    }
    Ok(SnapshotOutcome {
        content_hash,
        was_inserted: inserted > 0,
    })
}

#[cfg(test)]
#[path = "snapshot_test.rs"]
mod tests;
