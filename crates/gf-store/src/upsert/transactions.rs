//! Append to the `transactions` table.

use crate::error::{StoreResult, StoreResultExt};
use duckdb::Connection;
use gf_core::TransactionRecord;

/// Append a transaction payload and return its generated id.
///
/// Transactions carry no natural key and are never deduplicated here; the
/// ingest pipeline only appends payloads whose snapshot was new.
pub fn append_transaction(conn: &Connection, record: &TransactionRecord) -> StoreResult<i64> {
    let raw_json = serde_json::to_string(&record.raw)?;
    let id: i64 = conn
        .query_row(
            "INSERT INTO transactions (kind, team_id, raw_json) VALUES (?, ?, ?) RETURNING id",
            duckdb::params![
                record.kind.as_ref().map(|k| k.as_str()),
                record.team_id.as_ref().map(|t| t.as_str()),
                raw_json,
            ],
            |row| row.get(0),
        )
        .upsert_context("append transactions")?;
    Ok(id)
}
