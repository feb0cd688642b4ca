//! Upsert into the `roster_entries` table.

use crate::error::{StoreResult, StoreResultExt};
use duckdb::Connection;
use gf_core::RosterEntry;

/// Insert a roster entry keyed by `(team_id, player_id, week)`.
///
/// Status always takes the incoming value, null included. Slot is sticky: an
/// incoming null keeps the stored slot.
pub fn upsert_roster_entry(conn: &Connection, entry: &RosterEntry) -> StoreResult<()> {
    conn.execute(
        "INSERT INTO roster_entries (team_id, player_id, week, status, slot)
         VALUES (?, ?, ?, ?, ?)
         ON CONFLICT (team_id, player_id, week) DO UPDATE SET
             status = excluded.status,
             slot = COALESCE(excluded.slot, slot),
             updated_at = now()",
        duckdb::params![
            entry.team_id.as_str(),
            entry.player_id.as_str(),
            entry.week,
            entry.status,
            entry.slot,
        ],
    )
    .upsert_context(&format!(
        "upsert roster_entries ({}, {}, week {})",
        entry.team_id, entry.player_id, entry.week
    ))?;
    Ok(())
}
