//! Upsert into the `matchups` table.

use crate::connection::Store;
use crate::error::{StoreResult, StoreResultExt};
use duckdb::Connection;
use gf_core::{Matchup, MatchupPair};

/// Write both directions of a matchup in one transaction.
pub fn upsert_matchup(store: &Store, pair: &MatchupPair) -> StoreResult<()> {
    store.transaction(|conn| {
        for row in pair.rows() {
            upsert_matchup_row(conn, row)?;
        }
        Ok(())
    })
}

/// Insert one direction of a matchup keyed by `(week, team_id)`.
pub fn upsert_matchup_row(conn: &Connection, matchup: &Matchup) -> StoreResult<()> {
    conn.execute(
        "INSERT INTO matchups (week, team_id, opponent_id, is_playoffs, projected, actual, result)
         VALUES (?, ?, ?, ?, ?, ?, ?)
         ON CONFLICT (week, team_id) DO UPDATE SET
             opponent_id = excluded.opponent_id,
             is_playoffs = excluded.is_playoffs,
             projected = excluded.projected,
             actual = excluded.actual,
             result = excluded.result,
             updated_at = now()",
        duckdb::params![
            matchup.week,
            matchup.team_id.as_str(),
            matchup.opponent_id.as_str(),
            matchup.is_playoffs,
            matchup.projected,
            matchup.actual,
            matchup.result,
        ],
    )
    .upsert_context(&format!(
        "upsert matchups (week {}, {})",
        matchup.week, matchup.team_id
    ))?;
    Ok(())
}
