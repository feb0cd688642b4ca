//! Upsert into the `teams` table.

use crate::error::{StoreResult, StoreResultExt};
use duckdb::Connection;
use gf_core::Team;

/// Insert a team or overwrite every field of the existing row.
pub fn upsert_team(conn: &Connection, team: &Team) -> StoreResult<()> {
    conn.execute(
        "INSERT INTO teams (id, name, manager, abbrev)
         VALUES (?, ?, ?, ?)
         ON CONFLICT (id) DO UPDATE SET
             name = excluded.name,
             manager = excluded.manager,
             abbrev = excluded.abbrev,
             updated_at = now()",
        duckdb::params![team.id.as_str(), team.name, team.manager, team.abbreviation],
    )
    .upsert_context(&format!("upsert teams ({})", team.id))?;
    Ok(())
}
