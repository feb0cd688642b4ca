//! Upsert into the `players` table.

use crate::error::{StoreResult, StoreResultExt};
use duckdb::Connection;
use gf_core::Player;

/// Insert a player or overwrite every field of the existing row.
pub fn upsert_player(conn: &Connection, player: &Player) -> StoreResult<()> {
    conn.execute(
        "INSERT INTO players (id, name, position, nfl_team, bye_week)
         VALUES (?, ?, ?, ?, ?)
         ON CONFLICT (id) DO UPDATE SET
             name = excluded.name,
             position = excluded.position,
             nfl_team = excluded.nfl_team,
             bye_week = excluded.bye_week,
             updated_at = now()",
        duckdb::params![
            player.id.as_str(),
            player.name,
            player.position,
            player.nfl_team,
            player.bye_week,
        ],
    )
    .upsert_context(&format!("upsert players ({})", player.id))?;
    Ok(())
}
