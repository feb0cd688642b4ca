//! Canonical entities read back by natural key.

use crate::error::{StoreResult, StoreResultExt};
use duckdb::{Connection, OptionalExt, Row};
use gf_core::{Matchup, Player, PlayerId, RosterEntry, Team, TeamId};

/// Rebuild an id from a stored column. Stored ids are never blank.
fn id_column<T>(row: &Row<'_>, idx: usize, wrap: fn(String) -> Option<T>) -> duckdb::Result<T> {
    let raw: String = row.get(idx)?;
    wrap(raw).ok_or(duckdb::Error::InvalidColumnType(
        idx,
        "blank identifier".to_string(),
        duckdb::types::Type::Text,
    ))
}

pub fn get_player(conn: &Connection, id: &str) -> StoreResult<Option<Player>> {
    conn.query_row(
        "SELECT id, name, position, nfl_team, bye_week FROM players WHERE id = ?",
        duckdb::params![id],
        |row| {
            Ok(Player {
                id: id_column(row, 0, PlayerId::try_new)?,
                name: row.get(1)?,
                position: row.get(2)?,
                nfl_team: row.get(3)?,
                bye_week: row.get(4)?,
            })
        },
    )
    .optional()
    .query_context(&format!("get player {id}"))
}

pub fn get_team(conn: &Connection, id: &str) -> StoreResult<Option<Team>> {
    conn.query_row(
        "SELECT id, name, manager, abbrev FROM teams WHERE id = ?",
        duckdb::params![id],
        |row| {
            Ok(Team {
                id: id_column(row, 0, TeamId::try_new)?,
                name: row.get(1)?,
                manager: row.get(2)?,
                abbreviation: row.get(3)?,
            })
        },
    )
    .optional()
    .query_context(&format!("get team {id}"))
}

pub fn get_roster_entry(
    conn: &Connection,
    team_id: &str,
    player_id: &str,
    week: i64,
) -> StoreResult<Option<RosterEntry>> {
    conn.query_row(
        "SELECT team_id, player_id, week, status, slot FROM roster_entries
         WHERE team_id = ? AND player_id = ? AND week = ?",
        duckdb::params![team_id, player_id, week],
        |row| {
            Ok(RosterEntry {
                team_id: id_column(row, 0, TeamId::try_new)?,
                player_id: id_column(row, 1, PlayerId::try_new)?,
                week: row.get(2)?,
                status: row.get(3)?,
                slot: row.get(4)?,
            })
        },
    )
    .optional()
    .query_context(&format!("get roster entry {team_id}/{player_id}/{week}"))
}

/// All matchup rows of a week, ordered by team id.
pub fn matchups_for_week(conn: &Connection, week: i64) -> StoreResult<Vec<Matchup>> {
    let mut stmt = conn
        .prepare(
            "SELECT week, team_id, opponent_id, is_playoffs, projected, actual, result
             FROM matchups WHERE week = ? ORDER BY team_id",
        )
        .query_context("prepare matchups_for_week")?;
    let rows = stmt
        .query_map(duckdb::params![week], |row| {
            Ok(Matchup {
                week: row.get(0)?,
                team_id: id_column(row, 1, TeamId::try_new)?,
                opponent_id: id_column(row, 2, TeamId::try_new)?,
                is_playoffs: row.get(3)?,
                projected: row.get(4)?,
                actual: row.get(5)?,
                result: row.get(6)?,
            })
        })
        .query_context("matchups_for_week")?;
    rows.collect::<Result<Vec<_>, _>>()
        .query_context("matchups_for_week row")
}
