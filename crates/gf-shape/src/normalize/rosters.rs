use super::{collection_items, PLAYER_ID, TEAM_ID, WEEK};
use crate::extract::{unwrap_record, Record};
use crate::fields::{Accessor, FieldSpec};
use crate::navigate::navigate_record;
use gf_core::{PlayerId, RosterEntry, TeamId};
use serde_json::Value;

const ROSTER_WEEK: FieldSpec = FieldSpec::new(
    "week",
    &[Accessor::Key("week"), Accessor::Path(&["roster", "week"])],
);

const SLOT: FieldSpec = FieldSpec::new(
    "slot",
    &[
        Accessor::Key("slot"),
        Accessor::Path(&["selected_position", "position"]),
        Accessor::Key("selected_position"),
    ],
);

const STATUS: FieldSpec = FieldSpec::new(
    "status",
    &[Accessor::Key("status"), Accessor::Key("injury_status")],
);

/// Normalize a rosters resource.
///
/// Two record shapes are recognised: a flat `{team_id, week, entries}` record
/// and a team record carrying a `roster` sub-resource with its players. An
/// entry may override the record's week. Entries without a team, a player or
/// a positive week are skipped.
pub fn normalize_rosters(raw: &Value) -> Vec<RosterEntry> {
    let items = collection_items(
        raw,
        &[
            &["fantasy_content", "league", "rosters"],
            &["rosters"],
            &["fantasy_content", "league", "teams"],
            &["teams"],
        ],
    );
    let mut entries = Vec::new();
    for item in &items {
        let Some(record) = unwrap_record(item, "team") else {
            continue;
        };
        let Some(team_id) = TEAM_ID.text(&record).and_then(TeamId::try_new) else {
            log::debug!("Skipping roster without a team key: {}", item);
            continue;
        };
        let week = ROSTER_WEEK.int(&record);
        for raw_entry in roster_players(&record) {
            if let Some(entry) = roster_entry(&team_id, week, &raw_entry) {
                entries.push(entry);
            }
        }
    }
    entries
}

fn roster_players(record: &Record) -> Vec<Value> {
    let flat = navigate_record(record, &["entries"]);
    if !flat.is_empty() {
        return flat;
    }
    navigate_record(record, &["roster", "players"])
}

fn roster_entry(team_id: &TeamId, week: Option<i64>, raw: &Value) -> Option<RosterEntry> {
    let record = unwrap_record(raw, "player")?;
    let player_id = PLAYER_ID.text(&record).and_then(PlayerId::try_new);
    let week = WEEK.int(&record).or(week).filter(|w| *w > 0);
    match (player_id, week) {
        (Some(player_id), Some(week)) => Some(RosterEntry {
            team_id: team_id.clone(),
            player_id,
            week,
            status: STATUS.text(&record),
            slot: SLOT.text(&record),
        }),
        _ => {
            log::debug!("Skipping roster entry for team {}: {}", team_id, raw);
            None
        }
    }
}

#[cfg(test)]
#[path = "rosters_test.rs"]
mod tests;
