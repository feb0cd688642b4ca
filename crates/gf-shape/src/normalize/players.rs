use super::{collection_items, PLAYER_ID};
use crate::extract::unwrap_record;
use crate::fields::{as_name, Accessor, FieldSpec};
use gf_core::{Player, PlayerId};
use serde_json::Value;

const NAME: FieldSpec = FieldSpec::new(
    "name",
    &[
        Accessor::Key("name"),
        Accessor::Path(&["player", "name"]),
        Accessor::Key("full_name"),
    ],
);

const POSITION: FieldSpec = FieldSpec::new(
    "position",
    &[
        Accessor::Key("display_position"),
        Accessor::Key("position"),
        Accessor::Key("primary_position"),
        Accessor::Path(&["player", "display_position"]),
    ],
);

const NFL_TEAM: FieldSpec = FieldSpec::new(
    "nfl_team",
    &[
        Accessor::Key("editorial_team_abbr"),
        Accessor::Key("nfl_team"),
        Accessor::Key("pro_team"),
        Accessor::Path(&["player", "editorial_team_abbr"]),
    ],
);

const BYE_WEEK: FieldSpec = FieldSpec::new(
    "bye_week",
    &[
        Accessor::Key("bye_week"),
        Accessor::Path(&["bye_weeks", "week"]),
        Accessor::Key("bye"),
    ],
);

/// Normalize a players resource.
pub fn normalize_players(raw: &Value) -> Vec<Player> {
    collection_items(raw, &[&["fantasy_content", "league", "players"], &["players"]])
        .iter()
        .filter_map(|item| {
            let record = unwrap_record(item, "player")?;
            let Some(id) = PLAYER_ID.text(&record).and_then(PlayerId::try_new) else {
                log::debug!("Skipping player without a key: {}", item);
                return None;
            };
            Some(Player {
                name: NAME
                    .resolve_with(&record, as_name)
                    .unwrap_or_else(|| id.to_string()),
                position: POSITION.text(&record),
                nfl_team: NFL_TEAM.text(&record),
                bye_week: BYE_WEEK.int(&record),
                id,
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "players_test.rs"]
mod tests;
