use super::{collection_items, TEAM_ID};
use crate::extract::unwrap_record;
use crate::fields::{as_manager, as_name, Accessor, FieldSpec};
use gf_core::{Team, TeamId};
use serde_json::Value;

const NAME: FieldSpec = FieldSpec::new("name", &[Accessor::Key("name"), Accessor::Key("team_name")]);

const MANAGER: FieldSpec = FieldSpec::new(
    "manager",
    &[
        Accessor::Key("managers"),
        Accessor::Key("manager"),
        Accessor::Key("manager_name"),
    ],
);

const ABBREVIATION: FieldSpec = FieldSpec::new(
    "abbreviation",
    &[
        Accessor::Key("abbrev"),
        Accessor::Key("abbr"),
        Accessor::Key("abbreviation"),
        Accessor::Path(&["team", "abbr"]),
    ],
);

/// Normalize a teams resource.
///
/// A team without a resolvable name is named after its id.
pub fn normalize_teams(raw: &Value) -> Vec<Team> {
    collection_items(raw, &[&["fantasy_content", "league", "teams"], &["teams"]])
        .iter()
        .filter_map(|item| {
            let record = unwrap_record(item, "team")?;
            let Some(id) = TEAM_ID.text(&record).and_then(TeamId::try_new) else {
                log::debug!("Skipping team without a key: {}", item);
                return None;
            };
            let name = NAME
                .resolve_with(&record, as_name)
                .unwrap_or_else(|| id.to_string());
            Some(Team {
                name,
                manager: MANAGER.resolve_with(&record, as_manager),
                abbreviation: ABBREVIATION.text(&record),
                id,
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "teams_test.rs"]
mod tests;
