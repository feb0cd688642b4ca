//! Per-entity normalization of raw resources into canonical entities.
//!
//! Every normalizer takes the raw resource body as fetched and returns
//! whatever records it could recognise. Malformed resources yield nothing;
//! records without a natural key are skipped.

mod matchups;
mod players;
mod rosters;
mod settings;
mod teams;
mod transactions;

pub use matchups::normalize_matchups;
pub use players::normalize_players;
pub use rosters::normalize_rosters;
pub use settings::normalize_settings;
pub use teams::normalize_teams;
pub use transactions::normalize_transactions;

use crate::extract::extract_items;
use crate::fields::{Accessor, FieldSpec};
use crate::navigate::resolve_path;
use crate::node::RawNode;
use gf_core::{LeagueSettings, MatchupPair, Player, RosterEntry, Team, TransactionRecord};
use serde_json::Value;

/// Team natural key. `*_key` is preferred so ids agree across resources.
pub(crate) const TEAM_ID: FieldSpec = FieldSpec::new(
    "team_id",
    &[
        Accessor::Key("team_key"),
        Accessor::Key("team_id"),
        Accessor::Key("teamKey"),
        Accessor::Key("id"),
    ],
);

/// Player natural key.
pub(crate) const PLAYER_ID: FieldSpec = FieldSpec::new(
    "player_id",
    &[
        Accessor::Key("player_key"),
        Accessor::Key("player_id"),
        Accessor::Key("playerKey"),
        Accessor::Key("id"),
    ],
);

pub(crate) const WEEK: FieldSpec = FieldSpec::new("week", &[Accessor::Key("week")]);

/// Locate the item list of a resource.
///
/// `paths` are tried in order from the root; the first that resolves wins
/// even if its collection is empty. When none resolves, a root that is itself
/// a collection (list or indexed map) is used. A plain object that matches
/// no path is treated as malformed and yields nothing.
pub(crate) fn collection_items(root: &Value, paths: &[&[&str]]) -> Vec<Value> {
    for path in paths {
        if let Some(node) = resolve_path(root, path) {
            return extract_items(&node).into_iter().cloned().collect();
        }
    }
    match RawNode::classify(root) {
        RawNode::Array(_) | RawNode::IndexedMap(_) => {
            extract_items(root).into_iter().cloned().collect()
        }
        RawNode::Map(_) | RawNode::Scalar(_) => Vec::new(),
    }
}

/// Everything normalized out of one bundle.
#[derive(Debug, Clone, Default)]
pub struct NormalizedBundle {
    pub teams: Vec<Team>,
    pub players: Vec<Player>,
    pub rosters: Vec<RosterEntry>,
    pub matchups: Vec<MatchupPair>,
    pub transactions: Vec<TransactionRecord>,
    /// Present when the bundle carried the league resource
    pub settings: Option<LeagueSettings>,
}

impl NormalizedBundle {
    /// Normalize `(resource name, raw body)` pairs.
    ///
    /// Resources are dispatched by name; unknown names (e.g. `standings`) are
    /// ignored. Each resource is normalized independently, so a malformed
    /// one contributes nothing without affecting its siblings.
    pub fn from_resources<'a, I>(resources: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a Value)>,
    {
        let mut bundle = Self::default();
        for (name, raw) in resources {
            match name {
                "league" => bundle.settings = Some(normalize_settings(raw)),
                "teams" => bundle.teams.extend(normalize_teams(raw)),
                "players" => bundle.players.extend(normalize_players(raw)),
                "rosters" => bundle.rosters.extend(normalize_rosters(raw)),
                "matchups" | "scoreboard" => bundle.matchups.extend(normalize_matchups(raw)),
                "transactions" => bundle.transactions.extend(normalize_transactions(raw)),
                other => log::debug!("No normalizer for resource '{}'", other),
            }
        }
        bundle
    }

    /// Total number of entity rows the bundle will write (matchups count twice).
    pub fn row_count(&self) -> usize {
        self.teams.len()
            + self.players.len()
            + self.rosters.len()
            + self.matchups.len() * 2
            + self.transactions.len()
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
