use super::collection_items;
use crate::extract::{unwrap_record, Record};
use crate::fields::{Accessor, FieldSpec};
use crate::navigate::navigate_record;
use gf_core::{TeamId, TransactionKind, TransactionRecord};
use serde_json::Value;

const KIND: FieldSpec = FieldSpec::new(
    "kind",
    &[
        Accessor::Key("type"),
        Accessor::Key("kind"),
        Accessor::Key("transaction_type"),
    ],
);

const TEAM: FieldSpec = FieldSpec::new(
    "team",
    &[
        Accessor::Key("team_key"),
        Accessor::Key("team_id"),
        Accessor::Key("teamKey"),
        Accessor::Key("trader_team_key"),
        Accessor::Key("destination_team_key"),
    ],
);

const PLAYER_TEAM: FieldSpec = FieldSpec::new(
    "team",
    &[
        Accessor::Path(&["transaction_data", "destination_team_key"]),
        Accessor::Path(&["transaction_data", "source_team_key"]),
    ],
);

/// Normalize a transactions resource.
///
/// Transactions have no natural key; every object-like item is kept with its
/// original payload. Kind and team are best-effort.
pub fn normalize_transactions(raw: &Value) -> Vec<TransactionRecord> {
    collection_items(
        raw,
        &[&["fantasy_content", "league", "transactions"], &["transactions"]],
    )
    .into_iter()
    .filter_map(|item| {
        let record = unwrap_record(&item, "transaction")?;
        if record.is_empty() {
            return None;
        }
        Some(TransactionRecord {
            kind: KIND.text(&record).and_then(|k| TransactionKind::classify(&k)),
            team_id: transaction_team(&record),
            raw: item,
        })
    })
    .collect()
}

/// The acting team, falling back to the first player movement that names one.
fn transaction_team(record: &Record) -> Option<TeamId> {
    if let Some(team) = TEAM.text(record).and_then(TeamId::try_new) {
        return Some(team);
    }
    navigate_record(record, &["players"])
        .iter()
        .filter_map(|player| unwrap_record(player, "player"))
        .find_map(|player| PLAYER_TEAM.text(&player))
        .and_then(TeamId::try_new)
}

#[cfg(test)]
#[path = "transactions_test.rs"]
mod tests;
