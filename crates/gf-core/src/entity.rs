//! Canonical entities produced by normalization and persisted by the store.

use crate::ids::{PlayerId, TeamId};
use serde::{Deserialize, Serialize};

/// A player as last observed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub position: Option<String>,
    /// Real-world team abbreviation (e.g. `NYJ`)
    pub nfl_team: Option<String>,
    pub bye_week: Option<i64>,
}

/// A fantasy team as last observed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub manager: Option<String>,
    pub abbreviation: Option<String>,
}

/// "This player was on this team's roster in this week."
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub team_id: TeamId,
    pub player_id: PlayerId,
    pub week: i64,
    pub status: Option<String>,
    /// Lineup slot (`QB`, `BN`, `IR`, ...); sticky once known.
    pub slot: Option<String>,
}

/// One side of a weekly matchup. Stored in both directions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matchup {
    pub week: i64,
    pub team_id: TeamId,
    pub opponent_id: TeamId,
    pub is_playoffs: bool,
    pub projected: Option<f64>,
    pub actual: Option<f64>,
    pub result: Option<String>,
}

/// One team's numbers within a matchup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchupSide {
    pub team_id: TeamId,
    pub projected: Option<f64>,
    pub actual: Option<f64>,
    pub result: Option<String>,
}

/// Both directions of one matchup, written together or not at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchupPair {
    pub forward: Matchup,
    pub reverse: Matchup,
}

impl MatchupPair {
    /// Build both rows from the two sides of a game.
    pub fn new(week: i64, is_playoffs: bool, a: MatchupSide, b: MatchupSide) -> Self {
        let forward = Matchup {
            week,
            team_id: a.team_id.clone(),
            opponent_id: b.team_id.clone(),
            is_playoffs,
            projected: a.projected,
            actual: a.actual,
            result: a.result,
        };
        let reverse = Matchup {
            week,
            team_id: b.team_id,
            opponent_id: a.team_id,
            is_playoffs,
            projected: b.projected,
            actual: b.actual,
            result: b.result,
        };
        Self { forward, reverse }
    }

    /// Iterate the two rows, forward first.
    pub fn rows(&self) -> [&Matchup; 2] {
        [&self.forward, &self.reverse]
    }
}

/// Best-effort classification of a transaction payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Add,
    Drop,
    AddDrop,
    Trade,
    Waiver,
    Other(String),
}

impl TransactionKind {
    /// Classify a raw `type`/`kind` string. Blank input yields `None`.
    pub fn classify(raw: &str) -> Option<Self> {
        let lowered = raw.trim().to_ascii_lowercase();
        let kind = match lowered.as_str() {
            "" => return None,
            "add" => TransactionKind::Add,
            "drop" => TransactionKind::Drop,
            "add/drop" | "add_drop" => TransactionKind::AddDrop,
            "trade" => TransactionKind::Trade,
            "waiver" | "waivers" => TransactionKind::Waiver,
            _ => TransactionKind::Other(lowered),
        };
        Some(kind)
    }

    /// Storage representation.
    pub fn as_str(&self) -> &str {
        match self {
            TransactionKind::Add => "add",
            TransactionKind::Drop => "drop",
            TransactionKind::AddDrop => "add/drop",
            TransactionKind::Trade => "trade",
            TransactionKind::Waiver => "waiver",
            TransactionKind::Other(s) => s,
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A raw transaction payload, appended as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    pub kind: Option<TransactionKind>,
    pub team_id: Option<TeamId>,
    pub raw: serde_json::Value,
}

#[cfg(test)]
#[path = "entity_test.rs"]
mod tests;
