//! Outcome of one ingestion run.

use chrono::{DateTime, Utc};
use gf_core::LeagueSettings;
use serde::Serialize;
use std::time::Duration;

/// Entity rows written, per table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EntityCounts {
    pub teams: usize,
    pub players: usize,
    pub roster_entries: usize,
    /// Matchup rows, two per game
    pub matchups: usize,
    pub transactions: usize,
}

impl EntityCounts {
    pub fn total(&self) -> usize {
        self.teams + self.players + self.roster_entries + self.matchups + self.transactions
    }
}

/// Snapshot outcomes across the bundle's resources.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SnapshotCounts {
    pub inserted: usize,
    pub unchanged: usize,
}

impl SnapshotCounts {
    pub(crate) fn count(&mut self, was_inserted: bool) {
        if was_inserted {
            self.inserted += 1;
        } else {
            self.unchanged += 1;
        }
    }
}

/// Summary of one `ingest` call.
#[derive(Debug, Clone, Serialize)]
pub struct IngestReport {
    /// League key after normalization
    pub league_key: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    /// Resources fetched, cached or not
    pub resources: usize,
    pub resources_from_cache: usize,
    pub snapshots: SnapshotCounts,
    pub entities: EntityCounts,
    pub settings: LeagueSettings,
}

impl IngestReport {
    pub fn duration(&self) -> Duration {
        (self.finished_at - self.started_at)
            .to_std()
            .unwrap_or_default()
    }
}
