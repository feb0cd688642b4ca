//! The ingestion pipeline: fetch, snapshot, normalize, upsert.

use crate::error::{IngestError, IngestResult};
use crate::report::{EntityCounts, IngestReport, SnapshotCounts};
use chrono::Utc;
use gf_core::LeagueKey;
use gf_fetch::{Bundle, BundleFetcher, FetchedResource};
use gf_shape::NormalizedBundle;
use gf_store::upsert::{
    append_transaction, upsert_matchup, upsert_player, upsert_roster_entry, upsert_team,
};
use gf_store::{snapshot, Connection, SnapshotOutcome, Store, StoreError, StoreResult};

/// Resource whose rows are appended rather than upserted.
const TRANSACTIONS_RESOURCE: &str = "transactions";

/// Result of persisting one bundle.
#[derive(Debug, Clone, Default)]
pub struct PersistOutcome {
    pub snapshots: SnapshotCounts,
    pub entities: EntityCounts,
    pub normalized: NormalizedBundle,
}

/// Runs ingestion against one store.
pub struct Pipeline<'a> {
    fetcher: &'a BundleFetcher,
    store: &'a Store,
}

impl<'a> Pipeline<'a> {
    pub fn new(fetcher: &'a BundleFetcher, store: &'a Store) -> Self {
        Self { fetcher, store }
    }

    /// Ingest the bundle of one league.
    ///
    /// `league` may be shorthand (`123`, `l.123`); it is normalized first.
    /// A fetch failure aborts before anything is written. Writes are
    /// individually atomic, so an interrupted run is recovered by running
    /// again.
    pub async fn ingest(&self, league: &str) -> IngestResult<IngestReport> {
        let started_at = Utc::now();
        let league_key = LeagueKey::parse(league)?;
        log::info!("Ingesting league {}", league_key);

        let bundle = self.fetcher.fetch_bundle(league_key.as_str()).await?;
        let outcome = persist_bundle(self.store, &bundle)?;

        let report = IngestReport {
            league_key: league_key.into_inner(),
            started_at,
            finished_at: Utc::now(),
            resources: bundle.len(),
            resources_from_cache: bundle.cached_count(),
            snapshots: outcome.snapshots,
            entities: outcome.entities,
            settings: outcome.normalized.settings.unwrap_or_default(),
        };
        log::info!(
            "Ingested {} resources for {}: {} rows written, {} new snapshots",
            report.resources,
            report.league_key,
            report.entities.total(),
            report.snapshots.inserted
        );
        Ok(report)
    }
}

/// Snapshot every resource of `bundle`, then normalize and upsert it.
///
/// Transactions have no natural key, so they are only appended when their
/// resource's snapshot is new; re-ingesting an identical bundle leaves every
/// entity table as it was. That snapshot is recorded in the same store
/// transaction as the appends and after every other write, so a run that
/// fails earlier leaves it unrecorded and the next run appends the records.
pub fn persist_bundle(store: &Store, bundle: &Bundle) -> IngestResult<PersistOutcome> {
    let mut snapshots = SnapshotCounts::default();
    let mut transactions_resource = None;
    for resource in bundle.resources() {
        if resource.name == TRANSACTIONS_RESOURCE {
            transactions_resource = Some(resource);
            continue;
        }
        let recorded =
            snapshot_resource(store.conn(), resource).map_err(|source| IngestError::Snapshot {
                endpoint: resource.endpoint.clone(),
                source,
            })?;
        snapshots.count(recorded.was_inserted);
    }

    let normalized = NormalizedBundle::from_resources(bundle.bodies());
    let conn = store.conn();
    let mut entities = EntityCounts::default();

    for team in &normalized.teams {
        upsert_team(conn, team).map_err(persist("teams"))?;
        entities.teams += 1;
    }
    for player in &normalized.players {
        upsert_player(conn, player).map_err(persist("players"))?;
        entities.players += 1;
    }
    for entry in &normalized.rosters {
        upsert_roster_entry(conn, entry).map_err(persist("roster_entries"))?;
        entities.roster_entries += 1;
    }
    for pair in &normalized.matchups {
        upsert_matchup(store, pair).map_err(persist("matchups"))?;
        entities.matchups += 2;
    }

    if let Some(resource) = transactions_resource {
        let appended = store
            .transaction(|conn| {
                if !snapshot_resource(conn, resource)?.was_inserted {
                    return Ok(None);
                }
                for record in &normalized.transactions {
                    append_transaction(conn, record)?;
                }
                Ok(Some(normalized.transactions.len()))
            })
            .map_err(persist("transactions"))?;
        snapshots.count(appended.is_some());
        match appended {
            Some(n) => entities.transactions = n,
            None if !normalized.transactions.is_empty() => log::debug!(
                "Transactions unchanged since last snapshot; skipping {} records",
                normalized.transactions.len()
            ),
            None => {}
        }
    }

    Ok(PersistOutcome {
        snapshots,
        entities,
        normalized,
    })
}

fn snapshot_resource(
    conn: &Connection,
    resource: &FetchedResource,
) -> StoreResult<SnapshotOutcome> {
    let params = serde_json::to_value(&resource.params)?;
    snapshot::record(conn, &resource.endpoint, &params, &resource.body)
}

fn persist(entity: &'static str) -> impl Fn(StoreError) -> IngestError {
    move |source| IngestError::Persist { entity, source }
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
