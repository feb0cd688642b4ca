use super::*;
use gf_fetch::{league_resources, FetchedResource};
use gf_store::query::{get_team, matchups_for_week, table_row_count};
use serde_json::{json, Value};

const LEAGUE: &str = "nfl.l.777";

fn fixture(name: &str) -> Value {
    let text = match name {
        "league" => include_str!("../tests/fixtures/league.json"),
        "teams" => include_str!("../tests/fixtures/teams.json"),
        "rosters" => include_str!("../tests/fixtures/rosters.json"),
        "players" => include_str!("../tests/fixtures/players.json"),
        "matchups" => include_str!("../tests/fixtures/scoreboard.json"),
        "standings" => include_str!("../tests/fixtures/standings.json"),
        "transactions" => include_str!("../tests/fixtures/transactions.json"),
        other => panic!("no fixture for {other}"),
    };
    serde_json::from_str(text).unwrap()
}

fn bundle_with(overrides: &[(&str, Value)]) -> Bundle {
    let resources = league_resources(LEAGUE)
        .into_iter()
        .map(|request| {
            let body = overrides
                .iter()
                .find(|(name, _)| *name == request.name)
                .map(|(_, body)| body.clone())
                .unwrap_or_else(|| fixture(request.name));
            FetchedResource {
                name: request.name,
                endpoint: request.endpoint,
                params: request.params,
                body,
                from_cache: false,
            }
        })
        .collect();
    Bundle::new(LEAGUE, resources)
}

fn count(store: &Store, table: &str) -> i64 {
    table_row_count(store.conn(), table).unwrap()
}

#[test]
fn test_persist_full_bundle() {
    let store = Store::open_memory().unwrap();
    let outcome = persist_bundle(&store, &bundle_with(&[])).unwrap();

    assert_eq!(outcome.snapshots, SnapshotCounts { inserted: 7, unchanged: 0 });
    assert_eq!(
        outcome.entities,
        EntityCounts {
            teams: 2,
            players: 2,
            roster_entries: 2,
            matchups: 2,
            transactions: 2,
        }
    );

    let team = get_team(store.conn(), "nfl.l.777.t.1").unwrap().unwrap();
    assert_eq!(team.name, "Gridiron Gang");
    assert_eq!(team.manager.as_deref(), Some("Alex"));

    let week2 = matchups_for_week(store.conn(), 2).unwrap();
    assert_eq!(week2.len(), 2);
    assert_eq!(week2[0].result.as_deref(), Some("win"));
    assert_eq!(week2[0].actual, Some(121.40));
    assert_eq!(week2[1].result.as_deref(), Some("loss"));

    let settings = outcome.normalized.settings.unwrap();
    assert_eq!(settings.bench_size, 6);
    assert_eq!(settings.faab_budget, Some(100));
    assert_eq!(settings.positional_limits.flex, 1);
}

#[test]
fn test_reingesting_identical_bundle_is_idempotent() {
    let store = Store::open_memory().unwrap();
    persist_bundle(&store, &bundle_with(&[])).unwrap();
    let tables = ["teams", "players", "roster_entries", "matchups", "transactions", "snapshots"];
    let before: Vec<i64> = tables.iter().map(|t| count(&store, t)).collect();

    let again = persist_bundle(&store, &bundle_with(&[])).unwrap();
    assert_eq!(again.snapshots, SnapshotCounts { inserted: 0, unchanged: 7 });
    assert_eq!(again.entities.transactions, 0);

    let after: Vec<i64> = tables.iter().map(|t| count(&store, t)).collect();
    assert_eq!(before, after);
}

#[test]
fn test_new_transactions_payload_is_appended() {
    let store = Store::open_memory().unwrap();
    persist_bundle(&store, &bundle_with(&[])).unwrap();

    let newer = json!({"transactions": [{"transaction": {"type": "drop", "team_key": "nfl.l.777.t.1"}}]});
    let outcome = persist_bundle(&store, &bundle_with(&[("transactions", newer)])).unwrap();
    assert_eq!(outcome.snapshots.inserted, 1);
    assert_eq!(outcome.entities.transactions, 1);
    assert_eq!(count(&store, "transactions"), 3);
}

#[test]
fn test_malformed_resource_does_not_abort_siblings() {
    let store = Store::open_memory().unwrap();
    let broken = json!({"error": {"lang": "en-US", "description": "Invalid league"}});
    let outcome = persist_bundle(&store, &bundle_with(&[("teams", broken)])).unwrap();

    assert_eq!(outcome.entities.teams, 0);
    assert_eq!(outcome.entities.players, 2);
    assert_eq!(outcome.entities.matchups, 2);
    assert_eq!(outcome.snapshots.inserted, 7);
    assert_eq!(count(&store, "teams"), 0);
}

#[test]
fn test_missing_league_resource_uses_default_settings() {
    let store = Store::open_memory().unwrap();
    let bundle = Bundle::new(
        LEAGUE,
        vec![FetchedResource {
            name: "players",
            endpoint: format!("league/{LEAGUE}/players"),
            params: Default::default(),
            body: fixture("players"),
            from_cache: true,
        }],
    );
    let outcome = persist_bundle(&store, &bundle).unwrap();
    assert!(outcome.normalized.settings.is_none());
    assert_eq!(outcome.entities.total(), 2);
}

#[test]
fn test_run_failing_before_transactions_converges_on_rerun() {
    let store = Store::open_memory().unwrap();
    store.conn().execute_batch("ALTER TABLE teams RENAME TO teams_away").unwrap();

    let err = persist_bundle(&store, &bundle_with(&[])).unwrap_err();
    assert!(matches!(err, IngestError::Persist { entity: "teams", .. }), "{err}");
    assert_eq!(count(&store, "transactions"), 0);
    assert_eq!(count(&store, "snapshots"), 6);

    store.conn().execute_batch("ALTER TABLE teams_away RENAME TO teams").unwrap();
    let rerun = persist_bundle(&store, &bundle_with(&[])).unwrap();
    assert_eq!(rerun.snapshots, SnapshotCounts { inserted: 1, unchanged: 6 });
    assert_eq!(rerun.entities.transactions, 2);
    assert_eq!(count(&store, "teams"), 2);
    assert_eq!(count(&store, "transactions"), 2);

    let settled = persist_bundle(&store, &bundle_with(&[])).unwrap();
    assert_eq!(settled.entities.transactions, 0);
    assert_eq!(count(&store, "transactions"), 2);
}

#[test]
fn test_failed_transaction_append_leaves_snapshot_unrecorded() {
    let store = Store::open_memory().unwrap();
    store
        .conn()
        .execute_batch("ALTER TABLE transactions RENAME TO transactions_away")
        .unwrap();

    let err = persist_bundle(&store, &bundle_with(&[])).unwrap_err();
    assert!(matches!(err, IngestError::Persist { entity: "transactions", .. }), "{err}");
    assert_eq!(count(&store, "snapshots"), 6);
    assert_eq!(count(&store, "teams"), 2);

    store
        .conn()
        .execute_batch("ALTER TABLE transactions_away RENAME TO transactions")
        .unwrap();
    let rerun = persist_bundle(&store, &bundle_with(&[])).unwrap();
    assert_eq!(rerun.entities.transactions, 2);
    assert_eq!(count(&store, "transactions"), 2);
    assert_eq!(count(&store, "snapshots"), 7);
}
