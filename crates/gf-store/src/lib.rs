//! Relational store for gridfeed.
//!
//! Provides a DuckDB-backed store for the canonical entities (players,
//! teams, roster entries, matchups, transactions) and the content-addressed
//! snapshot log of raw responses.

pub mod connection;
pub mod ddl;
pub mod error;
pub mod migration;
pub mod query;
pub mod snapshot;
pub mod upsert;

pub use connection::Store;
pub use duckdb::Connection;
pub use error::{StoreError, StoreResult};
pub use snapshot::SnapshotOutcome;
