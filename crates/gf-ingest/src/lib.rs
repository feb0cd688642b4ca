//! gf-ingest - Ingestion pipeline for gridfeed
//!
//! Ties the workspace together: a league bundle is fetched through the
//! request cache, every raw response is snapshotted, and the normalized
//! entities are upserted into the store.

pub mod error;
pub mod pipeline;
pub mod report;

pub use error::{IngestError, IngestResult};
pub use pipeline::{persist_bundle, Pipeline, PersistOutcome};
pub use report::{EntityCounts, IngestReport, SnapshotCounts};
