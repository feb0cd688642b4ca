//! Error types for gf-ingest

use gf_core::CoreError;
use gf_fetch::FetchError;
use gf_store::StoreError;
use thiserror::Error;

/// Ingestion errors
#[derive(Error, Debug)]
pub enum IngestError {
    /// The league key could not be used (I001)
    #[error("[I001] Invalid league: {0}")]
    League(#[from] CoreError),

    /// The bundle could not be fetched (I002)
    #[error("[I002] Bundle fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// A raw response could not be snapshotted (I003)
    #[error("[I003] Snapshot of {endpoint} failed: {source}")]
    Snapshot {
        endpoint: String,
        #[source]
        source: StoreError,
    },

    /// A normalized entity could not be written (I004)
    #[error("[I004] Writing {entity} failed: {source}")]
    Persist {
        entity: &'static str,
        #[source]
        source: StoreError,
    },
}

/// Result type alias for IngestError
pub type IngestResult<T> = Result<T, IngestError>;
