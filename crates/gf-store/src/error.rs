//! Error types for the store.

use thiserror::Error;

/// Store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to open or create the database (S001).
    #[error("[S001] Database connection failed: {0}")]
    ConnectionError(String),

    /// Schema migration failed (S002).
    #[error("[S002] Database migration failed: {0}")]
    MigrationError(String),

    /// SQL execution error while reading (S003).
    #[error("[S003] Database query failed: {0}")]
    QueryError(String),

    /// Transaction management error (S004).
    #[error("[S004] Database transaction failed: {0}")]
    TransactionError(String),

    /// An entity could not be written (S005).
    #[error("[S005] Upsert failed: {0}")]
    UpsertError(String),

    /// A snapshot could not be recorded (S006).
    #[error("[S006] Snapshot write failed: {0}")]
    SnapshotError(String),

    /// A payload could not be serialized for storage (S007).
    #[error("[S007] Payload serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// DuckDB driver error with preserved source chain (S008).
    #[error("[S008] DuckDB error")]
    DuckDb(#[source] duckdb::Error),
}

/// Result type alias for [`StoreError`].
pub type StoreResult<T> = Result<T, StoreError>;

impl From<duckdb::Error> for StoreError {
    fn from(err: duckdb::Error) -> Self {
        StoreError::DuckDb(err)
    }
}

/// Attach write context to raw DuckDB results.
pub(crate) trait StoreResultExt<T> {
    /// Map the error to [`StoreError::UpsertError`] prefixed with `what`.
    fn upsert_context(self, what: &str) -> StoreResult<T>;

    /// Map the error to [`StoreError::QueryError`] prefixed with `what`.
    fn query_context(self, what: &str) -> StoreResult<T>;
}

impl<T> StoreResultExt<T> for Result<T, duckdb::Error> {
    fn upsert_context(self, what: &str) -> StoreResult<T> {
        self.map_err(|e| StoreError::UpsertError(format!("{what}: {e}")))
    }

    fn query_context(self, what: &str) -> StoreResult<T> {
        self.map_err(|e| StoreError::QueryError(format!("{what}: {e}")))
    }
}
