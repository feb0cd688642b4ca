//! Error types for gf-fetch

use thiserror::Error;

/// Fetch errors
#[derive(Error, Debug)]
pub enum FetchError {
    /// Network-level failure: connect, timeout, TLS (F001)
    #[error("[F001] Request to {endpoint} failed: {message}")]
    Transport { endpoint: String, message: String },

    /// Non-success HTTP status (F002)
    #[error("[F002] {endpoint} returned HTTP {status}: {body}")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },

    /// Response body is not JSON (F003)
    #[error("[F003] Response from {endpoint} is not valid JSON: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    /// Request cache could not be written or cleared (F004)
    #[error("[F004] Request cache I/O failed at {path}: {source}")]
    CacheIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// HTTP client could not be constructed (F005)
    #[error("[F005] HTTP client setup failed: {0}")]
    ClientSetup(String),
}

/// Result type alias for FetchError
pub type FetchResult<T> = Result<T, FetchError>;

impl FetchError {
    /// Endpoint the error relates to, when there is one.
    pub fn endpoint(&self) -> Option<&str> {
        match self {
            FetchError::Transport { endpoint, .. }
            | FetchError::Status { endpoint, .. }
            | FetchError::Decode { endpoint, .. } => Some(endpoint),
            FetchError::CacheIo { .. } | FetchError::ClientSetup(_) => None,
        }
    }
}
