//! CLI command implementations

pub(crate) mod clean;
pub(crate) mod common;
pub(crate) mod ingest;
pub(crate) mod migrate;
pub(crate) mod stats;
