//! gf-core - Core library for gridfeed
//!
//! Shared types used across the ingestion workspace: configuration, error
//! types, external identifiers, the canonical entity model, and the digest
//! helpers behind request caching and snapshot deduplication.

pub mod checksum;
pub mod config;
pub mod entity;
pub mod error;
pub mod ids;
pub mod league_key;
mod newtype_string;
pub mod settings;

pub use checksum::{canonical_checksum, canonicalize, compute_checksum};
pub use config::Config;
pub use entity::{
    Matchup, MatchupPair, MatchupSide, Player, RosterEntry, Team, TransactionKind,
    TransactionRecord,
};
pub use error::{CoreError, CoreResult};
pub use ids::{PlayerId, TeamId};
pub use league_key::{normalize_league_key, LeagueKey};
pub use settings::{LeagueSettings, PositionalLimits};
