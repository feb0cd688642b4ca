//! Insert-or-update of canonical entities by natural key.
//!
//! Each submodule handles one entity type. Row-level functions take
//! `&Connection` so callers can group them in a transaction via
//! [`Store::transaction`](crate::Store::transaction); outside one, every
//! statement commits on its own.

pub mod matchups;
pub mod players;
pub mod rosters;
pub mod teams;
pub mod transactions;

pub use matchups::{upsert_matchup, upsert_matchup_row};
pub use players::upsert_player;
pub use rosters::upsert_roster_entry;
pub use teams::upsert_team;
pub use transactions::append_transaction;

#[cfg(test)]
#[path = "upsert_test.rs"]
mod tests;
