//! Read helpers over the store.
//!
//! - [`tables`]: table listing and row counts
//! - [`entities`]: canonical entities read back by natural key

pub mod entities;
pub mod tables;

pub use entities::{get_player, get_roster_entry, get_team, matchups_for_week};
pub use tables::{list_tables, table_row_count, table_row_counts};
