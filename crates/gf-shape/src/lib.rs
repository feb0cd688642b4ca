//! gf-shape - Shape normalization for gridfeed
//!
//! The platform encodes the same logical record in several JSON shapes:
//! plain objects, lists of single-key maps, and maps keyed by stringified
//! indices. This crate classifies those shapes, flattens them, navigates the
//! envelopes around them, and turns each resource into canonical entities.

pub mod extract;
pub mod fields;
pub mod navigate;
pub mod node;
pub mod normalize;

pub use extract::{extract_items, flatten, unwrap_record, Record};
pub use fields::{Accessor, FieldSpec};
pub use navigate::{navigate, navigate_record, resolve_path};
pub use node::RawNode;
pub use normalize::{
    normalize_matchups, normalize_players, normalize_rosters, normalize_settings,
    normalize_teams, normalize_transactions, NormalizedBundle,
};
