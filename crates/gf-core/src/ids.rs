//! Natural keys supplied by the platform.
//!
//! Ids are never generated locally; they are whatever the API reports,
//! trimmed.

use crate::newtype_string::define_id;

define_id! {
    /// A player identifier such as `nfl.p.30123` or a bare numeric id.
    pub struct PlayerId;
}

define_id! {
    /// A fantasy team identifier such as `nfl.l.123.t.4`.
    pub struct TeamId;
}

#[cfg(test)]
#[path = "ids_test.rs"]
mod tests;
