//! Canonical league keys.
//!
//! Users type league identifiers loosely (`123`, `l.123`, `nfl.l.123`); the
//! API only accepts the fully qualified `<game>.l.<id>` form.

use crate::error::{CoreError, CoreResult};
use crate::newtype_string::define_id;

/// Game code prefixed to bare league ids.
pub const DEFAULT_GAME_CODE: &str = "nfl";

define_id! {
    /// A league key in the platform's canonical format.
    pub struct LeagueKey;
}

impl LeagueKey {
    /// Normalize user input into a canonical league key.
    ///
    /// Bare digits and `l.<digits>` (any case) gain the default game prefix;
    /// anything else is trimmed and kept as-is.
    pub fn parse(raw: &str) -> CoreResult<Self> {
        let normalized = normalize_league_key(raw);
        Self::try_new(normalized).ok_or_else(|| CoreError::InvalidLeagueKey {
            raw: raw.to_string(),
        })
    }
}

/// Normalize a raw league identifier, see [`LeagueKey::parse`].
pub fn normalize_league_key(raw: &str) -> String {
    let s = raw.trim();
    if is_digits(s) {
        return format!("{DEFAULT_GAME_CODE}.l.{s}");
    }
    if let Some(prefix) = s.get(..2) {
        let rest = &s[2..];
        if prefix.eq_ignore_ascii_case("l.") && is_digits(rest) {
            return format!("{DEFAULT_GAME_CODE}.l.{rest}");
        }
    }
    s.to_string()
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
#[path = "league_key_test.rs"]
mod tests;
