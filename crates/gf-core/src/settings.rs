//! League roster settings recovered from the league resource.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Bench size assumed when the league reports none.
pub const DEFAULT_BENCH_SIZE: u32 = 5;

/// Starting slots assumed when the league reports none.
pub const DEFAULT_ROSTER_SLOTS: &[(&str, u32)] =
    &[("QB", 1), ("RB", 2), ("WR", 2), ("TE", 1), ("FLEX", 1)];

/// Per-position starting requirements derived from the slot map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionalLimits {
    pub qb: u32,
    pub rb: u32,
    pub wr: u32,
    pub te: u32,
    pub flex: u32,
    pub superflex: u32,
    pub k: u32,
    pub dst: u32,
}

impl PositionalLimits {
    /// Fold platform slot names (`W/R/T`, `Q/W/R/T`, `DEF`) into limits.
    pub fn from_slots(slots: &BTreeMap<String, u32>) -> Self {
        let get = |name: &str| slots.get(name).copied().unwrap_or(0);
        Self {
            qb: get("QB"),
            rb: get("RB"),
            wr: get("WR"),
            te: get("TE"),
            flex: get("FLEX").saturating_add(get("W/R/T")),
            superflex: get("SUPERFLEX").saturating_add(get("Q/W/R/T")),
            k: get("K"),
            dst: get("DEF").saturating_add(get("DST")),
        }
    }
}

/// Roster and transaction settings of one league.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueSettings {
    /// Starting slots keyed by upper-case position, bench excluded
    pub roster_slots: BTreeMap<String, u32>,
    pub positional_limits: PositionalLimits,
    pub bench_size: u32,
    pub trade_deadline_week: Option<i64>,
    pub faab_budget: Option<i64>,
}

impl LeagueSettings {
    /// Assemble settings, substituting defaults for an empty slot map or a
    /// zero bench.
    pub fn from_parts(
        slots: BTreeMap<String, u32>,
        bench: u32,
        trade_deadline_week: Option<i64>,
        faab_budget: Option<i64>,
    ) -> Self {
        let positional_limits = PositionalLimits::from_slots(&slots);
        let roster_slots = if slots.is_empty() {
            DEFAULT_ROSTER_SLOTS
                .iter()
                .map(|(name, count)| (name.to_string(), *count))
                .collect()
        } else {
            slots
        };
        Self {
            roster_slots,
            positional_limits,
            bench_size: if bench == 0 { DEFAULT_BENCH_SIZE } else { bench },
            trade_deadline_week,
            faab_budget,
        }
    }
}

impl Default for LeagueSettings {
    fn default() -> Self {
        Self::from_parts(BTreeMap::new(), 0, None, None)
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
