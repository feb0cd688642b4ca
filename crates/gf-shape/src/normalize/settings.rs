use crate::extract::{flatten, unwrap_record, Record};
use crate::fields::{as_int, Accessor, FieldSpec};
use crate::navigate::{navigate_record, resolve_path};
use gf_core::LeagueSettings;
use serde_json::Value;
use std::collections::BTreeMap;

const POSITION: FieldSpec = FieldSpec::new(
    "position",
    &[Accessor::Key("position"), Accessor::Key("name")],
);

const COUNT: FieldSpec = FieldSpec::new("count", &[Accessor::Key("count"), Accessor::Key("num")]);

const BENCH: FieldSpec = FieldSpec::new(
    "bench",
    &[Accessor::Key("bench"), Accessor::Key("bench_size")],
);

const FAAB: FieldSpec = FieldSpec::new(
    "faab",
    &[Accessor::Key("faab"), Accessor::Key("faab_budget")],
);

const TRADE_DEADLINE: FieldSpec = FieldSpec::new(
    "trade_deadline",
    &[
        Accessor::Key("trade_deadline_week"),
        Accessor::Key("trade_deadline"),
        Accessor::Path(&["trade_deadline", "week"]),
    ],
);

const BENCH_SLOTS: &[&str] = &["BN", "BENCH"];

/// Injured-reserve slots count neither as starters nor as bench.
const RESERVE_SLOTS: &[&str] = &["IR", "IL", "IR+"];

/// Extract league settings from a league resource.
///
/// The settings node is looked up under the league envelope, then under a
/// top-level `settings` key, then the root itself is taken as the settings
/// object. Anything missing falls back to [`LeagueSettings`] defaults.
pub fn normalize_settings(raw: &Value) -> LeagueSettings {
    let record = settings_record(raw).unwrap_or_default();

    let mut slots: BTreeMap<String, u32> = BTreeMap::new();
    let mut bench_from_slots = 0u32;
    for (position, count) in roster_positions(&record) {
        if RESERVE_SLOTS.contains(&position.as_str()) {
            continue;
        }
        let total = if BENCH_SLOTS.contains(&position.as_str()) {
            &mut bench_from_slots
        } else {
            slots.entry(position.clone()).or_insert(0)
        };
        // An overflowing count cannot be a real roster; drop it.
        match total.checked_add(count) {
            Some(sum) => *total = sum,
            None => log::debug!("Skipping {} slot count {}: overflows", position, count),
        }
    }
    let bench = if bench_from_slots > 0 {
        bench_from_slots
    } else {
        BENCH.int(&record).and_then(non_negative).unwrap_or(0)
    };

    LeagueSettings::from_parts(
        slots,
        bench,
        TRADE_DEADLINE.int(&record),
        FAAB.int(&record),
    )
}

fn settings_record(raw: &Value) -> Option<Record> {
    if let Some(node) = resolve_path(raw, &["fantasy_content", "league", "settings"]) {
        return flatten(&node);
    }
    match raw.get("settings") {
        Some(node) => flatten(node),
        None => flatten(raw),
    }
}

fn roster_positions(record: &Record) -> Vec<(String, u32)> {
    let mut items = navigate_record(record, &["roster_positions"]);
    if items.is_empty() {
        items = navigate_record(record, &["roster", "positions"]);
    }
    items
        .iter()
        .filter_map(|item| {
            let position = unwrap_record(item, "roster_position")?;
            let name = POSITION.text(&position)?.to_ascii_uppercase();
            let count = match COUNT.resolve(&position) {
                Some(value) => as_int(&value).and_then(non_negative)?,
                None => 1,
            };
            Some((name, count))
        })
        .collect()
}

fn non_negative(n: i64) -> Option<u32> {
    u32::try_from(n).ok()
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
