use super::{collection_items, TEAM_ID, WEEK};
use crate::extract::{unwrap_record, Record};
use crate::fields::{Accessor, FieldSpec};
use crate::navigate::navigate_record;
use gf_core::{MatchupPair, MatchupSide, TeamId};
use serde_json::Value;

const ACTUAL: FieldSpec = FieldSpec::new(
    "actual",
    &[
        Accessor::Path(&["team_points", "total"]),
        Accessor::Key("points"),
        Accessor::Key("actual"),
    ],
);

const PROJECTED: FieldSpec = FieldSpec::new(
    "projected",
    &[
        Accessor::Path(&["team_projected_points", "total"]),
        Accessor::Key("projected_points"),
        Accessor::Key("projected"),
    ],
);

const RESULT: FieldSpec = FieldSpec::new("result", &[Accessor::Key("result")]);

const IS_PLAYOFFS: FieldSpec = FieldSpec::new(
    "is_playoffs",
    &[Accessor::Key("is_playoffs"), Accessor::Key("playoffs")],
);

const IS_TIED: FieldSpec = FieldSpec::new("is_tied", &[Accessor::Key("is_tied")]);

const WINNER: FieldSpec = FieldSpec::new(
    "winner",
    &[Accessor::Key("winner_team_key"), Accessor::Key("winner")],
);

const SIDE_A: &[&str] = &["team_a", "teamA", "home"];
const SIDE_B: &[&str] = &["team_b", "teamB", "away"];

/// Normalize a matchups (scoreboard) resource into row pairs.
///
/// A matchup either names its sides (`team_a`/`team_b`) or lists them under
/// `teams`. Matchups without a positive week or without two distinct
/// identified teams are skipped.
pub fn normalize_matchups(raw: &Value) -> Vec<MatchupPair> {
    collection_items(
        raw,
        &[
            &["fantasy_content", "league", "scoreboard", "matchups"],
            &["scoreboard", "matchups"],
            &["matchups"],
        ],
    )
    .iter()
    .filter_map(|item| {
        let record = unwrap_record(item, "matchup")?;
        let pair = matchup_pair(&record);
        if pair.is_none() {
            log::debug!("Skipping incomplete matchup: {}", item);
        }
        pair
    })
    .collect()
}

fn matchup_pair(record: &Record) -> Option<MatchupPair> {
    let week = WEEK.int(record).filter(|w| *w > 0)?;
    let is_playoffs = IS_PLAYOFFS.flag(record).unwrap_or(false);
    let (mut a, mut b) = sides(record)?;
    if a.team_id == b.team_id {
        return None;
    }

    if a.result.is_none() && b.result.is_none() {
        let (ra, rb) = decide(record, &a.team_id, &b.team_id);
        a.result = ra;
        b.result = rb;
    }
    Some(MatchupPair::new(week, is_playoffs, a, b))
}

fn sides(record: &Record) -> Option<(MatchupSide, MatchupSide)> {
    let named = |keys: &[&str]| keys.iter().find_map(|key| record.get(*key));
    if let (Some(a), Some(b)) = (named(SIDE_A), named(SIDE_B)) {
        return Some((side(a)?, side(b)?));
    }

    let teams = navigate_record(record, &["teams"]);
    match teams.as_slice() {
        [a, b] => Some((side(a)?, side(b)?)),
        _ => None,
    }
}

fn side(raw: &Value) -> Option<MatchupSide> {
    let record = unwrap_record(raw, "team")?;
    Some(MatchupSide {
        team_id: TEAM_ID.text(&record).and_then(TeamId::try_new)?,
        projected: PROJECTED.float(&record),
        actual: ACTUAL.float(&record),
        result: RESULT.text(&record).map(|r| r.to_ascii_lowercase()),
    })
}

/// Derive win/loss/tie from the matchup-level fields, when reported.
fn decide(record: &Record, a: &TeamId, b: &TeamId) -> (Option<String>, Option<String>) {
    if IS_TIED.flag(record) == Some(true) {
        return (Some("tie".into()), Some("tie".into()));
    }
    match WINNER.text(record) {
        Some(winner) if winner == a.as_str() => (Some("win".into()), Some("loss".into())),
        Some(winner) if winner == b.as_str() => (Some("loss".into()), Some("win".into())),
        _ => (None, None),
    }
}

#[cfg(test)]
#[path = "matchups_test.rs"]
mod tests;
