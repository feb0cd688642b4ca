use super::*;

#[test]
fn test_pair_new_keeps_each_sides_numbers() {
    let side = |id: &str, pts: f64| MatchupSide {
        team_id: TeamId::try_new(id).unwrap(),
        projected: None,
        actual: Some(pts),
        result: None,
    };
    let pair = MatchupPair::new(3, false, side("A", 110.0), side("B", 90.0));
    let [fwd, rev] = pair.rows();
    assert_eq!((fwd.team_id.as_str(), fwd.opponent_id.as_str()), ("A", "B"));
    assert_eq!((rev.team_id.as_str(), rev.opponent_id.as_str()), ("B", "A"));
    assert_eq!(fwd.actual, Some(110.0));
    assert_eq!(rev.actual, Some(90.0));
}

#[test]
fn test_transaction_kind_classify() {
    assert_eq!(TransactionKind::classify("ADD"), Some(TransactionKind::Add));
    assert_eq!(
        TransactionKind::classify("add/drop"),
        Some(TransactionKind::AddDrop)
    );
    assert_eq!(TransactionKind::classify("waivers"), Some(TransactionKind::Waiver));
    assert_eq!(
        TransactionKind::classify("commish"),
        Some(TransactionKind::Other("commish".to_string()))
    );
    assert_eq!(TransactionKind::classify("  "), None);
}

#[test]
fn test_transaction_kind_as_str_round_trips_classify() {
    for raw in ["add", "drop", "add/drop", "trade", "waiver"] {
        assert_eq!(TransactionKind::classify(raw).unwrap().as_str(), raw);
    }
}
