use super::*;
use serde_json::json;

#[test]
fn test_yahoo_transactions_keep_raw_payload() {
    let item = json!({"transaction": [
        {"transaction_key": "nfl.l.1.tr.7", "type": "add/drop", "status": "successful"},
        {"players": {
            "0": {"player": [
                [{"player_key": "nfl.p.1"}],
                {"transaction_data": [{"type": "add", "destination_team_key": "nfl.l.1.t.3"}]}
            ]},
            "count": 1
        }}
    ]});
    let raw = json!({"fantasy_content": {"league": [
        {"league_key": "nfl.l.1"},
        {"transactions": {"0": item.clone(), "count": 1}}
    ]}});

    let records = normalize_transactions(&raw);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].kind, Some(TransactionKind::AddDrop));
    assert_eq!(records[0].team_id.as_ref().map(|t| t.as_str()), Some("nfl.l.1.t.3"));
    assert_eq!(records[0].raw, item);
}

#[test]
fn test_flat_transactions_and_unknown_kinds() {
    let raw = json!({"transactions": [
        {"kind": "TRADE", "trader_team_key": "t1"},
        {"transaction_type": "commish", "team_id": "t2"},
        {"note": "no kind at all"}
    ]});
    let records = normalize_transactions(&raw);
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].kind, Some(TransactionKind::Trade));
    assert_eq!(records[0].team_id.as_ref().map(|t| t.as_str()), Some("t1"));
    assert_eq!(records[1].kind, Some(TransactionKind::Other("commish".into())));
    assert_eq!(records[2].kind, None);
    assert_eq!(records[2].team_id, None);
}

#[test]
fn test_source_team_used_for_drops() {
    let raw = json!({"transactions": [{"transaction": {
        "type": "drop",
        "players": [{"player": [
            [{"player_key": "p1"}],
            {"transaction_data": {"type": "drop", "source_team_key": "t9"}}
        ]}]
    }}]});
    let records = normalize_transactions(&raw);
    assert_eq!(records[0].team_id.as_ref().map(|t| t.as_str()), Some("t9"));
}

#[test]
fn test_non_object_items_are_ignored() {
    let raw = json!({"transactions": [1, "two", null, {}]});
    assert!(normalize_transactions(&raw).is_empty());
}
