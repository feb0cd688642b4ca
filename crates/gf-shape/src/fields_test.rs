use super::*;
use serde_json::json;

const ID: FieldSpec = FieldSpec::new(
    "id",
    &[
        Accessor::Key("player_key"),
        Accessor::Key("player_id"),
        Accessor::Key("id"),
    ],
);

const BYE: FieldSpec = FieldSpec::new(
    "bye_week",
    &[Accessor::Key("bye_week"), Accessor::Path(&["bye_weeks", "week"])],
);

fn record(value: Value) -> Record {
    value.as_object().unwrap().clone()
}

#[test]
fn test_first_match_wins() {
    let rec = record(json!({"id": "3", "player_id": "2", "player_key": "1"}));
    assert_eq!(ID.text(&rec).as_deref(), Some("1"));
    let rec = record(json!({"id": "3", "player_id": 2}));
    assert_eq!(ID.text(&rec).as_deref(), Some("2"));
}

#[test]
fn test_blank_and_null_candidates_are_skipped() {
    let rec = record(json!({"player_key": "  ", "player_id": null, "id": "9"}));
    assert_eq!(ID.text(&rec).as_deref(), Some("9"));
    assert_eq!(ID.resolve(&rec), Some(json!("9")));
}

#[test]
fn test_unresolvable_field() {
    assert_eq!(ID.text(&record(json!({"name": "x"}))), None);
}

#[test]
fn test_path_accessor_and_int_coercion() {
    assert_eq!(BYE.int(&record(json!({"bye_weeks": {"week": "7"}}))), Some(7));
    assert_eq!(BYE.int(&record(json!({"bye_week": 9}))), Some(9));
    // A junk first candidate does not hide a usable second one.
    assert_eq!(
        BYE.int(&record(json!({"bye_week": "n/a", "bye_weeks": {"week": 11}}))),
        Some(11)
    );
}

#[test]
fn test_as_int() {
    assert_eq!(as_int(&json!("12")), Some(12));
    assert_eq!(as_int(&json!(" 4 ")), Some(4));
    assert_eq!(as_int(&json!("7.0")), Some(7));
    assert_eq!(as_int(&json!(7.5)), None);
    assert_eq!(as_int(&json!("abc")), None);
    assert_eq!(as_int(&json!(true)), None);
}

#[test]
fn test_as_float_and_flag() {
    assert_eq!(as_float(&json!("101.25")), Some(101.25));
    assert_eq!(as_float(&json!(3)), Some(3.0));
    assert_eq!(as_float(&json!("NaN")), None);
    assert_eq!(as_flag(&json!("1")), Some(true));
    assert_eq!(as_flag(&json!(0)), Some(false));
    assert_eq!(as_flag(&json!("maybe")), None);
}

#[test]
fn test_as_name_variants() {
    assert_eq!(as_name(&json!("Plain")).as_deref(), Some("Plain"));
    assert_eq!(
        as_name(&json!({"full": "Full Name", "first": "F"})).as_deref(),
        Some("Full Name")
    );
    assert_eq!(as_name(&json!({"display": "Disp"})).as_deref(), Some("Disp"));
    assert_eq!(
        as_name(&json!({"first": "Ada", "last": "Lovelace"})).as_deref(),
        Some("Ada Lovelace")
    );
    assert_eq!(as_name(&json!([{"full": "Wrapped"}])).as_deref(), Some("Wrapped"));
    assert_eq!(as_name(&json!({})), None);
}

#[test]
fn test_as_manager_variants() {
    assert_eq!(
        as_manager(&json!([{"manager": {"nickname": "Bob"}}])).as_deref(),
        Some("Bob")
    );
    assert_eq!(
        as_manager(&json!({"0": {"manager": {"nickname": "Ann"}}, "count": 1})).as_deref(),
        Some("Ann")
    );
    assert_eq!(as_manager(&json!([{"nickname": "Cy"}])).as_deref(), Some("Cy"));
    assert_eq!(as_manager(&json!({"nickname": "Di"})).as_deref(), Some("Di"));
    assert_eq!(as_manager(&json!({"manager": {"nickname": "Ed"}})).as_deref(), Some("Ed"));
    assert_eq!(as_manager(&json!("Flo")).as_deref(), Some("Flo"));
    assert_eq!(as_manager(&json!([])), None);
}
