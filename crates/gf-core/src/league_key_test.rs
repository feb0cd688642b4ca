use super::*;

#[test]
fn test_bare_digits_get_prefix() {
    assert_eq!(normalize_league_key("123"), "nfl.l.123");
    assert_eq!(normalize_league_key(" 42 "), "nfl.l.42");
}

#[test]
fn test_short_form_any_case() {
    assert_eq!(normalize_league_key("l.987"), "nfl.l.987");
    assert_eq!(normalize_league_key("L.987"), "nfl.l.987");
}

#[test]
fn test_canonical_and_unknown_forms_pass_through() {
    assert_eq!(normalize_league_key("nfl.l.123"), "nfl.l.123");
    assert_eq!(normalize_league_key("423.l.55"), "423.l.55");
    assert_eq!(normalize_league_key("l.abc"), "l.abc");
}

#[test]
fn test_parse_rejects_blank() {
    assert!(LeagueKey::parse("   ").is_err());
    assert_eq!(LeagueKey::parse("7").unwrap(), "nfl.l.7");
}

#[test]
fn test_multibyte_input_does_not_panic() {
    assert_eq!(normalize_league_key("é1"), "é1");
}
