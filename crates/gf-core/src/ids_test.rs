use super::*;

#[test]
fn test_try_new_trims() {
    let id = PlayerId::try_new("  nfl.p.1 ").unwrap();
    assert_eq!(id, "nfl.p.1");
    assert_eq!(id.as_str(), "nfl.p.1");
}

#[test]
fn test_try_new_rejects_blank() {
    assert!(TeamId::try_new("").is_none());
    assert!(TeamId::try_new("   ").is_none());
}

#[test]
fn test_deserialize_rejects_blank() {
    let ok: TeamId = serde_json::from_str("\"1.t.1\"").unwrap();
    assert_eq!(ok.to_string(), "1.t.1");
    assert!(serde_json::from_str::<TeamId>("\" \"").is_err());
}

#[test]
fn test_serialize_is_transparent() {
    let id = PlayerId::try_new("p1").unwrap();
    assert_eq!(serde_json::to_string(&id).unwrap(), "\"p1\"");
}
