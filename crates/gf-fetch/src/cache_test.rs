use super::*;
use serde_json::json;
use tempfile::TempDir;

fn params(pairs: &[(&str, &str)]) -> Params {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_key_independent_of_param_order() {
    let a = RequestCache::cache_key("league/x/players", &params(&[("start", "25"), ("count", "25")]));
    let b = RequestCache::cache_key("league/x/players", &params(&[("count", "25"), ("start", "25")]));
    assert_eq!(a, b);
    assert_eq!(a.len(), 64);
}

#[test]
fn test_key_material() {
    assert_eq!(key_material("  league/x ", &Params::new()), "league/x");
    assert_eq!(
        key_material("league/x", &params(&[("b", "2"), ("a", "1")])),
        "league/x?a=1&b=2"
    );
    assert_ne!(
        RequestCache::cache_key("league/x", &Params::new()),
        RequestCache::cache_key("league/x", &params(&[("a", "1")]))
    );
}

#[tokio::test]
async fn test_put_then_get() {
    let temp = TempDir::new().unwrap();
    let cache = RequestCache::new(temp.path().join("nested").join("cache"));
    let body = json!({"fantasy_content": {"league": [{"league_key": "nfl.l.1"}]}});

    assert_eq!(cache.get("league/nfl.l.1", &Params::new()).await, None);
    cache.put("league/nfl.l.1", &Params::new(), &body).await.unwrap();
    assert_eq!(cache.get("league/nfl.l.1", &Params::new()).await, Some(body.clone()));
    assert_eq!(cache.get(" league/nfl.l.1 ", &Params::new()).await, Some(body));
}

#[tokio::test]
async fn test_corrupt_entry_is_a_miss() {
    let temp = TempDir::new().unwrap();
    let cache = RequestCache::new(temp.path());
    let key = RequestCache::cache_key("league/x", &Params::new());
    fs::write(temp.path().join(format!("{key}.json")), "{not json").unwrap();

    assert_eq!(cache.get("league/x", &Params::new()).await, None);

    cache.put("league/x", &Params::new(), &json!({"ok": true})).await.unwrap();
    assert_eq!(cache.get("league/x", &Params::new()).await, Some(json!({"ok": true})));
}

#[tokio::test]
async fn test_clear_removes_only_cache_files() {
    let temp = TempDir::new().unwrap();
    let cache = RequestCache::new(temp.path());
    cache.put("a", &Params::new(), &json!({})).await.unwrap();
    cache.put("b", &Params::new(), &json!({})).await.unwrap();
    fs::write(temp.path().join("README"), "keep").unwrap();

    assert_eq!(cache.clear().unwrap(), 2);
    assert_eq!(cache.get("a", &Params::new()).await, None);
    assert!(temp.path().join("README").exists());
    assert_eq!(cache.clear().unwrap(), 0);
}

#[test]
fn test_clear_missing_directory() {
    let temp = TempDir::new().unwrap();
    let cache = RequestCache::new(temp.path().join("never-created"));
    assert_eq!(cache.clear().unwrap(), 0);
}

#[tokio::test]
async fn test_entries_lists_json_files() {
    let temp = TempDir::new().unwrap();
    let cache = RequestCache::new(temp.path());
    assert!(cache.entries().unwrap().is_empty());
    cache.put("a", &Params::new(), &json!({})).await.unwrap();
    fs::write(temp.path().join("notes.txt"), "x").unwrap();

    let entries = cache.entries().unwrap();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].ends_with(format!("{}.json", RequestCache::cache_key("a", &Params::new()))));
}
