use super::*;
use gf_fetch::Params;
use serde_json::json;
use serial_test::serial;
use tempfile::tempdir;

fn global_for(dir: &std::path::Path) -> GlobalArgs {
    GlobalArgs {
        verbose: false,
        project_dir: dir.to_path_buf(),
        config: None,
        db_path: Some(":memory:".to_string()),
        cache_dir: Some(dir.join("cache")),
    }
}

async fn seed_cache(dir: &std::path::Path) -> RequestCache {
    let cache = RequestCache::new(dir.join("cache"));
    cache
        .put("league/nfl.l.1", &Params::new(), &json!({"league": {}}))
        .await
        .unwrap();
    cache
        .put("league/nfl.l.1/teams", &Params::new(), &json!({"teams": []}))
        .await
        .unwrap();
    cache
}

#[tokio::test]
#[serial]
async fn test_clean_removes_cached_responses() {
    let temp_dir = tempdir().unwrap();
    let cache = seed_cache(temp_dir.path()).await;
    assert_eq!(cache.entries().unwrap().len(), 2);

    let args = CleanArgs { dry_run: false };
    execute(&args, &global_for(temp_dir.path())).await.unwrap();

    assert!(cache.entries().unwrap().is_empty());
}

#[tokio::test]
#[serial]
async fn test_clean_dry_run_does_not_remove() {
    let temp_dir = tempdir().unwrap();
    let cache = seed_cache(temp_dir.path()).await;

    let args = CleanArgs { dry_run: true };
    execute(&args, &global_for(temp_dir.path())).await.unwrap();

    assert_eq!(cache.entries().unwrap().len(), 2);
}

#[tokio::test]
#[serial]
async fn test_clean_missing_cache_dir_is_ok() {
    let temp_dir = tempdir().unwrap();

    let args = CleanArgs { dry_run: false };
    execute(&args, &global_for(temp_dir.path())).await.unwrap();
}
