use super::*;
use serial_test::serial;
use std::io::Write;
use tempfile::TempDir;

fn write_config(dir: &TempDir, name: &str, body: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(body.as_bytes()).unwrap();
    path
}

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.db_path, "gridfeed.duckdb");
    assert_eq!(config.cache_dir, PathBuf::from(".cache"));
    assert_eq!(config.request_timeout_secs, 30);
    assert!(config.use_cache);
}

#[test]
fn test_load_partial_file_fills_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "gridfeed.yml",
        "db_path: data/app.duckdb\nleague_key: \"123\"\nuse_cache: false\n",
    );
    let config = Config::load(&path).unwrap();
    assert_eq!(config.db_path, "data/app.duckdb");
    assert_eq!(config.league_key.as_deref(), Some("123"));
    assert!(!config.use_cache);
    assert_eq!(config.cache_dir, PathBuf::from(".cache"));
}

#[test]
fn test_unknown_field_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "gridfeed.yml", "dbpath: typo.duckdb\n");
    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, CoreError::ConfigParseError { .. }));
}

#[test]
fn test_zero_timeout_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "gridfeed.yml", "request_timeout_secs: 0\n");
    assert!(matches!(
        Config::load(&path).unwrap_err(),
        CoreError::ConfigInvalid { .. }
    ));
}

#[test]
fn test_load_missing_file() {
    let err = Config::load(Path::new("/nonexistent/gridfeed.yml")).unwrap_err();
    assert!(matches!(err, CoreError::ConfigNotFound { .. }));
}

#[test]
fn test_load_from_dir_prefers_yml_and_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from_dir(dir.path()).unwrap();
    assert_eq!(config.db_path, "gridfeed.duckdb");

    write_config(&dir, "gridfeed.yaml", "db_path: b.duckdb\n");
    assert_eq!(Config::load_from_dir(dir.path()).unwrap().db_path, "b.duckdb");

    write_config(&dir, "gridfeed.yml", "db_path: a.duckdb\n");
    assert_eq!(Config::load_from_dir(dir.path()).unwrap().db_path, "a.duckdb");
}

#[test]
fn test_token_from_file() {
    let dir = TempDir::new().unwrap();
    let token_path = write_config(
        &dir,
        "tokens.json",
        r#"{"access_token": "abc", "refresh_token": "r", "expires_at": 1}"#,
    );
    let config = Config {
        token_path: Some(token_path),
        ..Config::default()
    };
    assert_eq!(config.resolve_access_token().unwrap().as_deref(), Some("abc"));
}

#[test]
fn test_inline_token_wins_over_file() {
    let config = Config {
        access_token: Some("inline".to_string()),
        token_path: Some(PathBuf::from("/nonexistent/tokens.json")),
        ..Config::default()
    };
    assert_eq!(
        config.resolve_access_token().unwrap().as_deref(),
        Some("inline")
    );
}

#[test]
fn test_no_token_configured() {
    assert!(Config::default().resolve_access_token().unwrap().is_none());
}

// These tests modify environment variables and must run serially

#[test]
#[serial]
fn test_env_overrides_apply() {
    std::env::set_var(ENV_DB_PATH, "env.duckdb");
    std::env::set_var(ENV_LEAGUE_KEY, "l.9");
    let config = Config::default().with_env_overrides();
    std::env::remove_var(ENV_DB_PATH);
    std::env::remove_var(ENV_LEAGUE_KEY);

    assert_eq!(config.db_path, "env.duckdb");
    assert_eq!(config.league_key.as_deref(), Some("l.9"));
}

#[test]
#[serial]
fn test_blank_env_is_ignored() {
    std::env::set_var(ENV_CACHE_DIR, "  ");
    let config = Config::default().with_env_overrides();
    std::env::remove_var(ENV_CACHE_DIR);

    assert_eq!(config.cache_dir, PathBuf::from(".cache"));
}
