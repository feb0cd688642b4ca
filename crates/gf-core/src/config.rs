//! Configuration types and parsing for gridfeed.yml

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding [`Config::db_path`]
pub const ENV_DB_PATH: &str = "GF_DB_PATH";
/// Environment variable overriding [`Config::cache_dir`]
pub const ENV_CACHE_DIR: &str = "GF_CACHE_DIR";
/// Environment variable overriding [`Config::league_key`]
pub const ENV_LEAGUE_KEY: &str = "GF_LEAGUE_KEY";
/// Environment variable overriding [`Config::access_token`]
pub const ENV_ACCESS_TOKEN: &str = "GF_ACCESS_TOKEN";

const CONFIG_FILE_NAMES: &[&str] = &["gridfeed.yml", "gridfeed.yaml"];

/// Ingestion configuration from gridfeed.yml
///
/// Every component that touches disk or the network takes the paths it needs
/// from this struct; nothing reads the environment behind the caller's back.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// DuckDB database file (`:memory:` for an ephemeral store)
    #[serde(default = "default_db_path")]
    pub db_path: String,

    /// Directory holding one JSON file per cached request
    #[serde(default = "default_cache_dir")]
    pub cache_dir: PathBuf,

    /// Base URL every API path is joined onto
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Bearer token sent with every request
    #[serde(default)]
    pub access_token: Option<String>,

    /// JSON file with an `access_token` field, read when `access_token` is unset
    #[serde(default)]
    pub token_path: Option<PathBuf>,

    /// Per-request timeout handed to the HTTP client
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// League ingested when none is given on the command line
    #[serde(default)]
    pub league_key: Option<String>,

    /// Serve repeated requests from the on-disk cache
    #[serde(default = "default_true")]
    pub use_cache: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            cache_dir: default_cache_dir(),
            api_base_url: default_api_base_url(),
            access_token: None,
            token_path: None,
            request_timeout_secs: default_request_timeout_secs(),
            league_key: None,
            use_cache: true,
        }
    }
}

fn default_db_path() -> String {
    "gridfeed.duckdb".to_string()
}

fn default_cache_dir() -> PathBuf {
    PathBuf::from(".cache")
}

fn default_api_base_url() -> String {
    "https://fantasysports.yahooapis.com/fantasy/v2".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: Config =
            serde_yaml::from_str(&content).map_err(|e| CoreError::ConfigParseError {
                message: format!("{}: {e}", path.display()),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a directory containing gridfeed.yml or
    /// gridfeed.yaml. A directory without either yields the defaults.
    pub fn load_from_dir(dir: &Path) -> CoreResult<Self> {
        for name in CONFIG_FILE_NAMES {
            let candidate = dir.join(name);
            if candidate.exists() {
                return Self::load(&candidate);
            }
        }
        log::debug!("No config file in {}, using defaults", dir.display());
        Ok(Self::default())
    }

    /// Apply `GF_*` environment overrides on top of file values.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(v) = non_empty_env(ENV_DB_PATH) {
            self.db_path = v;
        }
        if let Some(v) = non_empty_env(ENV_CACHE_DIR) {
            self.cache_dir = PathBuf::from(v);
        }
        if let Some(v) = non_empty_env(ENV_LEAGUE_KEY) {
            self.league_key = Some(v);
        }
        if let Some(v) = non_empty_env(ENV_ACCESS_TOKEN) {
            self.access_token = Some(v);
        }
        self
    }

    /// Resolve the bearer token: inline value first, then the token file.
    ///
    /// Returns `Ok(None)` when neither is configured.
    pub fn resolve_access_token(&self) -> CoreResult<Option<String>> {
        if let Some(token) = self.access_token.as_deref().filter(|t| !t.is_empty()) {
            return Ok(Some(token.to_string()));
        }
        let Some(path) = &self.token_path else {
            return Ok(None);
        };
        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let parsed: serde_json::Value = serde_json::from_str(&content)?;
        Ok(parsed
            .get("access_token")
            .and_then(|v| v.as_str())
            .map(str::to_string))
    }

    /// Validate the configuration
    fn validate(&self) -> CoreResult<()> {
        if self.db_path.trim().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "db_path cannot be empty".to_string(),
            });
        }
        if self.api_base_url.trim().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "api_base_url cannot be empty".to_string(),
            });
        }
        if self.request_timeout_secs == 0 {
            return Err(CoreError::ConfigInvalid {
                message: "request_timeout_secs must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
