//! Shared utilities for CLI commands

use anyhow::{Context, Result};
use gf_core::Config;
use gf_store::Store;

use crate::cli::GlobalArgs;

/// Resolve configuration: file, then `GF_*` environment, then CLI flags.
pub(crate) fn load_config(global: &GlobalArgs) -> Result<Config> {
    let config = match &global.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load_from_dir(&global.project_dir)
            .context("Failed to load project config")?,
    };
    let mut config = config.with_env_overrides();

    if let Some(db_path) = &global.db_path {
        config.db_path = db_path.clone();
    }
    if let Some(cache_dir) = &global.cache_dir {
        config.cache_dir = cache_dir.clone();
    }
    Ok(config)
}

/// Open the configured store, applying pending migrations.
pub(crate) fn open_store(config: &Config) -> Result<Store> {
    Store::open_path(&config.db_path)
        .with_context(|| format!("Failed to open database at {}", config.db_path))
}

#[cfg(test)]
#[path = "common_test.rs"]
mod tests;
