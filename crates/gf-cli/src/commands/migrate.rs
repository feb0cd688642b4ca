//! Migrate command implementation

use anyhow::{Context, Result};
use gf_store::migration::current_version;

use crate::cli::GlobalArgs;
use crate::commands::common::{load_config, open_store};

/// Execute the migrate command
pub async fn execute(global: &GlobalArgs) -> Result<()> {
    let config = load_config(global)?;
    let store = open_store(&config)?;

    let version = current_version(store.conn()).context("Failed to read schema version")?;
    log::debug!("Schema at version {version} in {}", config.db_path);
    println!("migrated");
    Ok(())
}
