//! Clean command implementation

use anyhow::{Context, Result};
use gf_fetch::RequestCache;

use crate::cli::{CleanArgs, GlobalArgs};
use crate::commands::common::load_config;

/// Execute the clean command
pub async fn execute(args: &CleanArgs, global: &GlobalArgs) -> Result<()> {
    let config = load_config(global)?;
    let cache = RequestCache::new(config.cache_dir.clone());

    if args.dry_run {
        let entries = cache.entries().context("Failed to list request cache")?;
        println!("Dry run - would remove {} cached responses", entries.len());
        if global.verbose {
            for path in &entries {
                println!("  {}", path.display());
            }
        }
        return Ok(());
    }

    let removed = cache.clear().context("Failed to clear request cache")?;
    println!(
        "Removed {} cached response{} from {}",
        removed,
        if removed == 1 { "" } else { "s" },
        cache.dir().display()
    );
    Ok(())
}

#[cfg(test)]
#[path = "clean_test.rs"]
mod tests;
