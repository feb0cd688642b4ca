//! Ingest command implementation

use anyhow::{Context, Result};
use gf_fetch::{BundleFetcher, HttpApiClient, RequestCache};
use gf_ingest::{IngestReport, Pipeline};
use std::sync::Arc;

use crate::cli::{GlobalArgs, IngestArgs, OutputFormat};
use crate::commands::common::{load_config, open_store};

/// Execute the ingest command
pub async fn execute(args: &IngestArgs, global: &GlobalArgs) -> Result<()> {
    let config = load_config(global)?;

    let league = args
        .league
        .clone()
        .or_else(|| config.league_key.clone())
        .context("No league given: pass one on the command line or set league_key")?;

    let client = HttpApiClient::from_config(&config).context("Failed to build API client")?;
    let mut fetcher = BundleFetcher::new(Arc::new(client), RequestCache::new(config.cache_dir.clone()));
    if args.no_cache || !config.use_cache {
        fetcher = fetcher.without_cache();
    }

    let store = open_store(&config)?;
    let report = Pipeline::new(&fetcher, &store)
        .ingest(&league)
        .await
        .with_context(|| format!("Ingestion failed for league {league}"))?;

    match args.output {
        OutputFormat::Text => print_report(&report, global.verbose),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}

fn print_report(report: &IngestReport, verbose: bool) {
    println!(
        "Processed {} resources for {} ({} from cache) in {}ms",
        report.resources,
        report.league_key,
        report.resources_from_cache,
        report.duration().as_millis()
    );
    println!(
        "  snapshots: {} new, {} unchanged",
        report.snapshots.inserted, report.snapshots.unchanged
    );

    let e = &report.entities;
    println!(
        "  rows: {} teams, {} players, {} roster entries, {} matchups, {} transactions",
        e.teams, e.players, e.roster_entries, e.matchups, e.transactions
    );

    if verbose {
        let slots: Vec<String> = report
            .settings
            .roster_slots
            .iter()
            .map(|(pos, n)| format!("{pos}:{n}"))
            .collect();
        println!(
            "  settings: {} bench {}",
            slots.join(" "),
            report.settings.bench_size
        );
    }
}
