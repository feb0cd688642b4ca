//! Stats command implementation

use anyhow::{Context, Result};
use gf_store::query::table_row_counts;
use serde::Serialize;

use crate::cli::{GlobalArgs, OutputFormat, StatsArgs};
use crate::commands::common::{load_config, open_store};

#[derive(Serialize)]
struct TableStat {
    table: String,
    rows: i64,
}

/// Execute the stats command
pub async fn execute(args: &StatsArgs, global: &GlobalArgs) -> Result<()> {
    let config = load_config(global)?;
    let store = open_store(&config)?;

    let counts = table_row_counts(store.conn()).context("Failed to count table rows")?;

    match args.output {
        OutputFormat::Json => {
            let stats: Vec<TableStat> = counts
                .into_iter()
                .map(|(table, rows)| TableStat { table, rows })
                .collect();
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        OutputFormat::Text => {
            let width = counts.iter().map(|(t, _)| t.len()).max().unwrap_or(0);
            for (table, rows) in &counts {
                println!("{table:<width$}  {rows}");
            }
        }
    }
    Ok(())
}
