//! Table introspection helpers.

use crate::error::{StoreError, StoreResult, StoreResultExt};
use crate::migration::VERSION_TABLE;
use duckdb::Connection;

/// List the data tables of the store, excluding migration bookkeeping.
pub fn list_tables(conn: &Connection) -> StoreResult<Vec<String>> {
    let mut stmt = conn
        .prepare(
            "SELECT table_name FROM information_schema.tables \
             WHERE table_schema = 'main' AND table_name <> ? \
             ORDER BY table_name",
        )
        .query_context("prepare list_tables")?;
    let rows = stmt
        .query_map(duckdb::params![VERSION_TABLE], |row| row.get::<_, String>(0))
        .query_context("list_tables")?;
    rows.collect::<Result<Vec<_>, _>>()
        .query_context("list_tables row")
}

/// Get the row count of one table.
pub fn table_row_count(conn: &Connection, table_name: &str) -> StoreResult<i64> {
    if table_name.is_empty()
        || !table_name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(StoreError::QueryError(format!(
            "invalid table name '{table_name}': must contain only alphanumeric characters and underscores"
        )));
    }
    conn.query_row(&format!("SELECT COUNT(*) FROM {table_name}"), [], |row| {
        row.get(0)
    })
    .query_context(&format!("count failed for {table_name}"))
}

/// Row counts of every data table, in table-name order.
pub fn table_row_counts(conn: &Connection) -> StoreResult<Vec<(String, i64)>> {
    list_tables(conn)?
        .into_iter()
        .map(|table| {
            let count = table_row_count(conn, &table)?;
            Ok((table, count))
        })
        .collect()
}

#[cfg(test)]
#[path = "tables_test.rs"]
mod tests;
