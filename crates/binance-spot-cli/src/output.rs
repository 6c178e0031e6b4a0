/*
[INPUT]:  Tables and single records returned by the adapter
[OUTPUT]: Text grid or pretty JSON ready for stdout
[POS]:    Presentation layer - rendering query results
[UPDATE]: When adding output formats
*/

use binance_spot_adapter::{Table, TableRow};
use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned columns with a row index
    Table,
    /// Pretty-printed JSON
    Json,
}

pub fn render_table<T>(table: &Table<T>, format: OutputFormat) -> anyhow::Result<String>
where
    T: TableRow + Serialize,
{
    match format {
        OutputFormat::Table => Ok(table.to_string()),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(table)?)),
    }
}

/// A single record prints as a one-row table, or as a JSON object
pub fn render_record<T>(record: T, format: OutputFormat) -> anyhow::Result<String>
where
    T: TableRow + Serialize,
{
    match format {
        OutputFormat::Table => Ok(Table::new(vec![record]).to_string()),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(&record)?)),
    }
}
