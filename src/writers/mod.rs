//! Serialization of a finished report table
//!
//! Two generators are provided, each accessed through a `generate` function that
//! renders a [`ReportTable`] into any writer:
//! - **CSV**: one record per project, keyed by the project key
//! - **Excel**: a native .xlsx workbook with a single formatted sheet
//!
//! Both use the same column layout: the project attributes from the listing
//! (key, display name, qualifier, visibility, tags and last analysis date),
//! followed by one column per catalog metric in catalog order. Missing metric
//! values are left empty.

mod csv;
mod excel;

use crate::Result;
use crate::report::{ProjectRow, ReportTable};
use camino::Utf8Path;
use clap::ValueEnum;
use ohno::IntoAppError;
use std::fs;
use strum::Display;

pub use csv::generate as generate_csv;
pub use excel::generate as generate_xlsx;

/// Leading columns describing each project, ahead of the metric columns
const PROJECT_COLUMNS: [&str; 6] = ["key", "name", "qualifier", "visibility", "tags", "analysisDate"];

/// Output file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ReportFormat {
    /// Comma-separated values
    #[default]
    Csv,

    /// Excel workbook
    Xlsx,
}

/// Render `table` in `format` and write it to `path`
///
/// The report is rendered completely in memory first, so the file is only created
/// once rendering has succeeded.
///
/// # Errors
///
/// Returns an error if rendering fails or the file cannot be written
pub fn write_report(table: &ReportTable, format: ReportFormat, path: &Utf8Path) -> Result<()> {
    let mut buffer = Vec::new();
    match format {
        ReportFormat::Csv => generate_csv(table, &mut buffer)?,
        ReportFormat::Xlsx => generate_xlsx(table, &mut buffer)?,
    }

    fs::write(path, buffer).into_app_err_with(|| format!("writing {format} report to '{path}'"))
}

/// Column headers shared by all formats
fn header(table: &ReportTable) -> impl Iterator<Item = &str> {
    PROJECT_COLUMNS
        .into_iter()
        .chain(table.metrics().iter().map(|m| m.key.as_str()))
}

/// Text of the project attribute columns for one row, empty where the listing had no value
fn project_cells(row: &ProjectRow) -> [String; PROJECT_COLUMNS.len()] {
    [
        row.key().to_string(),
        row.name().unwrap_or_default().to_string(),
        row.qualifier().unwrap_or_default().to_string(),
        row.visibility().unwrap_or_default().to_string(),
        row.tags().join(","),
        row.analysis_date().unwrap_or_default().to_string(),
    ]
}
