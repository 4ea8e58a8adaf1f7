//! Raw CSV loading for the features and salaries files

use anyhow::{Context, Result};
use polars::prelude::*;
use std::path::Path;

/// Load a CSV file as raw text rows, header line included.
///
/// Every column is read as a string (no schema inference) so that the caller
/// decides how to treat malformed values. Empty fields inside a row come back
/// as `""`; trailing fields missing from a short row are dropped, so the row is
/// shorter than the header.
pub fn load_raw_rows(path: &Path) -> Result<Vec<Vec<String>>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(false)
        .with_infer_schema_length(Some(0))
        .with_truncate_ragged_lines(true)
        .finish()
        .with_context(|| format!("Failed to load CSV file: {}", path.display()))?
        .collect()
        .with_context(|| format!("Failed to read CSV file: {}", path.display()))?;

    frame_to_rows(&df)
}

/// Convert an all-string DataFrame into rows of owned fields
pub fn frame_to_rows(df: &DataFrame) -> Result<Vec<Vec<String>>> {
    let columns = df
        .get_columns()
        .iter()
        .map(|col| col.str().cloned())
        .collect::<PolarsResult<Vec<StringChunked>>>()
        .context("Expected every CSV column to be read as text")?;

    let rows = (0..df.height())
        .map(|i| {
            let mut fields: Vec<Option<&str>> = columns.iter().map(|ca| ca.get(i)).collect();
            while matches!(fields.last(), Some(None)) {
                fields.pop();
            }
            fields
                .into_iter()
                .map(|f| f.unwrap_or("").to_string())
                .collect()
        })
        .collect();

    Ok(rows)
}
