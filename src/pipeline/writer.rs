//! Intermediate CSV output of cleaned records

use anyhow::{Context, Result};
use polars::prelude::*;
use std::path::Path;

use super::record::{format_salary, SalaryRecord, OUTPUT_COLUMNS};

/// Build a DataFrame with one row per record, columns in output order
pub fn records_to_frame(records: &[SalaryRecord]) -> Result<DataFrame> {
    let columns = vec![
        Column::new(
            OUTPUT_COLUMNS[0].into(),
            records.iter().map(|r| r.job_type.as_str()).collect::<Vec<&str>>(),
        ),
        Column::new(
            OUTPUT_COLUMNS[1].into(),
            records.iter().map(|r| r.degree.as_str()).collect::<Vec<&str>>(),
        ),
        Column::new(
            OUTPUT_COLUMNS[2].into(),
            records.iter().map(|r| r.major.as_str()).collect::<Vec<&str>>(),
        ),
        Column::new(
            OUTPUT_COLUMNS[3].into(),
            records.iter().map(|r| r.industry.as_str()).collect::<Vec<&str>>(),
        ),
        Column::new(
            OUTPUT_COLUMNS[4].into(),
            records.iter().map(|r| r.years_experience).collect::<Vec<u32>>(),
        ),
        Column::new(
            OUTPUT_COLUMNS[5].into(),
            records
                .iter()
                .map(|r| r.miles_from_metropolis)
                .collect::<Vec<u32>>(),
        ),
        Column::new(
            OUTPUT_COLUMNS[6].into(),
            records
                .iter()
                .map(|r| format_salary(r.salary))
                .collect::<Vec<String>>(),
        ),
    ];

    DataFrame::new(columns).context("Failed to assemble cleaned records")
}

/// Write cleaned records as CSV with a header line
pub fn save_records_csv(records: &[SalaryRecord], path: &Path) -> Result<()> {
    let mut df = records_to_frame(records)?;

    let mut file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("Failed to write CSV file: {}", path.display()))?;

    Ok(())
}
