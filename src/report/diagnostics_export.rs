//! Cleaning diagnostics export functionality

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use crate::pipeline::CleanDiagnostics;

/// Metadata about the cleaning run
#[derive(Serialize)]
pub struct RunMetadata {
    /// Timestamp of the run (ISO 8601 format)
    pub timestamp: String,
    /// Salprep version
    pub salprep_version: String,
    /// Features file path
    pub features_file: String,
    /// Salaries file path
    pub salaries_file: String,
    /// Whether salaries beyond 2σ were dropped
    pub remove_outliers: bool,
}

/// Salary index statistics
#[derive(Serialize)]
pub struct SalaryIndexSummary {
    /// Distinct job ids with a salary
    pub size: usize,
    /// Salary rows skipped because the value was not a number
    pub malformed_rows: usize,
}

/// Complete diagnostics export with metadata
#[derive(Serialize)]
pub struct DiagnosticsExport<'a> {
    pub metadata: RunMetadata,
    pub salary_index: SalaryIndexSummary,
    /// Join counts, salary distribution, per-category statistics and correlations
    pub diagnostics: &'a CleanDiagnostics,
}

/// Parameters describing the run for the export metadata
pub struct ExportParams<'a> {
    pub features_file: &'a str,
    pub salaries_file: &'a str,
    pub remove_outliers: bool,
    pub salary_index_size: usize,
    pub malformed_salary_rows: usize,
}

/// Export cleaning diagnostics to a pretty-printed JSON file
///
/// # Arguments
/// * `diagnostics` - Result of the cleaning run
/// * `output_path` - Path to write the JSON file
/// * `params` - Export parameters for metadata
pub fn export_diagnostics(
    diagnostics: &CleanDiagnostics,
    output_path: &Path,
    params: &ExportParams,
) -> Result<()> {
    let export = DiagnosticsExport {
        metadata: RunMetadata {
            timestamp: Utc::now().to_rfc3339(),
            salprep_version: env!("CARGO_PKG_VERSION").to_string(),
            features_file: params.features_file.to_string(),
            salaries_file: params.salaries_file.to_string(),
            remove_outliers: params.remove_outliers,
        },
        salary_index: SalaryIndexSummary {
            size: params.salary_index_size,
            malformed_rows: params.malformed_salary_rows,
        },
        diagnostics,
    };

    let json = serde_json::to_string_pretty(&export)
        .context("Failed to serialize cleaning diagnostics to JSON")?;

    std::fs::write(output_path, json)
        .with_context(|| format!("Failed to write diagnostics to {}", output_path.display()))?;

    Ok(())
}
