//! Training data preparation: join, clean and export

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use console::style;

use crate::pipeline::{self, load_raw_rows, save_records_csv, CleanConfig, CleanOutcome, KeyValueIndex};
use crate::report::{export_diagnostics, save_training_arff, CleaningSummary, ExportParams};
use crate::utils::{
    create_spinner, finish_with_success, finish_with_warning, print_banner, print_completion,
    print_config, print_count, print_info, print_step_header, print_success, RunCard,
};

/// Files involved in a cleaning run
#[derive(Debug, Clone, Copy)]
pub struct CleanPaths<'a> {
    pub features: &'a Path,
    pub salaries: &'a Path,
    pub temp_file: &'a Path,
    pub arff_file: &'a Path,
    pub report: Option<&'a Path>,
}

/// Run the full training data preparation and print a report along the way
pub fn run_clean(paths: &CleanPaths, config: &CleanConfig) -> Result<CleanOutcome> {
    print_banner(env!("CARGO_PKG_VERSION"));
    print_config(&RunCard {
        features: paths.features,
        salaries: paths.salaries,
        temp_csv: paths.temp_file,
        arff: paths.arff_file,
        remove_outliers: config.remove_outliers,
    });

    // Step 1: salary index
    print_step_header(1, "Load Salaries");
    let step_start = Instant::now();
    let spinner = create_spinner("Building job salary map...");
    let salary_rows = load_raw_rows(paths.salaries)?;
    let index = KeyValueIndex::build(&salary_rows, true);
    drop(salary_rows);
    if index.malformed_rows() > 0 {
        finish_with_warning(
            &spinner,
            &format!(
                "Job salary map size = {} ({} unparsable rows skipped)",
                index.len(),
                index.malformed_rows()
            ),
        );
    } else {
        finish_with_success(&spinner, &format!("Job salary map size = {}", index.len()));
    }
    print_elapsed(step_start);

    // Step 2: join and analyze
    print_step_header(2, "Join & Analyze");
    let step_start = Instant::now();
    let spinner = create_spinner("Joining features with salaries...");
    let feature_rows = load_raw_rows(paths.features)?;
    let outcome = pipeline::run(&feature_rows, &index, config)
        .with_context(|| format!("Failed to clean {}", paths.features.display()))?;
    drop(feature_rows);
    finish_with_success(
        &spinner,
        &format!("Joined {} records", outcome.diagnostics.records_joined),
    );

    let summary = CleaningSummary::new(
        index.len(),
        index.malformed_rows(),
        config.remove_outliers,
        &outcome.diagnostics,
    );
    summary.display_categories();
    summary.display_salary();

    if config.remove_outliers {
        let t = &outcome.diagnostics.threshold;
        print_count(
            "outlier record(s)",
            outcome.diagnostics.outliers_removed,
            Some(&format!("(outside {:.2} .. {:.2})", t.lower, t.upper)),
        );
    } else {
        print_info("Outlier removal disabled, keeping all records");
    }
    print_elapsed(step_start);

    // Step 3: write outputs
    print_step_header(3, "Save Results");
    let step_start = Instant::now();
    save_records_csv(&outcome.records, paths.temp_file)?;
    print_success(&format!("Saved cleaned CSV to {}", paths.temp_file.display()));
    save_training_arff(&outcome.records, paths.arff_file)?;
    print_success(&format!("Saved ARFF to {}", paths.arff_file.display()));

    if let Some(report) = paths.report {
        export_diagnostics(
            &outcome.diagnostics,
            report,
            &ExportParams {
                features_file: &paths.features.display().to_string(),
                salaries_file: &paths.salaries.display().to_string(),
                remove_outliers: config.remove_outliers,
                salary_index_size: index.len(),
                malformed_salary_rows: index.malformed_rows(),
            },
        )?;
        print_success(&format!("Saved diagnostics to {}", report.display()));
    }
    print_elapsed(step_start);

    summary.display();
    print_completion(&format!(
        "Total number of records written: {}",
        outcome.diagnostics.records_written
    ));

    Ok(outcome)
}

fn print_elapsed(start: Instant) {
    println!(
        "    {}",
        style(format!("⏱  {:.2}s", start.elapsed().as_secs_f64())).dim()
    );
}
