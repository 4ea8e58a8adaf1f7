//! Salprep: Salary Data Preparation CLI Tool
//!
//! Prepares Weka training data by joining job features with salaries and
//! removing outliers, and converts test features for prediction.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use salprep::cli::{run_clean, run_convert, CleanPaths, Cli, Commands};
use salprep::pipeline::CleanConfig;

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    // Per-row warnings go to stderr; RUST_LOG=debug also lists unmatched job ids
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match &cli.command {
        Commands::Clean {
            features,
            salaries,
            temp_file,
            arff_file,
            remove_outliers,
            report,
        } => {
            let paths = CleanPaths {
                features,
                salaries,
                temp_file,
                arff_file,
                report: report.as_deref(),
            };
            let config = CleanConfig {
                remove_outliers: *remove_outliers,
            };
            run_clean(&paths, &config)?;
        }
        Commands::Convert { input, output } => {
            run_convert(input, output)?;
        }
    }

    Ok(())
}
