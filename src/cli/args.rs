//! Command-line argument definitions using clap

use clap::error::ErrorKind;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Salprep - join, clean and export salary data for Weka
#[derive(Parser, Debug)]
#[command(name = "salprep")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Parse the process arguments.
    ///
    /// Help and version text are printed to stderr and the process exits
    /// without doing any work; usage errors exit through clap as usual.
    pub fn parse_args() -> Self {
        Self::try_parse().unwrap_or_else(|err| match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                eprint!("{}", err.render());
                std::process::exit(0);
            }
            _ => err.exit(),
        })
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Join features with salaries, drop outliers and write the training ARFF file
    Clean {
        /// File having features (train_features)
        features: PathBuf,

        /// File having salaries (train_salaries)
        salaries: PathBuf,

        /// File where to write the joined and cleaned data as CSV
        temp_file: PathBuf,

        /// Final training data file in ARFF format for use with Weka
        arff_file: PathBuf,

        /// Whether to remove salaries more than 2 standard deviations from the mean.
        /// Anything other than "false" means true.
        #[arg(default_value = "true", action = ArgAction::Set, value_parser = parse_remove_outliers)]
        remove_outliers: bool,

        /// Also write the cleaning diagnostics to this JSON file
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Convert a test_features CSV file to ARFF for salary prediction
    Convert {
        /// Test features file in CSV format
        input: PathBuf,

        /// ARFF file for which salary must be predicted
        output: PathBuf,
    },
}

/// Parser for the remove_outliers argument: only a case-insensitive "false" disables it
fn parse_remove_outliers(s: &str) -> Result<bool, String> {
    Ok(!s.trim().eq_ignore_ascii_case("false"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_remove_outliers() {
        assert_eq!(parse_remove_outliers("false"), Ok(false));
        assert_eq!(parse_remove_outliers("FALSE"), Ok(false));
        assert_eq!(parse_remove_outliers("true"), Ok(true));
        assert_eq!(parse_remove_outliers("no"), Ok(true));
    }
}
