//! Test features CSV to ARFF conversion

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use console::style;

use crate::pipeline::load_raw_rows;
use crate::report::write_inference_arff;
use crate::utils::{create_spinner, finish_with_success};

/// Check that `input` is an existing regular file and `output` is not a directory
pub fn validate_convert_paths(input: &Path, output: &Path) -> Result<()> {
    if !input.is_file() {
        anyhow::bail!(
            "input file {} must be a valid readable file",
            absolute(input).display()
        );
    }

    if output.is_dir() {
        anyhow::bail!(
            "output file {} must be a valid writable file",
            absolute(output).display()
        );
    }

    Ok(())
}

/// Convert an unlabeled features CSV into an ARFF file with `?` as salary
///
/// # Arguments
/// * `input` - Path to the test features CSV (header line first)
/// * `output` - Path of the ARFF file to write
///
/// # Returns
/// Number of data rows written
pub fn run_convert(input: &Path, output: &Path) -> Result<usize> {
    validate_convert_paths(input, output)?;

    println!(
        "\n {} Converting test features to ARFF",
        style("◆").cyan().bold()
    );
    println!("   Input:  {}", style(input.display()).dim());
    println!("   Output: {}", style(output.display()).dim());
    println!();

    let spinner = create_spinner("Reading test features...");
    let rows = load_raw_rows(input)?;
    let data_rows = rows.get(1..).unwrap_or_default();

    let file = File::create(output)
        .with_context(|| format!("Failed to create ARFF file: {}", output.display()))?;
    let mut out = BufWriter::new(file);
    let written = write_inference_arff(data_rows, &mut out)
        .with_context(|| format!("Failed to convert {}", input.display()))?;
    out.flush()
        .with_context(|| format!("Failed to write ARFF file: {}", output.display()))?;
    finish_with_success(&spinner, &format!("{} rows converted", written));

    println!();
    println!(" {} Conversion complete!", style("✓").green().bold());

    Ok(written)
}

fn absolute(path: &Path) -> std::borrow::Cow<'_, Path> {
    std::path::absolute(path)
        .map(std::borrow::Cow::Owned)
        .unwrap_or(std::borrow::Cow::Borrowed(path))
}
