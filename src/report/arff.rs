//! Weka ARFF rendering for training and test data
//!
//! The attribute header is a fixed template: category domains are known in
//! advance and never derived from the data being written.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::pipeline::{SalaryRecord, FEATURE_COLUMNS};

/// Relation name written on the first line
pub const RELATION: &str = "salary_training_data";

pub const JOB_TYPES: [&str; 8] = [
    "CFO",
    "CEO",
    "VICE_PRESIDENT",
    "MANAGER",
    "JUNIOR",
    "JANITOR",
    "CTO",
    "SENIOR",
];

pub const DEGREES: [&str; 5] = ["MASTERS", "HIGH_SCHOOL", "DOCTORAL", "BACHELORS", "NONE"];

pub const MAJORS: [&str; 9] = [
    "MATH",
    "NONE",
    "PHYSICS",
    "CHEMISTRY",
    "COMPSCI",
    "BIOLOGY",
    "LITERATURE",
    "BUSINESS",
    "ENGINEERING",
];

pub const INDUSTRIES: [&str; 7] = [
    "HEALTH",
    "WEB",
    "AUTO",
    "FINANCE",
    "EDUCATION",
    "OIL",
    "SERVICE",
];

/// Stand-in for the unknown salary of a test row
pub const MISSING_VALUE: &str = "?";

/// Leading feature columns (job id, company id) left out of the ARFF output
const SKIPPED_COLUMNS: usize = 2;

/// The ARFF header, up to and including the `@data` line
pub fn arff_header() -> String {
    let nominal = |name: &str, values: &[&str]| {
        format!("@attribute {} {{{}}}\n", name, values.join(","))
    };

    let mut header = format!("@relation {}\n\n", RELATION);
    header.push_str(&nominal("jobType", &JOB_TYPES));
    header.push_str(&nominal("degree", &DEGREES));
    header.push_str(&nominal("major", &MAJORS));
    header.push_str(&nominal("industry", &INDUSTRIES));
    header.push_str("@attribute yearsExperience numeric\n");
    header.push_str("@attribute milesFromMetropolis numeric\n");
    header.push_str("@attribute salary numeric\n\n");
    header.push_str("@data\n");
    header
}

/// Write labeled records after the header, one per line
pub fn write_training_arff<W: Write>(records: &[SalaryRecord], out: &mut W) -> std::io::Result<()> {
    out.write_all(arff_header().as_bytes())?;
    for record in records {
        writeln!(out, "{}", record.to_csv_line())?;
    }
    Ok(())
}

/// Write unlabeled feature rows after the header with `?` as salary.
///
/// `rows` are raw rows of a features file without its header line. The job id
/// and company id columns are dropped; the remaining columns are copied as is.
/// Blank rows are skipped.
///
/// # Returns
/// Number of data lines written
pub fn write_inference_arff<W, R, S>(rows: &[R], out: &mut W) -> Result<usize>
where
    W: Write,
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    out.write_all(arff_header().as_bytes())?;
    let mut written = 0;

    for (i, row) in rows.iter().enumerate() {
        let fields = row.as_ref();
        if fields.iter().all(|f| f.as_ref().is_empty()) {
            debug!(line = i + 2, "skipping blank test features row");
            continue;
        }
        if fields.len() < FEATURE_COLUMNS.len() {
            // i + 2: 1-based, after the header line
            anyhow::bail!(
                "line {}: expected {} fields, found {}",
                i + 2,
                FEATURE_COLUMNS.len(),
                fields.len()
            );
        }

        let mut line = String::new();
        for field in &fields[SKIPPED_COLUMNS..] {
            line.push_str(field.as_ref());
            line.push(',');
        }
        line.push_str(MISSING_VALUE);
        writeln!(out, "{}", line)?;
        written += 1;
    }

    Ok(written)
}

/// Write the training ARFF file for `records`
pub fn save_training_arff(records: &[SalaryRecord], path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create ARFF file: {}", path.display()))?;
    let mut out = BufWriter::new(file);
    write_training_arff(records, &mut out)
        .and_then(|_| out.flush())
        .with_context(|| format!("Failed to write ARFF file: {}", path.display()))
}
