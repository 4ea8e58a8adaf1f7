//! Joined training record and the raw feature row layout

use serde::Serialize;

use super::error::InputError;

/// Column names of the features file, in file order
pub const FEATURE_COLUMNS: [&str; 8] = [
    "jobId",
    "companyId",
    "jobType",
    "degree",
    "major",
    "industry",
    "yearsExperience",
    "milesFromMetropolis",
];

/// Column names of the cleaned output, in output order
pub const OUTPUT_COLUMNS: [&str; 7] = [
    "jobType",
    "degree",
    "major",
    "industry",
    "yearsExperience",
    "milesFromMetropolis",
    "salary",
];

/// Prefix of raw company ids, e.g. `COMP37`
pub const COMPANY_PREFIX: &str = "COMP";

pub(crate) const JOB_ID: usize = 0;
pub(crate) const COMPANY_ID: usize = 1;
pub(crate) const JOB_TYPE: usize = 2;
pub(crate) const DEGREE: usize = 3;
pub(crate) const MAJOR: usize = 4;
pub(crate) const INDUSTRY: usize = 5;
pub(crate) const YEARS_EXPERIENCE: usize = 6;
pub(crate) const MILES_FROM_METROPOLIS: usize = 7;

/// A feature row joined with its salary
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryRecord {
    pub job_type: String,
    pub degree: String,
    pub major: String,
    pub industry: String,
    pub years_experience: u32,
    pub miles_from_metropolis: u32,
    pub salary: f64,
}

impl SalaryRecord {
    /// Comma-separated fields in [`OUTPUT_COLUMNS`] order
    pub fn to_csv_line(&self) -> String {
        format!(
            "{},{},{},{},{},{},{}",
            self.job_type,
            self.degree,
            self.major,
            self.industry,
            self.years_experience,
            self.miles_from_metropolis,
            format_salary(self.salary)
        )
    }
}

/// Salary text shared by the cleaned CSV and the training ARFF.
///
/// Whole amounts keep one decimal (`130.0`).
pub fn format_salary(salary: f64) -> String {
    if salary.fract() == 0.0 && salary.abs() < 1e15 {
        format!("{:.1}", salary)
    } else {
        salary.to_string()
    }
}

/// Strip the `COMP` prefix from a raw company id.
///
/// Ids without the prefix are returned unchanged.
pub fn company_id(raw: &str) -> &str {
    raw.strip_prefix(COMPANY_PREFIX).unwrap_or(raw)
}

/// Field `idx` of a feature row, or a missing-field error
pub(crate) fn field<S: AsRef<str>>(
    fields: &[S],
    idx: usize,
    line: usize,
) -> Result<&str, InputError> {
    fields
        .get(idx)
        .map(|f| f.as_ref())
        .ok_or(InputError::MissingField {
            line,
            column: FEATURE_COLUMNS[idx],
        })
}

/// Parse a mandatory non-negative integer field
pub(crate) fn numeric_field<S: AsRef<str>>(
    fields: &[S],
    idx: usize,
    line: usize,
) -> Result<u32, InputError> {
    let raw = field(fields, idx, line)?;
    raw.trim()
        .parse::<u32>()
        .map_err(|_| InputError::InvalidNumber {
            line,
            column: FEATURE_COLUMNS[idx],
            value: raw.to_string(),
        })
}
