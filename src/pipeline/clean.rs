//! Join features with salaries, analyze the joined data and drop outliers

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use super::categorical::{CategoricalAggregator, Category};
use super::correlation::{as_f64, pearson_correlation};
use super::error::CleanError;
use super::join::KeyValueIndex;
use super::record::{
    company_id, field, numeric_field, SalaryRecord, COMPANY_ID, DEGREE, INDUSTRY, JOB_ID,
    JOB_TYPE, MAJOR, MILES_FROM_METROPOLIS, YEARS_EXPERIENCE,
};
use super::stats::{summarize, DistributionSummary, OutlierThreshold, OUTLIER_SIGMA};

/// Options for a cleaning run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanConfig {
    /// Drop records whose salary is more than two standard deviations from the mean
    pub remove_outliers: bool,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            remove_outliers: true,
        }
    }
}

/// Everything learned about the data during a run
#[derive(Debug, Clone, Serialize)]
pub struct CleanDiagnostics {
    /// Data rows in the features file (header excluded)
    pub rows_read: usize,
    /// Rows whose job id has no salary
    pub skipped_missing_salary: usize,
    /// Rows whose salary is zero or negative
    pub skipped_non_positive_salary: usize,
    /// Records built from joined rows
    pub records_joined: usize,
    /// Records dropped by the outlier filter
    pub outliers_removed: usize,
    /// Records that survived cleaning
    pub records_written: usize,
    pub salary: DistributionSummary,
    pub threshold: OutlierThreshold,
    pub categories: BTreeMap<Category, BTreeMap<String, DistributionSummary>>,
    pub years_experience_correlation: f64,
    pub miles_from_metropolis_correlation: f64,
}

/// Cleaned records, in features file order, plus the run diagnostics
#[derive(Debug, Clone)]
pub struct CleanOutcome {
    pub records: Vec<SalaryRecord>,
    pub diagnostics: CleanDiagnostics,
}

/// Values collected while joining, before any statistics are computed
#[derive(Debug, Default)]
struct JoinedData {
    records: Vec<SalaryRecord>,
    groups: CategoricalAggregator,
    years_experience: Vec<u32>,
    miles_from_metropolis: Vec<u32>,
    salaries: Vec<f64>,
    rows_read: usize,
    skipped_missing_salary: usize,
    skipped_non_positive_salary: usize,
}

impl JoinedData {
    fn push<S: AsRef<str>>(
        &mut self,
        fields: &[S],
        line: usize,
        index: &KeyValueIndex,
    ) -> Result<(), CleanError> {
        self.rows_read += 1;

        // A blank line has no job id and therefore no salary
        let job_id = fields.get(JOB_ID).map_or("", |f| f.as_ref());
        let salary = match index.lookup(job_id).filter(|_| !job_id.is_empty()) {
            Some(salary) if salary > 0.0 => salary,
            Some(salary) => {
                debug!(line, job_id, salary, "dropping row with non-positive salary");
                self.skipped_non_positive_salary += 1;
                return Ok(());
            }
            None => {
                debug!(line, job_id, "dropping row without salary");
                self.skipped_missing_salary += 1;
                return Ok(());
            }
        };

        let company = company_id(field(fields, COMPANY_ID, line)?);
        let record = SalaryRecord {
            job_type: field(fields, JOB_TYPE, line)?.to_string(),
            degree: field(fields, DEGREE, line)?.to_string(),
            major: field(fields, MAJOR, line)?.to_string(),
            industry: field(fields, INDUSTRY, line)?.to_string(),
            years_experience: numeric_field(fields, YEARS_EXPERIENCE, line)?,
            miles_from_metropolis: numeric_field(fields, MILES_FROM_METROPOLIS, line)?,
            salary,
        };

        self.groups.remember(Category::CompanyId, company, salary);
        self.groups.remember(Category::JobType, &record.job_type, salary);
        self.groups.remember(Category::Degree, &record.degree, salary);
        self.groups.remember(Category::Major, &record.major, salary);
        self.groups.remember(Category::Industry, &record.industry, salary);

        self.years_experience.push(record.years_experience);
        self.miles_from_metropolis.push(record.miles_from_metropolis);
        self.salaries.push(salary);
        self.records.push(record);

        Ok(())
    }
}

/// Run the join-and-clean pipeline over the rows of a features file.
///
/// The first row is the header and is discarded. Rows without a positive
/// salary in `index` are skipped. Statistics are computed once over all joined
/// records; the outlier filter is a single pass against those statistics.
///
/// # Errors
/// A missing or non-numeric mandatory field fails the run, as does a
/// statistical precondition (no joined records, constant numeric feature).
pub fn run<I, R, S>(
    rows: I,
    index: &KeyValueIndex,
    config: &CleanConfig,
) -> Result<CleanOutcome, CleanError>
where
    I: IntoIterator<Item = R>,
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let mut joined = JoinedData::default();

    for (i, row) in rows.into_iter().enumerate().skip(1) {
        joined.push(row.as_ref(), i + 1, index)?;
    }

    let salary = summarize(&joined.salaries)?;
    let threshold = salary.threshold(OUTLIER_SIGMA);

    let categories = Category::ALL
        .iter()
        .map(|&category| -> Result<_, CleanError> {
            Ok((category, joined.groups.summarize(category)?))
        })
        .collect::<Result<BTreeMap<_, _>, _>>()?;

    let years_experience_correlation =
        pearson_correlation(&as_f64(&joined.years_experience), &joined.salaries)?;
    let miles_from_metropolis_correlation =
        pearson_correlation(&as_f64(&joined.miles_from_metropolis), &joined.salaries)?;

    let records_joined = joined.records.len();
    let records = filter_outliers(joined.records, &threshold, config.remove_outliers);

    let diagnostics = CleanDiagnostics {
        rows_read: joined.rows_read,
        skipped_missing_salary: joined.skipped_missing_salary,
        skipped_non_positive_salary: joined.skipped_non_positive_salary,
        records_joined,
        outliers_removed: records_joined - records.len(),
        records_written: records.len(),
        salary,
        threshold,
        categories,
        years_experience_correlation,
        miles_from_metropolis_correlation,
    };

    Ok(CleanOutcome {
        records,
        diagnostics,
    })
}

/// Keep records inside `threshold`, preserving their order.
///
/// With `remove_outliers` off every record is kept.
pub fn filter_outliers(
    records: Vec<SalaryRecord>,
    threshold: &OutlierThreshold,
    remove_outliers: bool,
) -> Vec<SalaryRecord> {
    if !remove_outliers {
        return records;
    }

    records
        .into_iter()
        .filter(|record| !threshold.excludes(record.salary))
        .collect()
}
