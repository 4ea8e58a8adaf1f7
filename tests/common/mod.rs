//! Shared test utilities and fixture generators
#![allow(dead_code)]

use salprep::pipeline::SalaryRecord;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const FEATURES_HEADER: &str =
    "jobId,companyId,jobType,degree,major,industry,yearsExperience,milesFromMetropolis";

/// Feature rows with known join outcomes
///
/// - `JOB1`..`JOB10`: have a salary; `JOB10` earns 1000 and is a 2σ outlier
/// - `JOB11`: no salary at all
/// - `JOB12`: salary of 0
pub fn features_rows() -> Vec<Vec<String>> {
    let mut rows = vec![split(FEATURES_HEADER)];
    let job_types = ["CEO", "JANITOR", "CTO", "MANAGER"];
    for i in 1..=12u32 {
        let line = format!(
            "JOB{},COMP{},{},MASTERS,MATH,HEALTH,{},{}",
            i,
            i % 3,
            job_types[(i as usize) % job_types.len()],
            i,
            10 * (13 - i)
        );
        rows.push(split(&line));
    }
    rows
}

/// Salary rows matching [`features_rows`], including one unparsable value
pub fn salaries_rows() -> Vec<Vec<String>> {
    let mut rows = vec![split("jobId,salary")];
    for i in 1..=9 {
        rows.push(split(&format!("JOB{},100", i)));
    }
    rows.push(split("JOB10,1000"));
    rows.push(split("JOB12,0"));
    rows.push(split("JOBX,abc"));
    rows
}

/// Split a CSV line into owned fields
pub fn split(line: &str) -> Vec<String> {
    line.split(',').map(str::to_string).collect()
}

/// Join rows back into CSV text, one line per row
pub fn to_csv(rows: &[Vec<String>]) -> String {
    rows.iter()
        .map(|r| r.join(","))
        .collect::<Vec<_>>()
        .join("\n")
        + "\n"
}

/// Write `contents` to `name` inside `dir`
pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

/// Create a temporary directory holding the fixture features and salaries files
pub fn create_temp_inputs() -> (TempDir, PathBuf, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let features = write_file(temp_dir.path(), "train_features.csv", &to_csv(&features_rows()));
    let salaries = write_file(temp_dir.path(), "train_salaries.csv", &to_csv(&salaries_rows()));
    (temp_dir, features, salaries)
}

/// A record with fixed features and the given salary
pub fn record(salary: f64) -> SalaryRecord {
    SalaryRecord {
        job_type: "CEO".to_string(),
        degree: "MASTERS".to_string(),
        major: "MATH".to_string(),
        industry: "HEALTH".to_string(),
        years_experience: 5,
        miles_from_metropolis: 20,
        salary,
    }
}

/// Assert two floats are within `tol` of each other
pub fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "expected {} ± {}, got {}",
        expected,
        tol,
        actual
    );
}
