//! Job id to salary index used to join the features file with the salaries file

use std::collections::HashMap;

use tracing::warn;

/// Salary for every job id of the salaries file.
///
/// Rows whose salary cannot be parsed are skipped and counted in
/// [`KeyValueIndex::malformed_rows`]. A repeated job id keeps the last salary.
#[derive(Debug, Default, Clone)]
pub struct KeyValueIndex {
    values: HashMap<String, f64>,
    malformed_rows: usize,
}

impl KeyValueIndex {
    /// Build the index from `(jobId, salary, ..)` rows.
    ///
    /// # Arguments
    /// * `rows` - Raw rows in file order
    /// * `skip_first` - Whether the first row is a header
    pub fn build<I, R, S>(rows: I, skip_first: bool) -> Self
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let mut index = Self::default();

        for (i, row) in rows.into_iter().enumerate() {
            if skip_first && i == 0 {
                continue;
            }

            let fields = row.as_ref();
            let key = fields.first().map(|k| k.as_ref());
            let raw = fields.get(1).map(|v| v.as_ref());

            match (key, raw.and_then(parse_salary)) {
                (Some(key), Some(salary)) => {
                    index.values.insert(key.to_string(), salary);
                }
                _ => {
                    warn!(
                        line = i + 1,
                        key = key.unwrap_or(""),
                        value = raw.unwrap_or(""),
                        "skipping salary row with unparsable value"
                    );
                    index.malformed_rows += 1;
                }
            }
        }

        index
    }

    pub fn lookup(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Rows dropped while building because their salary was not a number
    pub fn malformed_rows(&self) -> usize {
        self.malformed_rows
    }
}

fn parse_salary(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_is_skipped() {
        let rows = vec![vec!["jobId", "salary"], vec!["JOB1", "130"]];
        let index = KeyValueIndex::build(rows, true);
        assert_eq!(index.len(), 1);
        assert_eq!(index.lookup("JOB1"), Some(130.0));
        assert_eq!(index.lookup("jobId"), None);
    }

    #[test]
    fn test_without_header_first_row_is_data() {
        let rows = vec![vec!["JOB1", "130"], vec!["JOB2", "101"]];
        let index = KeyValueIndex::build(rows, false);
        assert_eq!(index.len(), 2);
        assert_eq!(index.lookup("JOB1"), Some(130.0));
    }

    #[test]
    fn test_parse_salary_rejects_non_finite() {
        assert_eq!(parse_salary(" 95 "), Some(95.0));
        assert_eq!(parse_salary("1e5"), Some(100000.0));
        assert_eq!(parse_salary("NaN"), None);
        assert_eq!(parse_salary("inf"), None);
        assert_eq!(parse_salary(""), None);
    }
}
