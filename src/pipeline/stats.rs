//! Descriptive statistics over salary distributions

use serde::Serialize;

use super::error::StatsError;

/// Number of standard deviations from the mean beyond which a salary is an outlier
pub const OUTLIER_SIGMA: f64 = 2.0;

/// Summary of a numeric distribution.
///
/// `std_dev` is the population standard deviation (divisor N). The sigma counts
/// are diagnostics only and use inclusive bounds (`|v - mean| >= k * std_dev`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionSummary {
    pub count: usize,
    pub max: f64,
    pub min: f64,
    pub mean: f64,
    pub std_dev: f64,
    pub beyond_two_sigma: usize,
    pub beyond_three_sigma: usize,
}

impl DistributionSummary {
    /// Percentage of values at least two standard deviations from the mean
    pub fn two_sigma_pct(&self) -> f64 {
        self.beyond_two_sigma as f64 / self.count as f64 * 100.0
    }

    /// Percentage of values at least three standard deviations from the mean
    pub fn three_sigma_pct(&self) -> f64 {
        self.beyond_three_sigma as f64 / self.count as f64 * 100.0
    }

    /// Bounds at `sigma` standard deviations around the mean
    pub fn threshold(&self, sigma: f64) -> OutlierThreshold {
        OutlierThreshold {
            lower: self.mean - sigma * self.std_dev,
            upper: self.mean + sigma * self.std_dev,
        }
    }
}

/// Acceptance window for salaries, derived from a [`DistributionSummary`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OutlierThreshold {
    pub lower: f64,
    pub upper: f64,
}

impl OutlierThreshold {
    /// Values exactly on a bound are kept.
    pub fn excludes(&self, value: f64) -> bool {
        value > self.upper || value < self.lower
    }
}

/// Compute max, min, mean and population standard deviation of `values`.
pub fn summarize(values: &[f64]) -> Result<DistributionSummary, StatsError> {
    if values.is_empty() {
        return Err(StatsError::EmptyInput);
    }

    let count = values.len();
    let n = count as f64;

    let (min, max) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });

    // Two passes: mean first, then squared deviations
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    let std_dev = variance.sqrt();

    let beyond = |k: f64| {
        values
            .iter()
            .filter(|&&v| v >= mean + k * std_dev || v <= mean - k * std_dev)
            .count()
    };

    Ok(DistributionSummary {
        count,
        max,
        min,
        mean,
        std_dev,
        beyond_two_sigma: beyond(2.0),
        beyond_three_sigma: beyond(3.0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_basic() {
        let s = summarize(&[10.0, 20.0, 30.0]).unwrap();
        assert_eq!(s.count, 3);
        assert_eq!(s.max, 30.0);
        assert_eq!(s.min, 10.0);
        assert!((s.mean - 20.0).abs() < 1e-12);
        assert!((s.std_dev - (200.0f64 / 3.0).sqrt()).abs() < 1e-12);
        assert!((s.std_dev - 8.165).abs() < 1e-3);
    }

    #[test]
    fn test_summarize_empty_fails() {
        assert_eq!(summarize(&[]), Err(StatsError::EmptyInput));
    }

    #[test]
    fn test_single_value_has_zero_spread() {
        let s = summarize(&[42.0]).unwrap();
        assert_eq!(s.mean, 42.0);
        assert_eq!(s.std_dev, 0.0);
        // With zero spread every value sits on both bounds
        assert_eq!(s.beyond_two_sigma, 1);
    }

    #[test]
    fn test_sigma_counts_are_inclusive() {
        // mean = 160, std_dev = 120, so 400 sits exactly on mean + 2σ
        let s = summarize(&[100.0, 100.0, 100.0, 100.0, 400.0]).unwrap();
        assert_eq!(s.mean, 160.0);
        assert_eq!(s.std_dev, 120.0);
        assert_eq!(s.beyond_two_sigma, 1);
        assert_eq!(s.beyond_three_sigma, 0);
        assert!((s.two_sigma_pct() - 20.0).abs() < 1e-12);
        assert_eq!(s.three_sigma_pct(), 0.0);
    }

    #[test]
    fn test_threshold_keeps_boundary() {
        let s = summarize(&[100.0, 100.0, 100.0, 100.0, 400.0]).unwrap();
        let t = s.threshold(OUTLIER_SIGMA);
        assert_eq!(t.upper, 400.0);
        assert_eq!(t.lower, -80.0);
        assert!(!t.excludes(400.0));
        assert!(t.excludes(401.0));
        assert!(!t.excludes(-80.0));
        assert!(t.excludes(-80.5));
    }
}
