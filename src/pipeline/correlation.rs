//! Pearson correlation between a numeric feature and salary

use super::error::StatsError;

/// Compute the Pearson correlation coefficient of two index-aligned sequences.
///
/// Uses a single-pass Welford update for numerical stability. The result is
/// clamped to [-1, 1] to absorb rounding on perfectly linear inputs.
pub fn pearson_correlation(xs: &[f64], ys: &[f64]) -> Result<f64, StatsError> {
    if xs.len() != ys.len() {
        return Err(StatsError::LengthMismatch {
            left: xs.len(),
            right: ys.len(),
        });
    }

    let n = xs.len();
    if n < 2 {
        return Err(StatsError::InsufficientData {
            reason: format!("need at least 2 paired observations, got {}", n),
        });
    }

    let mut count = 0.0;
    let mut mean_x = 0.0;
    let mut mean_y = 0.0;
    let mut m2_x = 0.0;
    let mut m2_y = 0.0;
    let mut co_moment = 0.0;

    for (&x, &y) in xs.iter().zip(ys.iter()) {
        count += 1.0;
        let dx = x - mean_x;
        let dy = y - mean_y;
        mean_x += dx / count;
        mean_y += dy / count;
        m2_x += dx * (x - mean_x);
        m2_y += dy * (y - mean_y);
        co_moment += dx * (y - mean_y);
    }

    if m2_x == 0.0 || m2_y == 0.0 {
        return Err(StatsError::InsufficientData {
            reason: "one of the sequences has zero variance".to_string(),
        });
    }

    // The 1/N factors of covariance and both variances cancel out
    let r = co_moment / (m2_x * m2_y).sqrt();
    Ok(r.clamp(-1.0, 1.0))
}

/// Widen integer feature values for correlation against salary
pub fn as_f64(values: &[u32]) -> Vec<f64> {
    values.iter().map(|&v| f64::from(v)).collect()
}
