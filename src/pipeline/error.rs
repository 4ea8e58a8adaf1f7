//! Error types for the join-and-clean pipeline.
//!
//! Recoverable row problems (an unparsable salary, a job id with no salary)
//! are not errors: they are counted in the diagnostics and logged. Everything
//! here aborts the run.

use thiserror::Error;

/// Statistical preconditions that were not met.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StatsError {
    /// Mean and variance are undefined for an empty distribution.
    #[error("cannot summarize an empty distribution")]
    EmptyInput,

    /// Paired sequences must be index-aligned.
    #[error("paired sequences differ in length: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    /// Correlation needs at least two points and non-zero variance on both sides.
    #[error("insufficient data for correlation: {reason}")]
    InsufficientData { reason: String },
}

/// A mandatory field in a feature row could not be read.
///
/// Line numbers are 1-based and count the header line.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InputError {
    /// The row has fewer fields than the feature layout requires.
    #[error("line {line}: missing field '{column}'")]
    MissingField { line: usize, column: &'static str },

    /// A numeric column holds something that is not a non-negative integer.
    #[error("line {line}: invalid value '{value}' for numeric field '{column}'")]
    InvalidNumber {
        line: usize,
        column: &'static str,
        value: String,
    },
}

/// Failure of a whole cleaning run.
#[derive(Debug, Error)]
pub enum CleanError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("salary statistics could not be computed: {0}")]
    Statistics(#[from] StatsError),
}
