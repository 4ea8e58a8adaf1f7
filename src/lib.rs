//! Salprep: Salary Data Preparation Library
//!
//! Joins job features with salaries, analyzes the salary distribution,
//! drops 2σ outliers and writes Weka ARFF training and test files.

pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;
