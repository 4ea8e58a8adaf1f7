//! Pipeline module - joins, analyzes and cleans the salary data

pub mod categorical;
pub mod clean;
pub mod correlation;
pub mod error;
pub mod join;
pub mod loader;
pub mod record;
pub mod stats;
pub mod writer;

pub use categorical::*;
pub use clean::*;
pub use correlation::*;
pub use error::*;
pub use join::*;
pub use loader::*;
pub use record::{company_id, format_salary, SalaryRecord, COMPANY_PREFIX, FEATURE_COLUMNS, OUTPUT_COLUMNS};
pub use stats::*;
pub use writer::*;
