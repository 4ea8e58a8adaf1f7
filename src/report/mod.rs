//! Report module - console summaries, JSON diagnostics and ARFF output

pub mod arff;
pub mod diagnostics_export;
pub mod summary;

pub use arff::*;
pub use diagnostics_export::*;
pub use summary::*;
