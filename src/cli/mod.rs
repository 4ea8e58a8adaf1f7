//! CLI module - argument parsing and subcommand runners

mod args;
pub mod clean;
pub mod convert;

pub use args::{Cli, Commands};
pub use clean::{run_clean, CleanPaths};
pub use convert::{run_convert, validate_convert_paths};
