//! Spinner helpers using indicatif
//!
//! Spinners draw to stderr and are hidden when it is not a terminal. Their
//! final message is a progress line of the run, so in that case it is printed
//! to stdout instead.

use indicatif::{ProgressBar, ProgressStyle};

/// Create a spinner for indeterminate progress
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("    {spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

/// Finish a spinner with a success message
pub fn finish_with_success(pb: &ProgressBar, message: &str) {
    finish(pb, format!("✅ {}", message));
}

/// Finish a spinner with a warning message
pub fn finish_with_warning(pb: &ProgressBar, message: &str) {
    finish(pb, format!("⚠️  {}", message));
}

fn finish(pb: &ProgressBar, line: String) {
    if pb.is_hidden() {
        pb.finish_and_clear();
        println!("    {}", line);
    } else {
        pb.finish_with_message(line);
    }
}
