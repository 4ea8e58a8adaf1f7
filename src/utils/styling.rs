//! Terminal styling utilities

use console::{style, Emoji};
use std::path::Path;

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", ">> ");
pub static FOLDER: Emoji<'_, '_> = Emoji("📂 ", "");
pub static MONEY: Emoji<'_, '_> = Emoji("💰 ", "");
pub static SAVE: Emoji<'_, '_> = Emoji("💾 ", "");
pub static SCISSORS: Emoji<'_, '_> = Emoji("✂️  ", "");

/// Print the application banner
pub fn print_banner(version: &str) {
    println!();
    println!(
        "    {} {}",
        style("salprep").cyan().bold(),
        style(format!("v{}", version)).dim()
    );
    println!(
        "    {}",
        style("Join, clean and export salary data for Weka").dim()
    );
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Paths and options of a cleaning run
pub struct RunCard<'a> {
    pub features: &'a Path,
    pub salaries: &'a Path,
    pub temp_csv: &'a Path,
    pub arff: &'a Path,
    pub remove_outliers: bool,
}

/// Print configuration card
pub fn print_config(card: &RunCard) {
    let box_width = 60;
    let line = "─".repeat(box_width - 2);

    println!("    ┌{}┐", line);
    println!("    │ {:<width$}│", style("⚙️  Configuration").cyan().bold(), width = box_width - 3);
    println!("    ├{}┤", line);
    println!("    │  {}Features: {:<43}│", FOLDER, truncate_path(card.features, 42));
    println!("    │  {}Salaries: {:<43}│", MONEY, truncate_path(card.salaries, 42));
    println!("    │  {}Cleaned:  {:<43}│", SAVE, truncate_path(card.temp_csv, 42));
    println!("    │  {}ARFF:     {:<43}│", SAVE, truncate_path(card.arff, 42));
    println!("    ├{}┤", line);
    println!(
        "    │  {}Remove outliers (2σ): {:<31}│",
        SCISSORS,
        style(if card.remove_outliers { "yes" } else { "no" }).yellow()
    );
    println!("    └{}┘", line);
    println!();
}

/// Print a step header with styling
pub fn print_step_header(step_num: u8, title: &str) {
    println!();
    println!(
        "    {} {} {}",
        style(format!("STEP {}", step_num)).cyan().bold(),
        style("│").dim(),
        style(title).white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", INFO, message);
}

/// Print the final completion message
pub fn print_completion(message: &str) {
    println!();
    println!("    {} {}", ROCKET, style(message).green().bold());
    println!();
}

/// Print a styled count message
pub fn print_count(description: &str, count: usize, detail: Option<&str>) {
    if let Some(info) = detail {
        println!(
            "      Found {} {} {}",
            style(count).yellow().bold(),
            description,
            style(info).dim()
        );
    } else {
        println!("      Found {} {}", style(count).yellow().bold(), description);
    }
}

// Helper functions

fn truncate_path(path: &Path, max_len: usize) -> String {
    let path_str = path.display().to_string();
    truncate_string(&path_str, max_len)
}

fn truncate_string(s: &str, max_len: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= max_len {
        s.to_string()
    } else {
        let tail: String = chars[chars.len() - (max_len - 3)..].iter().collect();
        format!("...{}", tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string_keeps_short_values() {
        assert_eq!(truncate_string("data.csv", 10), "data.csv");
    }

    #[test]
    fn test_truncate_string_keeps_tail() {
        assert_eq!(truncate_string("/very/long/path/train.csv", 12), "...train.csv");
    }
}
