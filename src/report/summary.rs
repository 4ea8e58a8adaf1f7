//! Cleaning summary report generation

use std::collections::BTreeMap;

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, CellAlignment, Color, Table};
use console::style;

use crate::pipeline::{Category, CleanDiagnostics, DistributionSummary};

/// Categories shown per value in the console report.
///
/// Company ids are left out: there are too many of them to be readable.
pub const DISPLAYED_CATEGORIES: [Category; 4] = [
    Category::JobType,
    Category::Degree,
    Category::Major,
    Category::Industry,
];

/// Console rendering of a cleaning run
#[derive(Debug)]
pub struct CleaningSummary<'a> {
    pub salary_index_size: usize,
    pub malformed_salary_rows: usize,
    pub remove_outliers: bool,
    pub diagnostics: &'a CleanDiagnostics,
}

impl<'a> CleaningSummary<'a> {
    pub fn new(
        salary_index_size: usize,
        malformed_salary_rows: usize,
        remove_outliers: bool,
        diagnostics: &'a CleanDiagnostics,
    ) -> Self {
        Self {
            salary_index_size,
            malformed_salary_rows,
            remove_outliers,
            diagnostics,
        }
    }

    /// Print per-category salary statistics
    pub fn display_categories(&self) {
        for category in DISPLAYED_CATEGORIES {
            let Some(values) = self.diagnostics.categories.get(&category) else {
                continue;
            };
            println!();
            println!(
                "    {} {}",
                style("✧").cyan(),
                style(format!("Salary by {}", category)).white().bold()
            );
            print_indented(&category_table(values));
        }
    }

    /// Print the global salary distribution and feature correlations
    pub fn display_salary(&self) {
        let d = self.diagnostics;
        let s = &d.salary;

        let mut table = metric_table();
        add_metric(&mut table, "Max salary", format_value(s.max));
        add_metric(&mut table, "Min salary", format_value(s.min));
        add_metric(&mut table, "Mean salary", format_value(s.mean));
        add_metric(&mut table, "Std dev", format_value(s.std_dev));
        add_metric(
            &mut table,
            "2σ away",
            format!("{} ({:.2}%)", s.beyond_two_sigma, s.two_sigma_pct()),
        );
        add_metric(
            &mut table,
            "3σ away",
            format!("{} ({:.2}%)", s.beyond_three_sigma, s.three_sigma_pct()),
        );
        add_metric(
            &mut table,
            "Corr(yearsExperience, salary)",
            format!("{:.4}", d.years_experience_correlation),
        );
        add_metric(
            &mut table,
            "Corr(milesFromMetropolis, salary)",
            format!("{:.4}", d.miles_from_metropolis_correlation),
        );

        println!();
        println!(
            "    {} {}",
            style("✧").cyan(),
            style("Salary Distribution").white().bold()
        );
        print_indented(&table);
    }

    /// Print row counts for the whole run
    pub fn display(&self) {
        let d = self.diagnostics;

        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("CLEANING SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        let mut table = metric_table();
        add_metric(&mut table, "💰 Salary map size", self.salary_index_size);
        add_counted(&mut table, "⚠️  Unparsable salaries", self.malformed_salary_rows);
        add_metric(&mut table, "📁 Feature rows", d.rows_read);
        add_counted(&mut table, "🔍 No salary", d.skipped_missing_salary);
        add_counted(&mut table, "🚫 Non-positive salary", d.skipped_non_positive_salary);
        add_metric(&mut table, "🔗 Joined records", d.records_joined);

        let outliers = if self.remove_outliers {
            Cell::new(d.outliers_removed).fg(if d.outliers_removed == 0 {
                Color::White
            } else {
                Color::Red
            })
        } else {
            Cell::new("kept").fg(Color::Yellow)
        };
        table.add_row(vec![Cell::new("🗑️  Outliers (2σ)"), outliers]);

        table.add_row(vec![
            Cell::new("✅ Records written"),
            Cell::new(d.records_written)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
        ]);

        print_indented(&table);
    }
}

fn metric_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Metric").add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
    ]);
    table
}

fn add_metric<T: ToString>(table: &mut Table, label: &str, value: T) {
    table.add_row(vec![
        Cell::new(label),
        Cell::new(value.to_string()).set_alignment(CellAlignment::Right),
    ]);
}

fn add_counted(table: &mut Table, label: &str, count: usize) {
    table.add_row(vec![
        Cell::new(label),
        Cell::new(count)
            .fg(if count == 0 { Color::White } else { Color::Yellow })
            .set_alignment(CellAlignment::Right),
    ]);
}

/// One row per category value
pub fn category_table(values: &BTreeMap<String, DistributionSummary>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(
        ["Value", "Count", "Min", "Max", "Mean", "Std dev", "2σ %", "3σ %"]
            .into_iter()
            .map(|h| Cell::new(h).add_attribute(Attribute::Bold)),
    );

    for (value, s) in values {
        table.add_row(vec![
            Cell::new(value),
            Cell::new(s.count),
            Cell::new(format_value(s.min)),
            Cell::new(format_value(s.max)),
            Cell::new(format_value(s.mean)),
            Cell::new(format_value(s.std_dev)),
            Cell::new(format!("{:.2}", s.two_sigma_pct())),
            Cell::new(format!("{:.2}", s.three_sigma_pct())),
        ]);
    }

    table
}

fn format_value(v: f64) -> String {
    format!("{:.2}", v)
}

fn print_indented(table: &Table) {
    for line in table.to_string().lines() {
        println!("    {}", line);
    }
}
