//! Terminal output for the listpage CLI.
//!
//! Status messages go to stderr so stdout only carries command output.

use std::fmt;

use clap::ValueEnum;
use console::style;
use serde::Serialize;

use listpage_core::builder::SummaryRow;
use listpage_core::filter::PresetFilter;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Pretty,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Pretty => write!(f, "pretty"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

pub fn header(message: &str) {
    eprintln!("{}", style(message).bold().cyan());
}

pub fn success(message: &str) {
    eprintln!("{} {}", style("✓").green().bold(), message);
}

pub fn info(message: &str) {
    eprintln!("{}", style(message).dim());
}

pub fn warning(message: &str) {
    eprintln!("{} {}", style("!").yellow().bold(), style(message).yellow());
}

pub fn error(message: &str) {
    eprintln!("{} {}", style("✗").red().bold(), style(message).red());
}

pub fn error_with_details(message: &str, details: &str) {
    error(message);
    eprintln!("  {}", style(details).dim());
}

pub fn debug(message: &str) {
    log::debug!("{}", message);
}

pub fn json_output<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => error_with_details("Failed to serialize output", &e.to_string()),
    }
}

/// Prints summary rows as an aligned table.
pub fn pretty_output_summary(title: &str, values_header: &str, rows: &[SummaryRow]) {
    println!("{}", style(title).bold());
    if rows.is_empty() {
        println!("  {}", style("No filters configured").dim());
        return;
    }

    let width = rows
        .iter()
        .map(|row| row.facet_label.chars().count())
        .max()
        .unwrap_or(0)
        .max("Filter".len());
    println!(
        "  {:<width$}  {}",
        style("Filter").underlined(),
        style(values_header).underlined(),
        width = width
    );
    for row in rows {
        println!("  {:<width$}  {}", row.facet_label, row.values_label, width = width);
    }
}

pub fn pretty_output_filters(filters: &[PresetFilter]) {
    if filters.is_empty() {
        println!("{}", style("No filters").dim());
        return;
    }

    for filter in filters {
        let values = if filter.is_unsatisfiable() {
            style("(matches nothing)".to_string()).red().to_string()
        } else {
            filter.values().join(", ")
        };
        println!(
            "{} {} {}",
            style(filter.facet_id()).bold(),
            style(filter.operator().label()).cyan(),
            values
        );
    }
}

pub fn pretty_output_results<T: fmt::Display>(results: &[T]) {
    for result in results {
        println!("{}", result);
    }
}
