//! Output system for sumbench
//!
//! Result lines go to stdout in a fixed shape so they can be diffed or parsed.
//! Everything decorative (headers, warnings, check reports) is styled with
//! `console` and respects `--quiet`.

use console::style;

use crate::bench::{BenchmarkResult, CheckOutcome};
use crate::config::OutputFormat;

/// Output handler for consistent CLI formatting
#[derive(Debug, Clone, Copy)]
pub struct Output {
    format: OutputFormat,
    quiet: bool,
}

impl Output {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }

    /// Render one result in the configured format
    pub fn render_result(&self, result: &BenchmarkResult) -> String {
        match self.format {
            OutputFormat::Text => format!(
                "{label} result: {value}\n{label} time: {ms}ms",
                label = result.label,
                value = result.value,
                ms = result.elapsed_ms
            ),
            // BenchmarkResult only holds a string and integers, serialization cannot fail
            OutputFormat::Json => serde_json::to_string(result).unwrap_or_default(),
        }
    }

    /// Print a benchmark result; never suppressed by quiet mode
    pub fn result(&self, result: &BenchmarkResult) {
        println!("{}", self.render_result(result));
    }

    /// Print a header/title to stderr
    pub fn header(&self, title: &str) {
        if !self.quiet {
            eprintln!("{}", style(title).bold().underlined());
        }
    }

    /// Print a warning message
    pub fn warning(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", style("⚠").yellow(), message);
        }
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        // Errors are always shown, even in quiet mode
        eprintln!("{} {}", style("✖").red(), message);
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("✔").green(), message);
        }
    }

    /// Print one check outcome; failures are shown even in quiet mode
    pub fn check_outcome(&self, outcome: &CheckOutcome) {
        let scenario = format!("n={} N={}", outcome.params.multiplier, outcome.params.limit);
        if outcome.passed() {
            if !self.quiet {
                println!(
                    "{} {:<26} {}",
                    style("✓").green().bold(),
                    outcome.label,
                    style(scenario).dim()
                );
            }
            return;
        }

        let detail = match (&outcome.actual, &outcome.repeated) {
            (Err(e), _) | (Ok(_), Err(e)) => style(e.to_string()).red(),
            (Ok(first), Ok(second)) if first != second => {
                style(format!("not repeatable: {first} then {second}")).red()
            }
            (Ok(actual), Ok(_)) => {
                style(format!("expected {} got {}", outcome.expected, actual)).red()
            }
        };
        println!(
            "{} {:<26} {} {}",
            style("✗").red().bold(),
            outcome.label,
            style(scenario).dim(),
            detail
        );
    }
}
