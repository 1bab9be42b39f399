//! Terminal output formatting for the ticket-tailor CLI.
//!
//! Provides consistent, colored status output using the [`console`] crate.
//! Everything here goes to stderr; stdout is reserved for the ticket or the
//! variable list so that it can be piped.

use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Print a bold cyan header with an underline separator.
pub fn print_header(text: &str) {
    eprintln!("\n{}", style(text).for_stderr().bold().cyan());
    eprintln!("{}", style("=".repeat(text.chars().count())).for_stderr().dim());
}

/// Print a success message prefixed with green `[OK]`.
pub fn print_success(text: &str) {
    eprintln!("{} {}", style("[OK]").for_stderr().green().bold(), text);
}

/// Print a warning message prefixed with yellow `[WARN]`.
pub fn print_warning(text: &str) {
    eprintln!("{} {}", style("[WARN]").for_stderr().yellow().bold(), text);
}

/// Print an unfilled item prefixed with red `[MISSING]`.
pub fn print_missing(text: &str) {
    eprintln!("{} {}", style("[MISSING]").for_stderr().red().bold(), text);
}

/// Print a progress step indicator like `[1/3] Analyzing template...`.
pub fn print_step(step: u32, total: u32, text: &str) {
    eprintln!("{} {}", style(format!("[{step}/{total}]")).for_stderr().dim(), text);
}

/// Print a key-value pair with dimmed key formatting.
pub fn print_key_value(key: &str, value: &str) {
    eprintln!("  {}: {}", style(key).for_stderr().dim(), value);
}

/// Start a spinner on stderr. Hidden automatically when stderr is not a terminal.
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}
