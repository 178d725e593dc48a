//! Output formatting, progress bars and logging setup for the CLI

use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use crate::Result;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `-v` flags raise the level from
/// `warn` to `info`, `debug` and `trace`.
pub fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A second install (e.g. from tests) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Create a progress bar counting analyzed states
pub fn create_state_progress(total_states: u64) -> Result<ProgressBar> {
    let pb = ProgressBar::new(total_states);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} states ({msg})")?
            .progress_chars("=>-"),
    );
    Ok(pb)
}

/// Create a spinner for analysis tasks
pub fn create_spinner(message: &str) -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")?,
    );
    pb.set_message(message.to_string());
    Ok(pb)
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Format a number with thousands separators
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Describe a value from X's perspective
pub fn describe_value(value: i32) -> &'static str {
    match value {
        v if v > 0 => "X wins",
        v if v < 0 => "O wins",
        _ => "draw",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(958), "958");
        assert_eq!(format_number(5478), "5,478");
        assert_eq!(format_number(549946), "549,946");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn test_progress_templates_are_valid() {
        let pb = create_state_progress(10).unwrap();
        assert_eq!(pb.length(), Some(10));
        pb.finish_and_clear();

        let spinner = create_spinner("working").unwrap();
        assert_eq!(spinner.message(), "working");
        spinner.finish_and_clear();
    }

    #[test]
    fn test_describe_value() {
        assert_eq!(describe_value(1), "X wins");
        assert_eq!(describe_value(-1), "O wins");
        assert_eq!(describe_value(0), "draw");
    }
}
