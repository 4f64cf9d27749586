//! CLI command definitions and argument parsing.
//!
//! Uses clap derive macros for ergonomic argument definitions.

pub mod args;

use userdata_report::constants::{APP_NAME, VERSION};

/// Print the tool banner to stderr.
pub fn print_banner() {
    use colored::Colorize;
    use std::io::Write;
    let stderr = std::io::stderr();
    let mut handle = stderr.lock();
    let _ = writeln!(handle);
    let _ = writeln!(
        handle,
        "  {} {}",
        APP_NAME.bold(),
        format!("v{VERSION} · Reqres user data report").dimmed(),
    );
    let _ = writeln!(handle);
    let _ = handle.flush();
}
