//! Report generation: resolve users, then write the CSV.
//!
//! Neither step can abort the run. A failed fetch switches to the
//! fallback dataset; a failed write is recorded in the outcome and
//! reported, never propagated.

use std::path::{Path, PathBuf};

use colored::Colorize;
use serde::Serialize;

use crate::fetch::{DataOrigin, Fetcher};
use crate::report;

/// What a generation run did.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateOutcome {
    /// Flattened into `source` and, for fallback, `reason`.
    #[serde(flatten)]
    pub origin: DataOrigin,
    /// Rows written (0 when the write failed).
    pub rows: usize,
    pub path: PathBuf,
    pub write_error: Option<String>,
}

impl GenerateOutcome {
    pub fn used_fallback(&self) -> bool {
        self.origin.is_fallback()
    }

    pub fn written(&self) -> bool {
        self.write_error.is_none()
    }
}

/// Run one generation: a single live attempt, then the CSV write.
///
/// Progress lines go to stdout unless `quiet` is set.
pub async fn generate(fetcher: &Fetcher, output: &Path, quiet: bool) -> GenerateOutcome {
    let say = |line: String| {
        if !quiet {
            println!("{line}");
        }
    };

    say(format!("Attempting live fetch from {}...", fetcher.location()));
    let resolved = fetcher.resolve().await;

    match resolved.origin.reason() {
        None => say(format!("{}", "Success! Using live data.".green())),
        Some(reason) => {
            say(format!("{} ({reason})", "Live fetch failed or blocked".yellow()));
            say("Switching to fallback data to ensure report generation...".to_string());
        }
    }

    let (rows, write_error) = match report::write_report(output, &resolved.users) {
        Ok(rows) => {
            say(format!(
                "{} File '{}' generated successfully.",
                "Done!".green().bold(),
                output.display()
            ));
            (rows, None)
        }
        Err(e) => {
            tracing::warn!(error = %e, path = %output.display(), "report write failed");
            say(format!("{} {e}", "Failed to write CSV:".red().bold()));
            (0, Some(e.to_string()))
        }
    };

    GenerateOutcome {
        origin: resolved.origin,
        rows,
        path: output.to_path_buf(),
        write_error,
    }
}
