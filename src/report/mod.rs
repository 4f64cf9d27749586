//! CSV report writer.
//!
//! Writes `First Name,Last Name,Email` followed by one row per user.
//! Missing fields become empty cells.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use thiserror::Error;

use crate::constants::CSV_HEADER;
use crate::models::UserRecord;

/// Errors while writing a report.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("failed to create {path}: {source}")]
    Create {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to flush CSV: {0}")]
    Io(#[from] std::io::Error),
}

/// Write the report to any writer. Returns the number of data rows.
pub fn write_csv<W: Write>(writer: W, users: &[UserRecord]) -> Result<usize, ReportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(CSV_HEADER)?;
    for user in users {
        wtr.write_record(user.csv_cells())?;
    }
    wtr.flush()?;
    Ok(users.len())
}

/// Create (or truncate) `path` and write the report into it.
pub fn write_report(path: &Path, users: &[UserRecord]) -> Result<usize, ReportError> {
    let file = File::create(path).map_err(|e| ReportError::Create {
        path: path.display().to_string(),
        source: e,
    })?;
    let rows = write_csv(file, users)?;
    tracing::debug!(path = %path.display(), rows, "report written");
    Ok(rows)
}

/// Render the report to a `String`.
pub fn render_csv(users: &[UserRecord]) -> Result<String, ReportError> {
    let mut buf = Vec::new();
    write_csv(&mut buf, users)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
