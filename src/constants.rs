//! App-wide constants.
//!
//! Centralises the tool name, config paths, environment variable names,
//! and URLs so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "userdata-report";

/// Crate version, baked in at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Local config filename (e.g. `.userdata-report.toml` in the working directory).
pub const CONFIG_FILENAME: &str = ".userdata-report.toml";

/// Directory name under `~/.config/` for global config.
pub const CONFIG_DIR: &str = "userdata-report";

/// Reqres user listing endpoint (page 2 by default).
pub const DEFAULT_USERS_URL: &str = "https://reqres.in/api/users?page=2";

/// Base path of the user listing, without query.
pub const USERS_BASE_PATH: &str = "/api/users";

/// Default CSV output file.
pub const DEFAULT_OUTPUT_FILE: &str = "user_data_report.csv";

/// Per-request timeout for the live fetch, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Browser-like User-Agent; Reqres blocks obvious bot agents.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36";

/// CSV header row.
pub const CSV_HEADER: [&str; 3] = ["First Name", "Last Name", "Email"];

// ── Environment variable names ──────────────────────────────────────

pub const ENV_URL: &str = "USERDATA_REPORT_URL";
pub const ENV_TIMEOUT: &str = "USERDATA_REPORT_TIMEOUT";
pub const ENV_OUTPUT: &str = "USERDATA_REPORT_OUTPUT";
pub const ENV_USER_AGENT: &str = "USERDATA_REPORT_USER_AGENT";
