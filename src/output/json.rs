//! JSON output renderer.
//!
//! Outputs `{"source", "reason", "rows", "path", "write_error"}`; `reason`
//! only appears when the fallback dataset was used.

use crate::generate::GenerateOutcome;
use crate::output::SummaryRenderer;

/// JSON output renderer.
pub struct JsonRenderer;

impl SummaryRenderer for JsonRenderer {
    fn render(&self, outcome: &GenerateOutcome) -> String {
        serde_json::to_string_pretty(outcome).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use crate::fetch::DataOrigin;

    #[test]
    fn render_fallback_outcome() {
        let outcome = GenerateOutcome {
            origin: DataOrigin::Fallback {
                reason: "server returned HTTP 403".into(),
            },
            rows: 6,
            path: PathBuf::from("user_data_report.csv"),
            write_error: None,
        };

        let parsed: serde_json::Value =
            serde_json::from_str(&JsonRenderer.render(&outcome)).unwrap();
        assert_eq!(parsed["source"], "fallback");
        assert_eq!(parsed["reason"], "server returned HTTP 403");
        assert_eq!(parsed["rows"], 6);
        assert_eq!(parsed["path"], "user_data_report.csv");
        assert!(parsed["write_error"].is_null());
    }

    #[test]
    fn live_outcome_has_no_reason_key() {
        let outcome = GenerateOutcome {
            origin: DataOrigin::Live,
            rows: 2,
            path: PathBuf::from("user_data_report.csv"),
            write_error: None,
        };

        let parsed: serde_json::Value =
            serde_json::from_str(&JsonRenderer.render(&outcome)).unwrap();
        assert_eq!(parsed["source"], "live");
        assert!(parsed.get("reason").is_none());
        assert_eq!(parsed["rows"], 2);
    }
}
