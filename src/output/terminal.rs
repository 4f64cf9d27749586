//! Terminal renderer: a short colored summary block.

use colored::Colorize;

use crate::generate::GenerateOutcome;
use crate::output::SummaryRenderer;

/// Terminal output renderer.
pub struct TerminalRenderer;

impl SummaryRenderer for TerminalRenderer {
    fn render(&self, outcome: &GenerateOutcome) -> String {
        let mut output = String::new();

        let label = outcome.origin.to_string();
        let source = if outcome.used_fallback() {
            label.as_str().yellow().bold()
        } else {
            label.as_str().green().bold()
        };
        output.push_str(&format!("  {}  {}\n", "source:".cyan(), source));
        if let Some(reason) = outcome.origin.reason() {
            output.push_str(&format!("  {}  {}\n", "reason:".cyan(), reason.dimmed()));
        }

        match &outcome.write_error {
            None => {
                output.push_str(&format!("  {}    {}\n", "rows:".cyan(), outcome.rows));
                output.push_str(&format!(
                    "  {}  {}\n",
                    "report:".cyan(),
                    outcome.path.display().to_string().bold()
                ));
            }
            Some(err) => {
                output.push_str(&format!("  {} {}\n", "✖".red().bold(), err.as_str().red()));
            }
        }

        output
    }
}
