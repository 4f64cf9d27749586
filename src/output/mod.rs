//! Run summary renderers: terminal and JSON.

pub mod json;
pub mod terminal;

use crate::generate::GenerateOutcome;

/// Trait for rendering a generation summary to an output format.
pub trait SummaryRenderer {
    /// Render the outcome to a string.
    fn render(&self, outcome: &GenerateOutcome) -> String;
}
