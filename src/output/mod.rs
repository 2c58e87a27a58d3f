mod json;
mod text;

pub use json::JsonFormatter;
pub use text::{ColorMode, TextFormatter};

use crate::engine::{AnalysisResult, BatchSummary};
use crate::error::Result;

/// Trait for rendering analysis results and batch summaries.
pub trait ReportFormatter {
    /// Render one input's report.
    ///
    /// # Errors
    /// Returns an error if formatting fails.
    fn format_result(&self, result: &AnalysisResult) -> Result<String>;

    /// Render the cross-input summary for a batch run.
    ///
    /// # Errors
    /// Returns an error if formatting fails.
    fn format_summary(&self, summary: &BatchSummary) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
