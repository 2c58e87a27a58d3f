use serde_json::json;

use crate::engine::{AnalysisResult, BatchSummary};
use crate::error::Result;

use super::ReportFormatter;

pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format_result(&self, result: &AnalysisResult) -> Result<String> {
        let value = json!({
            "input": result.name,
            "passed": result.passed(),
            "findings": {
                "errors": result.errors,
                "warnings": result.warnings,
                "info": result.infos,
            },
            "metrics": result.metrics,
        });
        Ok(format!("{}\n", serde_json::to_string_pretty(&value)?))
    }

    fn format_summary(&self, summary: &BatchSummary) -> Result<String> {
        let value = json!({
            "passed": summary.passed(),
            "inputs": summary.inputs,
            "totals": {
                "analyzed": summary.analyzed(),
                "failed": summary.failed(),
                "errors": summary.errors,
                "warnings": summary.warnings,
                "info": summary.infos,
            },
        });
        Ok(format!("{}\n", serde_json::to_string_pretty(&value)?))
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
