use indexmap::IndexMap;
use serde::Serialize;

use crate::rule::{IO_RULE_ID, Severity};

/// One located occurrence of a rule's pattern in an input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub rule: String,
    pub severity: Severity,
    pub message: String,
    pub line: usize,
    pub column: usize,
    pub matched: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

/// Aggregated findings and metrics for one input.
///
/// `passed` is derived from the error partition being empty; there is no
/// separate flag to drift out of sync.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    pub name: String,
    pub errors: Vec<Finding>,
    pub warnings: Vec<Finding>,
    pub infos: Vec<Finding>,
    pub metrics: IndexMap<String, usize>,
}

impl AnalysisResult {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            errors: Vec::new(),
            warnings: Vec::new(),
            infos: Vec::new(),
            metrics: IndexMap::new(),
        }
    }

    /// Result for an input that could not be read: a single
    /// error-severity finding carrying the reserved `io` rule id.
    #[must_use]
    pub fn io_error(name: impl Into<String>, error: &std::io::Error) -> Self {
        let mut result = Self::new(name);
        result.errors.push(Finding {
            rule: IO_RULE_ID.to_string(),
            severity: Severity::Error,
            message: format!("failed to read input: {error}"),
            line: 1,
            column: 1,
            matched: String::new(),
            suggestion: None,
        });
        result
    }

    #[must_use]
    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn count(&self, severity: Severity) -> usize {
        match severity {
            Severity::Error => self.errors.len(),
            Severity::Warning => self.warnings.len(),
            Severity::Info => self.infos.len(),
        }
    }

    #[must_use]
    pub fn total_findings(&self) -> usize {
        self.errors.len() + self.warnings.len() + self.infos.len()
    }

    /// All findings in report order: errors, then warnings, then infos.
    pub fn findings(&self) -> impl Iterator<Item = &Finding> {
        self.errors
            .iter()
            .chain(self.warnings.iter())
            .chain(self.infos.iter())
    }

    pub(crate) fn partition_mut(&mut self, severity: Severity) -> &mut Vec<Finding> {
        match severity {
            Severity::Error => &mut self.errors,
            Severity::Warning => &mut self.warnings,
            Severity::Info => &mut self.infos,
        }
    }
}

/// Pass/fail outcome for one input within a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputOutcome {
    pub name: String,
    pub passed: bool,
}

/// Running totals across a batch run. Totals are accumulated from each
/// `AnalysisResult` exactly once, including io-error results.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchSummary {
    pub inputs: Vec<InputOutcome>,
    pub errors: usize,
    pub warnings: usize,
    pub infos: usize,
}

impl BatchSummary {
    pub fn record(&mut self, result: &AnalysisResult) {
        self.inputs.push(InputOutcome {
            name: result.name.clone(),
            passed: result.passed(),
        });
        self.errors += result.errors.len();
        self.warnings += result.warnings.len();
        self.infos += result.infos.len();
    }

    #[must_use]
    pub fn passed(&self) -> bool {
        self.inputs.iter().all(|input| input.passed)
    }

    #[must_use]
    pub fn analyzed(&self) -> usize {
        self.inputs.len()
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.inputs.iter().filter(|input| !input.passed).count()
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
