use crate::rule::Severity;

use super::result::{AnalysisResult, Finding};

/// Partition findings by severity, order each partition by (line,
/// column), and drop duplicates sharing (line, column, rule id).
///
/// Pure transformation: running it twice over the same findings yields
/// identical results, which keeps whole-analysis reruns idempotent.
#[must_use]
pub fn aggregate(name: &str, findings: Vec<Finding>) -> AnalysisResult {
    let mut result = AnalysisResult::new(name);

    for finding in findings {
        result.partition_mut(finding.severity).push(finding);
    }

    for severity in Severity::ALL {
        let partition = result.partition_mut(severity);
        partition.sort_by(|a, b| {
            (a.line, a.column, a.rule.as_str()).cmp(&(b.line, b.column, b.rule.as_str()))
        });
        partition.dedup_by(|a, b| a.line == b.line && a.column == b.column && a.rule == b.rule);
    }

    result
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod tests;
