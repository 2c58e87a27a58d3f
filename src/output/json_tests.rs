use serde_json::Value;

use super::*;
use crate::engine::{AnalysisResult, BatchSummary, Finding};
use crate::rule::Severity;

fn sample_result() -> AnalysisResult {
    let mut result = AnalysisResult::new("src/app.js");
    result.errors.push(Finding {
        rule: "strict-equality".to_string(),
        severity: Severity::Error,
        message: "loose equality".to_string(),
        line: 4,
        column: 7,
        matched: "a == b".to_string(),
        suggestion: Some("a === b".to_string()),
    });
    result.metrics.insert("branch_density".to_string(), 3);
    result
}

#[test]
fn result_serializes_to_valid_json() {
    let output = JsonFormatter.format_result(&sample_result()).unwrap();
    let value: Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["input"], "src/app.js");
    assert_eq!(value["passed"], false);
    assert_eq!(value["findings"]["errors"].as_array().unwrap().len(), 1);
    assert_eq!(value["metrics"]["branch_density"], 3);
}

#[test]
fn finding_fields_roundtrip() {
    let output = JsonFormatter.format_result(&sample_result()).unwrap();
    let value: Value = serde_json::from_str(&output).unwrap();
    let finding = &value["findings"]["errors"][0];

    assert_eq!(finding["rule"], "strict-equality");
    assert_eq!(finding["severity"], "error");
    assert_eq!(finding["line"], 4);
    assert_eq!(finding["column"], 7);
    assert_eq!(finding["suggestion"], "a === b");
}

#[test]
fn missing_suggestion_is_omitted() {
    let mut result = AnalysisResult::new("x.js");
    result.infos.push(Finding {
        rule: "todo-comment".to_string(),
        severity: Severity::Info,
        message: "marker".to_string(),
        line: 1,
        column: 1,
        matched: "TODO".to_string(),
        suggestion: None,
    });

    let output = JsonFormatter.format_result(&result).unwrap();
    let value: Value = serde_json::from_str(&output).unwrap();

    assert!(value["findings"]["info"][0].get("suggestion").is_none());
}

#[test]
fn passed_result_serializes_true() {
    let output = JsonFormatter
        .format_result(&AnalysisResult::new("clean.js"))
        .unwrap();
    let value: Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["passed"], true);
}

#[test]
fn summary_serializes_totals() {
    let mut summary = BatchSummary::default();
    summary.record(&AnalysisResult::new("a.js"));
    summary.record(&sample_result());

    let output = JsonFormatter.format_summary(&summary).unwrap();
    let value: Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["passed"], false);
    assert_eq!(value["totals"]["analyzed"], 2);
    assert_eq!(value["totals"]["errors"], 1);
    assert_eq!(value["inputs"].as_array().unwrap().len(), 2);
    assert_eq!(value["inputs"][0]["passed"], true);
    assert_eq!(value["inputs"][1]["passed"], false);
}
