use super::*;
use crate::engine::{Finding, LineIndex};
use crate::rule::{RuleSet, RuleSpec, Severity, Suggestion};

fn single_rule(spec: RuleSpec) -> RuleSet {
    RuleSet::compile(vec![spec]).unwrap()
}

fn scan_with(buffer: &str, rules: &RuleSet) -> Vec<Finding> {
    let index = LineIndex::new(buffer);
    scan(buffer, rules, &index)
}

#[test]
fn match_carries_position_and_rule_metadata() {
    let rules = single_rule(RuleSpec::new("find-foo", "foo", "foo found", Severity::Warning));
    let findings = scan_with("bar\nbaz foo\n", &rules);

    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].rule, "find-foo");
    assert_eq!(findings[0].severity, Severity::Warning);
    assert_eq!(findings[0].message, "foo found");
    assert_eq!(findings[0].line, 2);
    assert_eq!(findings[0].column, 5);
    assert_eq!(findings[0].matched, "foo");
}

#[test]
fn global_search_finds_all_occurrences() {
    let rules = single_rule(RuleSpec::new("x", "ab", "m", Severity::Info));
    let findings = scan_with("ab ab ab", &rules);

    assert_eq!(findings.len(), 3);
}

#[test]
fn matches_are_non_overlapping() {
    let rules = single_rule(RuleSpec::new("x", "aa", "m", Severity::Info));
    let findings = scan_with("aaaa", &rules);

    assert_eq!(findings.len(), 2);
    assert_eq!(findings[0].column, 1);
    assert_eq!(findings[1].column, 3);
}

#[test]
fn empty_buffer_yields_no_findings() {
    let rules = single_rule(RuleSpec::new("x", "a", "m", Severity::Error));
    assert!(scan_with("", &rules).is_empty());
}

#[test]
fn exception_equal_to_match_suppresses() {
    let rules = single_rule(
        RuleSpec::new("x", "forbidden", "m", Severity::Error).with_exceptions(["forbidden"]),
    );

    assert!(scan_with("forbidden", &rules).is_empty());
}

#[test]
fn exception_containing_match_suppresses() {
    let rules = single_rule(
        RuleSpec::new("x", "==", "m", Severity::Error).with_exceptions(["== null allowed"]),
    );

    assert!(scan_with("a == b", &rules).is_empty());
}

#[test]
fn exception_in_context_window_suppresses() {
    let spec = RuleSpec::new("x", "==", "m", Severity::Error)
        .with_exceptions(["== null"])
        .with_exception_context(12);
    let rules = single_rule(spec);

    assert!(scan_with("if (a == null) {}", &rules).is_empty());
    assert_eq!(scan_with("if (a == b) {}", &rules).len(), 1);
}

#[test]
fn context_window_clamps_at_buffer_edges() {
    let spec = RuleSpec::new("x", "==", "m", Severity::Error)
        .with_exceptions(["never-present"])
        .with_exception_context(100);
    let rules = single_rule(spec);

    // Window larger than the buffer must not panic or over-suppress.
    assert_eq!(scan_with("a==b", &rules).len(), 1);
}

#[test]
fn context_window_respects_multibyte_boundaries() {
    let spec = RuleSpec::new("x", "==", "m", Severity::Error)
        .with_exceptions(["missing"])
        .with_exception_context(1);
    let rules = single_rule(spec);

    assert_eq!(scan_with("é==é", &rules).len(), 1);
}

#[test]
fn usage_check_gates_emission() {
    fn requires_marker(buffer: &str, _caps: &regex::Captures<'_>) -> bool {
        buffer.contains("MARKER")
    }

    let spec = RuleSpec::new("x", "foo", "m", Severity::Warning).with_usage_check(requires_marker);
    let rules = single_rule(spec);

    assert!(scan_with("foo", &rules).is_empty());
    assert_eq!(scan_with("foo MARKER", &rules).len(), 1);
}

#[test]
fn suggestion_rendered_from_template() {
    let spec = RuleSpec::new("x", r"var\s+(\w+)", "m", Severity::Warning)
        .with_suggestion(Suggestion::Template("let $1".to_string()));
    let rules = single_rule(spec);

    let findings = scan_with("var count = 1;", &rules);
    assert_eq!(findings[0].suggestion.as_deref(), Some("let count"));
}

#[test]
fn failing_suggestion_degrades_to_none() {
    let spec = RuleSpec::new("x", "foo", "m", Severity::Warning)
        .with_suggestion(Suggestion::Function(|_| None));
    let rules = single_rule(spec);

    let findings = scan_with("foo", &rules);
    assert_eq!(findings.len(), 1);
    assert!(findings[0].suggestion.is_none());
}

#[test]
fn multiple_rules_all_applied() {
    let rules = RuleSet::compile(vec![
        RuleSpec::new("a", "foo", "m", Severity::Error),
        RuleSpec::new("b", "bar", "m", Severity::Info),
    ])
    .unwrap();

    let findings = scan_with("foo bar foo", &rules);
    assert_eq!(findings.len(), 3);
}
