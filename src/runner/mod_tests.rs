use std::fs;

use tempfile::TempDir;

use super::*;
use crate::engine::Analyzer;
use crate::output::{ColorMode, TextFormatter};
use crate::rule::{RuleSet, RuleSpec, Severity};

fn analyzer() -> Analyzer {
    let rules = RuleSet::compile(vec![RuleSpec::new(
        "no-foo",
        "foo",
        "foo is banned",
        Severity::Error,
    )])
    .unwrap();
    Analyzer::new(rules)
}

fn js_filter() -> InputFilter {
    InputFilter::new(vec!["js".to_string()], &[]).unwrap()
}

fn write_file(dir: &TempDir, relative: &str, content: &str) {
    let path = dir.path().join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn enqueue_dir_missing_root_is_input_not_found() {
    let analyzer = analyzer();
    let mut runner = BatchRunner::new(&analyzer, js_filter());

    let result = runner.enqueue_dir(Path::new("/nonexistent/surely/missing"));
    assert!(matches!(result, Err(StyleGuardError::InputNotFound(_))));
}

#[test]
fn enqueue_dir_discovers_matching_files() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "a.js", "ok\n");
    write_file(&dir, "sub/b.js", "ok\n");
    write_file(&dir, "c.py", "ignored\n");

    let analyzer = analyzer();
    let mut runner = BatchRunner::new(&analyzer, js_filter());
    runner.enqueue_dir(dir.path()).unwrap();

    assert_eq!(runner.queued(), 2);
}

#[test]
fn enqueue_dir_skips_hidden_and_excluded_dirs() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "a.js", "ok\n");
    write_file(&dir, ".hidden/b.js", "skipped\n");
    write_file(&dir, "node_modules/dep/c.js", "skipped\n");
    write_file(&dir, "vendor/d.js", "skipped\n");

    let analyzer = analyzer();
    let mut runner = BatchRunner::new(&analyzer, js_filter());
    runner.enqueue_dir(dir.path()).unwrap();

    assert_eq!(runner.queued(), 1);
}

#[test]
fn run_reports_each_input_and_accumulates_totals() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "bad.js", "foo\n");
    write_file(&dir, "good.js", "clean\n");

    let analyzer = analyzer();
    let mut runner = BatchRunner::new(&analyzer, js_filter());
    runner.enqueue_dir(dir.path()).unwrap();

    let mut out = Vec::new();
    let formatter = TextFormatter::new(ColorMode::Never);
    let summary = runner.run(&formatter, &mut out).unwrap();

    assert_eq!(summary.analyzed(), 2);
    assert_eq!(summary.errors, 1);
    assert_eq!(summary.failed(), 1);
    assert!(!summary.passed());

    let rendered = String::from_utf8(out).unwrap();
    assert!(rendered.contains("bad.js"));
    assert!(rendered.contains("Summary: 2 inputs analyzed"));
}

#[test]
fn unreadable_input_degrades_to_io_finding() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "good.js", "clean\n");

    let analyzer = analyzer();
    let mut runner = BatchRunner::new(&analyzer, js_filter());
    runner.enqueue_dir(dir.path()).unwrap();
    runner.enqueue(dir.path().join("missing.js"));

    let mut out = Vec::new();
    let formatter = TextFormatter::new(ColorMode::Never);
    let summary = runner.run(&formatter, &mut out).unwrap();

    // The missing file contributes exactly one error and fails the batch,
    // without aborting the readable input.
    assert_eq!(summary.analyzed(), 2);
    assert_eq!(summary.errors, 1);
    assert!(!summary.passed());

    let rendered = String::from_utf8(out).unwrap();
    assert!(rendered.contains("error[io]"));
}

#[test]
fn runner_returns_to_idle_after_run() {
    let analyzer = analyzer();
    let mut runner = BatchRunner::new(&analyzer, js_filter());
    assert_eq!(runner.state(), RunnerState::Idle);

    let mut out = Vec::new();
    let formatter = TextFormatter::new(ColorMode::Never);
    runner.run(&formatter, &mut out).unwrap();

    assert_eq!(runner.state(), RunnerState::Idle);
    assert_eq!(runner.queued(), 0);
}

#[test]
fn discovery_order_is_deterministic() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "zeta.js", "z\n");
    write_file(&dir, "alpha.js", "a\n");
    write_file(&dir, "mid.js", "m\n");

    let analyzer = analyzer();

    let collect = || {
        let mut runner = BatchRunner::new(&analyzer, js_filter());
        runner.enqueue_dir(dir.path()).unwrap();
        let mut names = Vec::new();
        while let Some(path) = runner.queue.pop_front() {
            names.push(path.file_name().unwrap().to_str().unwrap().to_string());
        }
        names
    };

    let first = collect();
    assert_eq!(first, ["alpha.js", "mid.js", "zeta.js"]);
    assert_eq!(first, collect());
}
