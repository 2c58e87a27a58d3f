use crate::rule::RuleSet;

use super::position::LineIndex;
use super::result::Finding;
use super::suggest;

/// Apply every rule in the registry to one buffer.
///
/// Matching is non-overlapping, left-to-right, and global per rule.
/// Exception strings and usage-check predicates suppress matches before
/// they become findings; suppressed matches are never counted and never
/// receive a suggestion.
pub fn scan(buffer: &str, rules: &RuleSet, index: &LineIndex) -> Vec<Finding> {
    let mut findings = Vec::new();

    for rule in rules.iter() {
        for caps in rule.pattern().captures_iter(buffer) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            let matched = whole.as_str();

            let context = context_window(
                buffer,
                whole.start(),
                whole.end(),
                rule.exception_context(),
            );
            if rule.is_exception(matched, context) {
                continue;
            }

            if let Some(check) = rule.usage_check()
                && !check(buffer, &caps)
            {
                continue;
            }

            let (line, column) = index.line_col(whole.start());
            let suggestion = rule
                .suggestion()
                .and_then(|suggestion| suggest::render(suggestion, &caps));

            findings.push(Finding {
                rule: rule.id().to_string(),
                severity: rule.severity(),
                message: rule.message().to_string(),
                line,
                column,
                matched: matched.to_string(),
                suggestion,
            });
        }
    }

    findings
}

/// Fixed-width window around a match, clamped to the buffer and snapped
/// to character boundaries. Width 0 means the match text alone.
fn context_window(buffer: &str, start: usize, end: usize, width: usize) -> &str {
    if width == 0 {
        return &buffer[start..end];
    }
    let lo = floor_boundary(buffer, start.saturating_sub(width));
    let hi = ceil_boundary(buffer, end.saturating_add(width));
    &buffer[lo..hi]
}

fn floor_boundary(buffer: &str, mut i: usize) -> usize {
    while !buffer.is_char_boundary(i) {
        i -= 1;
    }
    i
}

fn ceil_boundary(buffer: &str, mut i: usize) -> usize {
    if i >= buffer.len() {
        return buffer.len();
    }
    while !buffer.is_char_boundary(i) {
        i += 1;
    }
    i
}

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod tests;
