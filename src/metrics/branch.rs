use regex::Regex;

use crate::error::{Result, StyleGuardError};

/// Decision-point sub-patterns counted by the default estimator:
/// branches, loops, case labels, exception handlers, ternaries, and
/// short-circuit boolean operators.
pub const DEFAULT_DECISION_PATTERNS: &[&str] = &[
    r"\bif\b",
    r"\bfor\b",
    r"\bwhile\b",
    r"\bcase\s",
    r"\bcatch\b",
    r"[^?.]\?[^.?:]",
    r"&&",
    r"\|\|",
];

/// Branch-density estimator: counts decision-point occurrences over the
/// whole buffer and reports `1 + total` (one linear path plus one per
/// decision point, McCabe-style). Advisory only; it never fails an
/// analysis by itself.
#[derive(Debug, Clone)]
pub struct BranchDensity {
    patterns: Vec<Regex>,
}

impl BranchDensity {
    /// Compile a set of decision-point sub-patterns.
    ///
    /// # Errors
    /// Returns `InvalidPattern` for an unparseable sub-pattern; like rule
    /// patterns, this is a fatal configuration error at build time.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| {
                Regex::new(p.as_ref()).map_err(|e| StyleGuardError::InvalidPattern {
                    rule: "branch-density".to_string(),
                    pattern: p.as_ref().to_string(),
                    source: Box::new(e),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    /// Estimator with the default decision-point set.
    ///
    /// # Errors
    /// Never fails in practice; the default patterns are static.
    pub fn with_default_patterns() -> Result<Self> {
        Self::new(DEFAULT_DECISION_PATTERNS)
    }

    #[must_use]
    pub fn score(&self, buffer: &str) -> usize {
        1 + self
            .patterns
            .iter()
            .map(|pattern| pattern.find_iter(buffer).count())
            .sum::<usize>()
    }
}

#[cfg(test)]
#[path = "branch_tests.rs"]
mod tests;
