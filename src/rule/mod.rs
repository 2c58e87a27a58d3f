mod builtin;

pub use builtin::builtin_rules;

use std::fmt;

use indexmap::IndexMap;
use regex::{Captures, Regex};
use serde::Serialize;

use crate::error::{Result, StyleGuardError};

/// Rule id reserved for unreadable-input findings produced by the batch
/// runner. User registries must not claim it.
pub const IO_RULE_ID: &str = "io";

/// Blocking priority of a finding. `Error` fails analysis, the others
/// are advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    pub const ALL: [Self; 3] = [Self::Error, Self::Warning, Self::Info];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Suggestion callback over the raw match's capture groups.
pub type SuggestionFn = fn(&Captures<'_>) -> Option<String>;

/// Usage-check predicate: receives the full buffer and the raw match;
/// the finding is emitted only when the predicate returns true.
pub type UsageCheckFn = fn(&str, &Captures<'_>) -> bool;

/// How a rule proposes a replacement for a match.
///
/// Templates use `$0`..`$9` placeholders for capture groups. Functions
/// are resolved at registry-build time and must be side-effect-free;
/// either shape degrades to "no suggestion" when it cannot produce a
/// replacement.
#[derive(Clone)]
pub enum Suggestion {
    Template(String),
    Function(SuggestionFn),
}

impl fmt::Debug for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Template(t) => f.debug_tuple("Template").field(t).finish(),
            Self::Function(_) => f.debug_tuple("Function").finish(),
        }
    }
}

/// An uncompiled rule definition as supplied by a catalog.
#[derive(Clone)]
pub struct RuleSpec {
    pub id: String,
    pub pattern: String,
    pub message: String,
    pub severity: Severity,
    pub exceptions: Vec<String>,
    pub exception_context: usize,
    pub suggestion: Option<Suggestion>,
    pub usage_check: Option<UsageCheckFn>,
}

impl RuleSpec {
    pub fn new(
        id: impl Into<String>,
        pattern: impl Into<String>,
        message: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            id: id.into(),
            pattern: pattern.into(),
            message: message.into(),
            severity,
            exceptions: Vec::new(),
            exception_context: 0,
            suggestion: None,
            usage_check: None,
        }
    }

    /// Exception strings that suppress a match (see `Rule::is_exception`).
    #[must_use]
    pub fn with_exceptions<I, S>(mut self, exceptions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exceptions = exceptions.into_iter().map(Into::into).collect();
        self
    }

    /// Width of the surrounding context window (in bytes, each side)
    /// that exception strings are also compared against.
    #[must_use]
    pub const fn with_exception_context(mut self, width: usize) -> Self {
        self.exception_context = width;
        self
    }

    #[must_use]
    pub fn with_suggestion(mut self, suggestion: Suggestion) -> Self {
        self.suggestion = Some(suggestion);
        self
    }

    #[must_use]
    pub fn with_usage_check(mut self, check: UsageCheckFn) -> Self {
        self.usage_check = Some(check);
        self
    }
}

impl fmt::Debug for RuleSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSpec")
            .field("id", &self.id)
            .field("pattern", &self.pattern)
            .field("severity", &self.severity)
            .field("has_usage_check", &self.usage_check.is_some())
            .finish_non_exhaustive()
    }
}

/// A compiled detection rule. Immutable after registry build.
#[derive(Clone)]
pub struct Rule {
    id: String,
    pattern: Regex,
    message: String,
    severity: Severity,
    exceptions: Vec<String>,
    exception_context: usize,
    suggestion: Option<Suggestion>,
    usage_check: Option<UsageCheckFn>,
}

impl Rule {
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub const fn pattern(&self) -> &Regex {
        &self.pattern
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub const fn exception_context(&self) -> usize {
        self.exception_context
    }

    #[must_use]
    pub const fn suggestion(&self) -> Option<&Suggestion> {
        self.suggestion.as_ref()
    }

    #[must_use]
    pub const fn usage_check(&self) -> Option<UsageCheckFn> {
        self.usage_check
    }

    /// Whether a matched text (plus its context window, when configured)
    /// is covered by one of this rule's exception strings.
    ///
    /// An exception equal to the matched text always suppresses. Beyond
    /// that, the two modes differ: without a context window the exception
    /// suppresses when it contains the matched text; with a window, the
    /// exception must actually appear in the surrounding context, so a
    /// match that is merely a substring of an exception still fires.
    #[must_use]
    pub fn is_exception(&self, matched: &str, context: &str) -> bool {
        self.exceptions.iter().any(|exc| {
            exc == matched
                || if self.exception_context == 0 {
                    exc.contains(matched)
                } else {
                    context.contains(exc.as_str())
                }
        })
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.id)
            .field("pattern", &self.pattern)
            .field("severity", &self.severity)
            .field("has_usage_check", &self.usage_check.is_some())
            .finish_non_exhaustive()
    }
}

/// An immutable registry of compiled rules, built once at process start
/// and shared across all inputs. Iteration order is definition order.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: IndexMap<String, Rule>,
}

impl RuleSet {
    /// Compile a catalog of rule specs into a registry.
    ///
    /// # Errors
    /// Returns a configuration error for a duplicate or reserved rule id,
    /// and an `InvalidPattern` error for an unparseable pattern. Both are
    /// fatal and surface before any input is processed.
    pub fn compile(specs: impl IntoIterator<Item = RuleSpec>) -> Result<Self> {
        let mut rules = IndexMap::new();

        for spec in specs {
            if spec.id == IO_RULE_ID {
                return Err(StyleGuardError::Config(format!(
                    "rule id `{IO_RULE_ID}` is reserved for unreadable inputs"
                )));
            }
            if rules.contains_key(&spec.id) {
                return Err(StyleGuardError::Config(format!(
                    "duplicate rule id: {}",
                    spec.id
                )));
            }

            let pattern =
                Regex::new(&spec.pattern).map_err(|e| StyleGuardError::InvalidPattern {
                    rule: spec.id.clone(),
                    pattern: spec.pattern.clone(),
                    source: Box::new(e),
                })?;

            rules.insert(
                spec.id.clone(),
                Rule {
                    id: spec.id,
                    pattern,
                    message: spec.message,
                    severity: spec.severity,
                    exceptions: spec.exceptions,
                    exception_context: spec.exception_context,
                    suggestion: spec.suggestion,
                    usage_check: spec.usage_check,
                },
            );
        }

        Ok(Self { rules })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.values()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Rule> {
        self.rules.get(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
