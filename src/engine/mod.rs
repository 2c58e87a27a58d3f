mod aggregate;
mod position;
mod result;
mod scanner;
mod suggest;

pub use aggregate::aggregate;
pub use position::LineIndex;
pub use result::{AnalysisResult, BatchSummary, Finding, InputOutcome};
pub use scanner::scan;
pub use suggest::render as render_suggestion;

use crate::metrics::{BranchDensity, NestingDepth};
use crate::rule::RuleSet;

pub const BRANCH_DENSITY_METRIC: &str = "branch_density";
pub const NESTING_DEPTH_METRIC: &str = "max_nesting_depth";

/// The per-input pipeline: scan with every registered rule, aggregate
/// findings, then run the enabled metric estimators over the same
/// buffer. Single-threaded and synchronous; one buffer is held in
/// memory at a time and released when the result is produced.
#[derive(Debug, Clone)]
pub struct Analyzer {
    rules: RuleSet,
    branch_density: Option<BranchDensity>,
    nesting_depth: Option<NestingDepth>,
}

impl Analyzer {
    #[must_use]
    pub const fn new(rules: RuleSet) -> Self {
        Self {
            rules,
            branch_density: None,
            nesting_depth: None,
        }
    }

    #[must_use]
    pub fn with_branch_density(mut self, estimator: BranchDensity) -> Self {
        self.branch_density = Some(estimator);
        self
    }

    #[must_use]
    pub fn with_nesting_depth(mut self, estimator: NestingDepth) -> Self {
        self.nesting_depth = Some(estimator);
        self
    }

    #[must_use]
    pub const fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Analyze one named buffer to completion.
    #[must_use]
    pub fn analyze(&self, name: &str, buffer: &str) -> AnalysisResult {
        let index = LineIndex::new(buffer);
        let findings = scanner::scan(buffer, &self.rules, &index);
        let mut result = aggregate::aggregate(name, findings);

        if let Some(estimator) = &self.branch_density {
            result
                .metrics
                .insert(BRANCH_DENSITY_METRIC.to_string(), estimator.score(buffer));
        }
        if let Some(estimator) = &self.nesting_depth {
            result.metrics.insert(
                NESTING_DEPTH_METRIC.to_string(),
                estimator.max_depth(buffer),
            );
        }

        result
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
