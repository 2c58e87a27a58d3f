mod filter;

pub use filter::{DEFAULT_EXTENSIONS, EXCLUDED_DIRS, FileFilter, InputFilter};

use std::collections::VecDeque;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::engine::{AnalysisResult, Analyzer, BatchSummary};
use crate::error::{Result, StyleGuardError};
use crate::output::ReportFormatter;

/// Lifecycle of a batch run. The runner moves `Idle` → `Processing`
/// while the queue drains, then `Processing` → `Draining` for the
/// summary, then back to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunnerState {
    #[default]
    Idle,
    Processing,
    Draining,
}

/// Sequential batch runner over an injected task queue.
///
/// Inputs are processed strictly one at a time: each file is read,
/// analyzed, reported, and its buffer released before the next begins.
/// An unreadable file degrades to an io-error finding; it never aborts
/// the batch.
pub struct BatchRunner<'a, F: FileFilter> {
    analyzer: &'a Analyzer,
    filter: F,
    state: RunnerState,
    queue: VecDeque<PathBuf>,
}

impl<'a, F: FileFilter> BatchRunner<'a, F> {
    #[must_use]
    pub const fn new(analyzer: &'a Analyzer, filter: F) -> Self {
        Self {
            analyzer,
            filter,
            state: RunnerState::Idle,
            queue: VecDeque::new(),
        }
    }

    #[must_use]
    pub const fn state(&self) -> RunnerState {
        self.state
    }

    #[must_use]
    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    pub fn enqueue(&mut self, path: PathBuf) {
        self.queue.push_back(path);
    }

    /// Discover eligible files under `root` depth-first and enqueue
    /// them. Directories the filter refuses to descend into are pruned
    /// whole; files must pass the filter's inclusion check.
    ///
    /// # Errors
    /// Returns `InputNotFound` if `root` does not exist.
    pub fn enqueue_dir(&mut self, root: &Path) -> Result<()> {
        if !root.exists() {
            return Err(StyleGuardError::InputNotFound(root.to_path_buf()));
        }

        let filter = &self.filter;
        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                entry.depth() == 0
                    || !entry.file_type().is_dir()
                    || entry
                        .file_name()
                        .to_str()
                        .is_none_or(|name| filter.should_descend(name))
            });

        for entry in walker.filter_map(std::result::Result::ok) {
            if entry.file_type().is_file() && filter.should_include(entry.path()) {
                self.queue.push_back(entry.into_path());
            }
        }

        Ok(())
    }

    /// Drain the queue, printing each input's report as it completes,
    /// then render the cross-input summary.
    ///
    /// # Errors
    /// Returns an error if formatting or writing the output fails.
    pub fn run<W: Write>(
        &mut self,
        formatter: &dyn ReportFormatter,
        out: &mut W,
    ) -> Result<BatchSummary> {
        self.state = RunnerState::Processing;
        let mut summary = BatchSummary::default();

        while let Some(path) = self.queue.pop_front() {
            let result = self.process(&path);
            write!(out, "{}", formatter.format_result(&result)?)?;
            summary.record(&result);
        }

        self.state = RunnerState::Draining;
        write!(out, "{}", formatter.format_summary(&summary)?)?;

        self.state = RunnerState::Idle;
        Ok(summary)
    }

    fn process(&self, path: &Path) -> AnalysisResult {
        let name = path.display().to_string();
        match fs::read_to_string(path) {
            Ok(buffer) => self.analyzer.analyze(&name, &buffer),
            Err(error) => AnalysisResult::io_error(name, &error),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
