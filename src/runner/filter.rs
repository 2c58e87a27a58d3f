use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{Result, StyleGuardError};

/// Extensions analyzed when the caller does not narrow the set.
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    "js", "jsx", "ts", "tsx", "mjs", "cjs", "html", "htm", "vue", "svelte",
];

/// Directory names never descended into, independent of exclude globs.
pub const EXCLUDED_DIRS: &[&str] = &["node_modules", "target", "dist", "build", "vendor"];

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;

    /// Whether discovery may descend into a directory with this name.
    fn should_descend(&self, dir_name: &str) -> bool {
        let _ = dir_name;
        true
    }
}

pub struct InputFilter {
    extensions: Vec<String>,
    exclude_patterns: GlobSet,
}

impl InputFilter {
    /// Create a new filter with the given extensions and exclude patterns.
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn new(extensions: Vec<String>, exclude_patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let glob = Glob::new(pattern).map_err(|e| StyleGuardError::InvalidExclude {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let exclude_patterns = builder
            .build()
            .map_err(|e| StyleGuardError::InvalidExclude {
                pattern: "combined patterns".to_string(),
                source: e,
            })?;

        Ok(Self {
            extensions,
            exclude_patterns,
        })
    }

    /// Filter with the default extension set and no exclude patterns.
    ///
    /// # Errors
    /// Never fails in practice; kept fallible for parity with `new`.
    pub fn with_defaults() -> Result<Self> {
        Self::new(
            DEFAULT_EXTENSIONS.iter().map(ToString::to_string).collect(),
            &[],
        )
    }

    fn has_valid_extension(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }

        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }

    fn is_excluded(&self, path: &Path) -> bool {
        self.exclude_patterns.is_match(path)
    }
}

impl FileFilter for InputFilter {
    fn should_include(&self, path: &Path) -> bool {
        self.has_valid_extension(path) && !self.is_excluded(path)
    }

    fn should_descend(&self, dir_name: &str) -> bool {
        !dir_name.starts_with('.') && !EXCLUDED_DIRS.contains(&dir_name)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
