#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the style-guard binary.
#[macro_export]
macro_rules! style_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("style-guard"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path to a fixture file as a string.
    pub fn file_path(&self, relative_path: &str) -> String {
        self.dir
            .path()
            .join(relative_path)
            .to_str()
            .expect("Path is not valid UTF-8")
            .to_string()
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A script with one error-severity finding (loose equality).
pub const FAILING_SCRIPT: &str = "function check(a, b) {\n  return a == b;\n}\n";

/// A script with only a warning-severity finding (`var` declaration).
pub const WARNING_SCRIPT: &str = "var legacy = 1;\nexport { legacy };\n";

/// A script with no findings at all.
pub const CLEAN_SCRIPT: &str = "const answer = 42;\nexport { answer };\n";
