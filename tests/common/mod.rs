//! Shared test utilities for integration and E2E tests.
//!
//! This module provides common fixtures, helper functions, and YAML snippets
//! to reduce duplication across test files.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_primary(configs::MINIMAL);
//!     // ... test code
//! }
//! ```

use assert_fs::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::configs;
    #[allow(unused_imports)]
    pub use super::{fixture_dir, keys, parse_yaml};
    pub use super::TestFixture;
}

/// Common configuration YAML snippets for testing.
#[allow(dead_code)]
pub mod configs {
    /// Minimal primary document.
    pub const MINIMAL: &str = "version: 2.1\n";

    /// Primary document with an empty jobs section, ready for `jobs/` files.
    pub const WITH_EMPTY_JOBS: &str = "version: 2.1\njobs: {}\n";

    /// A job definition.
    pub const BUILD_JOB: &str = r#"
docker:
  - image: cimg/base:stable
steps:
  - checkout
  - run: make
"#;

    /// A primary document whose top level is a list.
    pub const LIST_ROOT: &str = "[]\n";

    /// Invalid YAML for error testing.
    pub const INVALID_YAML: &str = "steps: [unclosed";
}

/// Path to a checked-in fixture under `tests/fixtures`.
#[allow(dead_code)]
pub fn fixture_dir(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Parse YAML text, panicking on failure.
#[allow(dead_code)]
pub fn parse_yaml(text: &str) -> serde_yaml::Value {
    serde_yaml::from_str(text).expect("Output should be valid YAML")
}

/// The keys of a YAML mapping, in order.
#[allow(dead_code)]
pub fn keys(value: &serde_yaml::Value) -> Vec<String> {
    value
        .as_mapping()
        .expect("Value should be a mapping")
        .keys()
        .map(|k| k.as_str().expect("Key should be a string").to_string())
        .collect()
}

/// A temporary configuration directory.
///
/// # Example
///
/// ```rust,ignore
/// let fixture = TestFixture::new()
///     .with_primary(configs::MINIMAL)
///     .with_file("jobs/build.yml", configs::BUILD_JOB);
///
/// fixture.command().arg("pack").arg(fixture.path()).assert().success();
/// ```
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add a `config.yml` primary document with the given content.
    pub fn with_primary(self, content: &str) -> Self {
        self.with_file("config.yml", content)
    }

    /// Add a file at `path` (relative to the fixture root), creating parent
    /// directories as needed.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        let child = self.temp_dir.child(path);
        if let Some(parent) = child.path().parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        child.write_str(content).expect("Failed to write file");
        self
    }

    /// Add an empty directory at `path`.
    #[allow(dead_code)]
    pub fn with_dir(self, path: &str) -> Self {
        self.temp_dir
            .child(path)
            .create_dir_all()
            .expect("Failed to create directory");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Get the absolute path of an entry in the fixture.
    #[allow(dead_code)]
    pub fn join(&self, path: &str) -> PathBuf {
        self.temp_dir.path().join(path)
    }

    /// Create a command for the `config-pack` binary, run from the fixture
    /// root with `RUST_LOG` cleared.
    #[allow(dead_code)]
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("config-pack");
        cmd.current_dir(self.path()).env_remove("RUST_LOG");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_with_nested_file() {
        let fixture = TestFixture::new().with_file("orbs/mine/commands/greet.yml", "steps: []");
        assert!(fixture.join("orbs/mine/commands/greet.yml").exists());
    }

    #[test]
    fn test_configs_are_valid_yaml() {
        for config in [configs::MINIMAL, configs::WITH_EMPTY_JOBS, configs::BUILD_JOB, configs::LIST_ROOT] {
            serde_yaml::from_str::<serde_yaml::Value>(config).expect("Config should be valid YAML");
        }
    }

    #[test]
    fn test_invalid_yaml_is_actually_invalid() {
        let result = serde_yaml::from_str::<serde_yaml::Value>(configs::INVALID_YAML);
        assert!(result.is_err(), "INVALID_YAML should not parse");
    }
}
