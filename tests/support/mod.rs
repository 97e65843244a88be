//! Test support utilities for envgate integration tests.
//!
//! Provides an isolated project directory and helper commands.

#![allow(dead_code)]

pub mod assertions;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with an isolated temp project directory.
///
/// Child processes use `.current_dir()` so tests can run in parallel.
pub struct Test {
    /// Temporary directory for the test project
    pub dir: TempDir,
}

impl Test {
    /// Create a new empty project directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Create a project with a `.env` file.
    pub fn with_env(content: &str) -> Self {
        let t = Self::new();
        t.write_env(content);
        t
    }

    /// Write the project's `.env` file.
    pub fn write_env(&self, content: &str) {
        std::fs::write(self.dir.path().join(".env"), content).expect("failed to write .env");
    }

    /// Path of the default secrets document.
    pub fn secrets_path(&self) -> PathBuf {
        self.dir.path().join(".streamlit").join("secrets.toml")
    }

    /// Contents of the generated secrets document.
    pub fn secrets(&self) -> String {
        std::fs::read_to_string(self.secrets_path()).expect("failed to read secrets.toml")
    }
}
