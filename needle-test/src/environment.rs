//! Test environment management
//!
//! Provides isolated test environments with automatic cleanup using RAII.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures::TestSequence;

/// Isolated test environment, removed when dropped
pub struct TestEnvironment {
    temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir =
            TempDir::with_prefix("needle-test").context("Failed to create temporary directory")?;
        Ok(Self { temp_dir })
    }

    /// Root of the environment
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path for a file inside the environment (not created)
    pub fn path(&self, name: &str) -> PathBuf {
        self.root().join(name)
    }

    pub fn write_file(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }

    pub fn write_fasta(&self, name: &str, records: &[TestSequence]) -> Result<PathBuf> {
        let content: String = records.iter().map(TestSequence::to_fasta).collect();
        self.write_file(name, &content)
    }

    pub fn read_file(&self, name: &str) -> Result<String> {
        let path = self.path(name);
        std::fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))
    }
}
