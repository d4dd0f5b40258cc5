#![allow(dead_code)]

use anyhow::Result;
use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub use needle_test::data_path;

/// The `needle` binary with colors and inherited log settings disabled
pub fn needle_cmd() -> Command {
    let mut cmd = Command::cargo_bin("needle").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("NEEDLE_LOG")
        .env_remove("NEEDLE_CONFIG");
    cmd
}

/// Write a single-record FASTA file
pub fn create_test_fasta(dir: &Path, name: &str, id: &str, sequence: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, format!(">{}\n{}\n", id, sequence))?;
    Ok(path)
}

pub struct TestEnvironment {
    pub temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    pub fn create_input_file(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, content)?;
        Ok(path)
    }

    pub fn create_fasta(&self, name: &str, id: &str, sequence: &str) -> Result<PathBuf> {
        create_test_fasta(self.temp_dir.path(), name, id, sequence)
    }

    pub fn output_path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }
}
