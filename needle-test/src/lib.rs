//! Test utilities for the Needle workspace
//!
//! Common helpers shared by the unit, integration and CLI tests:
//!
//! - **Test Environment**: temporary directories with automatic cleanup
//! - **Fixtures**: FASTA records, random sequences and the bundled data files
//! - **Assertions**: structural checks for pairwise alignments

pub mod assertions;
pub mod environment;
pub mod fixtures;

// Re-export commonly used items
pub use assertions::{assert_alignment_consistent, assert_valid_fasta, degap};
pub use environment::TestEnvironment;
pub use fixtures::{data_path, mutate, random_sequence, TestSequence};

// Re-export test dependencies for convenience
pub use anyhow::{Context, Result};
pub use tempfile;

/// Initialize test logging (safe to call from every test)
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}
