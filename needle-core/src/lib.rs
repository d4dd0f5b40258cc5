//! Core utilities and types shared across all Needle crates

pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use config::{load_config, save_config, AlignmentConfig, Config, OutputConfig};
pub use error::{NeedleError, NeedleResult};
pub use types::{check_gap_penalty, OutputFormat, SequenceType};

/// Version information for the Needle project
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
