pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use needle_core::{load_config, Config, NeedleError};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "needle",
    version,
    about = "Global pairwise sequence alignment with affine gap penalties",
    long_about = "Needle computes an optimal global alignment of two sequences using the \
                  Needleman-Wunsch algorithm with affine gap penalties (separate gap-open and \
                  gap-extend costs) and a substitution matrix such as BLOSUM62."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// TOML configuration file
    #[arg(long, value_name = "FILE", global = true, env = "NEEDLE_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Globally align the first records of two FASTA files
    Align(commands::align::AlignArgs),

    /// Load a substitution matrix and describe it
    Matrix(commands::matrix::MatrixArgs),
}

/// Defaults, or the given file validated; command-line flags are applied later
pub fn load_settings(path: Option<&Path>) -> Result<Config, NeedleError> {
    let config = match path {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };
    config.validate()?;
    Ok(config)
}
