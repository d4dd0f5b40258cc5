use clap::Parser;
use colored::*;
use std::process;
use tracing_subscriber::EnvFilter;

mod cli;

use crate::cli::{Cli, Commands};
use needle_core::NeedleError;

fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins, then NEEDLE_LOG, then the -v count
    let log_level = std::env::var("NEEDLE_LOG").unwrap_or_else(|_| {
        match cli.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
        .to_string()
    });

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);

        let exit_code = match e.downcast_ref::<NeedleError>() {
            Some(NeedleError::Configuration(_)) => 2,
            Some(NeedleError::Io(_)) => 3,
            Some(NeedleError::Parse(_))
            | Some(NeedleError::Format { .. })
            | Some(NeedleError::UnknownSymbol { .. }) => 4,
            Some(NeedleError::InvalidPenalty(_)) => 5,
            _ => 1,
        };
        process::exit(exit_code);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli::load_settings(cli.config.as_deref())?;

    match cli.command {
        Commands::Align(args) => crate::cli::commands::align::run(args, &config),
        Commands::Matrix(args) => crate::cli::commands::matrix::run(args),
    }
}
