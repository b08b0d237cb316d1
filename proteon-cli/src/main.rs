use clap::Parser;
use colored::*;
use std::process;
use tracing_subscriber::EnvFilter;

mod cli;

use crate::cli::{Cli, Commands};
use proteon_core::ProteonError;

fn main() {
    // Initialize logging with PROTEON_LOG environment variable support
    let log_level = std::env::var("PROTEON_LOG").unwrap_or_else(|_| "warn".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);

        // Use appropriate exit codes based on error type
        let exit_code = match e.downcast_ref::<ProteonError>() {
            Some(ProteonError::Config(_)) => 2,
            Some(ProteonError::Io(_)) => 3,
            Some(ProteonError::Format(_)) | Some(ProteonError::Serialization(_)) => 4,
            Some(ProteonError::Validation(_)) => 5,
            None => 1,
        };
        process::exit(exit_code);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli::load_settings(cli.config.as_deref())?;

    match cli.command {
        Commands::Fasta(args) => crate::cli::commands::fasta::run(args, &config)?,
        Commands::Grishin(args) => crate::cli::commands::grishin::run(args, &config)?,
        Commands::Budget(args) => crate::cli::commands::budget::run(args, &config)?,
    }
    Ok(())
}
