pub mod commands;

use clap::{Parser, Subcommand};
use proteon_core::{load_config, Config, ProteonResult};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "proteon",
    version,
    about = "Protein FASTA and Grishin alignment record tooling",
    long_about = "Proteon parses, canonicalizes and validates single-record protein FASTA files, \
                  and converts pairwise alignment records between JSON and the Grishin text format."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// TOML configuration file (PROTEON_* environment variables still apply)
    #[arg(short, long, global = true, value_name = "PATH", env = "PROTEON_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse, canonicalize and hash a FASTA record
    Fasta(commands::fasta::FastaArgs),

    /// Render alignment records as Grishin blocks
    Grishin(commands::grishin::GrishinArgs),

    /// Show configured limits and the derived FASTA length budget
    Budget(commands::budget::BudgetArgs),
}

/// Config file when given, otherwise defaults with environment overrides
pub fn load_settings(path: Option<&Path>) -> ProteonResult<Config> {
    match path {
        Some(path) => load_config(path),
        None => Ok(Config::from_env()?),
    }
}
