//! Configuration types for Proteon
//!
//! Limits are read once at startup (TOML file, then `PROTEON_*` environment
//! overrides) and handed to the validators as an explicit value. Nothing in
//! the workspace mutates a `Config` after it has been validated.

pub mod budget;

use crate::error::{ConfigError, ProteonError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

pub use budget::max_fasta_length;

/// Prefix for environment variable overrides, e.g. `PROTEON_MAX_SEQUENCE_LENGTH`
pub const ENV_PREFIX: &str = "PROTEON_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub fasta: FastaConfig,
    #[serde(default)]
    pub alignment: AlignmentConfig,
}

/// Per-field limits of a FASTA record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FastaConfig {
    #[serde(default = "default_max_description_length", alias = "MAX_DESCRIPTION_LENGTH")]
    pub max_description_length: usize,
    /// Unbounded when unset
    #[serde(default, alias = "MAX_COMMENTS_LENGTH")]
    pub max_comments_length: Option<usize>,
    #[serde(default = "default_max_sequence_length", alias = "MAX_SEQUENCE_LENGTH")]
    pub max_sequence_length: usize,
    /// Replaces the summed field limits in [`max_fasta_length`] when set
    #[serde(default, alias = "MAX_FASTA_FILE_LENGTH")]
    pub max_fasta_file_length: Option<usize>,
}

/// Fixed-width target identifiers of an alignment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignmentConfig {
    #[serde(default = "default_pdb_code_length", alias = "PDB_CODE_LENGTH")]
    pub pdb_code_length: usize,
    #[serde(default = "default_pdb_chain_length", alias = "PDB_CHAIN_LENGTH")]
    pub pdb_chain_length: usize,
}

// Default value functions
fn default_max_description_length() -> usize { 1000 }
fn default_max_sequence_length() -> usize { 5000 }
fn default_pdb_code_length() -> usize { 4 }
fn default_pdb_chain_length() -> usize { 1 }

impl Default for FastaConfig {
    fn default() -> Self {
        Self {
            max_description_length: default_max_description_length(),
            max_comments_length: None,
            max_sequence_length: default_max_sequence_length(),
            max_fasta_file_length: None,
        }
    }
}

impl Default for AlignmentConfig {
    fn default() -> Self {
        Self {
            pdb_code_length: default_pdb_code_length(),
            pdb_chain_length: default_pdb_chain_length(),
        }
    }
}

impl Config {
    /// Defaults overridden by `PROTEON_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `PROTEON_*` environment variables on top of the current values
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides_from(|key| std::env::var(format!("{}{}", ENV_PREFIX, key)).ok())
    }

    /// Apply overrides from any key lookup; keys are the unprefixed option names
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = parse_override(&lookup, "MAX_DESCRIPTION_LENGTH")? {
            self.fasta.max_description_length = v;
        }
        if let Some(v) = parse_override(&lookup, "MAX_COMMENTS_LENGTH")? {
            self.fasta.max_comments_length = Some(v);
        }
        if let Some(v) = parse_override(&lookup, "MAX_SEQUENCE_LENGTH")? {
            self.fasta.max_sequence_length = v;
        }
        if let Some(v) = parse_override(&lookup, "MAX_FASTA_FILE_LENGTH")? {
            self.fasta.max_fasta_file_length = Some(v);
        }
        if let Some(v) = parse_override(&lookup, "PDB_CODE_LENGTH")? {
            self.alignment.pdb_code_length = v;
        }
        if let Some(v) = parse_override(&lookup, "PDB_CHAIN_LENGTH")? {
            self.alignment.pdb_chain_length = v;
        }
        Ok(())
    }

    /// Reject limits no record could satisfy
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fasta = &self.fasta;
        if fasta.max_description_length == 0 {
            return Err(ConfigError::ZeroLimit("max_description_length"));
        }
        if fasta.max_sequence_length == 0 {
            return Err(ConfigError::ZeroLimit("max_sequence_length"));
        }
        if fasta.max_comments_length == Some(0) {
            return Err(ConfigError::ZeroLimit("max_comments_length"));
        }
        if self.alignment.pdb_code_length == 0 {
            return Err(ConfigError::ZeroLimit("pdb_code_length"));
        }
        if self.alignment.pdb_chain_length == 0 {
            return Err(ConfigError::ZeroLimit("pdb_chain_length"));
        }
        if let Some(total) = fasta.max_fasta_file_length {
            if total < fasta.max_sequence_length {
                return Err(ConfigError::Contradictory(format!(
                    "max_fasta_file_length ({}) is smaller than max_sequence_length ({})",
                    total, fasta.max_sequence_length
                )));
            }
        }
        Ok(())
    }
}

fn parse_override<F>(lookup: &F, key: &str) -> Result<Option<usize>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<usize>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                key: key.to_string(),
                value: raw,
            }),
    }
}

pub fn default_config() -> Config {
    Config::default()
}

/// Load a TOML config file, apply environment overrides and validate
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ProteonError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    let mut config: Config = toml::from_str(&contents).map_err(ConfigError::from)?;
    config.apply_env_overrides()?;
    config.validate()?;
    debug!(path = %path.display(), "loaded configuration");
    Ok(config)
}

pub fn save_config<P: AsRef<Path>>(path: P, config: &Config) -> Result<(), ProteonError> {
    let contents = toml::to_string_pretty(config)
        .map_err(|e| ProteonError::Serialization(format!("Failed to serialize config: {}", e)))?;
    std::fs::write(path, contents)?;
    Ok(())
}
