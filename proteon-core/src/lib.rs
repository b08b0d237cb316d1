//! Core utilities and types shared across all Proteon crates

pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use config::{load_config, max_fasta_length, save_config, AlignmentConfig, Config, FastaConfig};
pub use error::{ConfigError, FormatError, ProteonError, ProteonResult, ValidationError};

// Re-export core types
pub use types::SHA256Hash;

/// Version information for the Proteon project
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
