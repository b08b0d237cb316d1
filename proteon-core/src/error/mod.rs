//! Core error types for Proteon

pub mod format;
pub mod validation;

use thiserror::Error;
pub use format::FormatError;
pub use validation::ValidationError;

/// Main error type for Proteon operations
#[derive(Error, Debug)]
pub enum ProteonError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Unusable or contradictory length configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: String, value: String },

    #[error("{0} must be greater than zero")]
    ZeroLimit(&'static str),

    #[error("contradictory limits: {0}")]
    Contradictory(String),

    #[error("failed to parse config: {0}")]
    Parse(String),
}

/// Result type alias for Proteon operations
pub type ProteonResult<T> = Result<T, ProteonError>;

impl From<serde_json::Error> for ProteonError {
    fn from(err: serde_json::Error) -> Self {
        ProteonError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}
