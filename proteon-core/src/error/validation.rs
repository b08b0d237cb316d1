//! Validation error types for record fields

use std::fmt;

/// A field value rejected by its alphabet policy or length limit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A character outside the allowed alphabet
    InvalidResidue {
        /// Name of the alphabet policy that rejected the value
        policy: String,
        /// Record field the value belongs to
        field: String,
        residue: char,
        /// Character offset of the first offending residue
        position: usize,
    },
    /// Value longer than the configured limit
    TooLong {
        field: String,
        max: usize,
        actual: usize,
    },
    /// Required value is empty
    Empty { field: String },
}

impl ValidationError {
    /// Record field the error refers to
    pub fn field(&self) -> &str {
        match self {
            Self::InvalidResidue { field, .. } | Self::TooLong { field, .. } | Self::Empty { field } => {
                field
            }
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidResidue {
                policy,
                field,
                residue,
                position,
            } => write!(
                f,
                "{}: residue {:?} at position {} is not allowed by the {} policy",
                field, residue, position, policy
            ),
            Self::TooLong { field, max, actual } => {
                write!(f, "{}: length {} exceeds the limit of {}", field, actual, max)
            }
            Self::Empty { field } => write!(f, "{}: value must not be empty", field),
        }
    }
}

impl std::error::Error for ValidationError {}
