//! Amino acid alphabets and residue validation

use proteon_core::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The 20 canonical one-letter amino acid codes
pub const AMINO_ACIDS: &str = "ACDEFGHIKLMNPQRSTVWY";

/// Residue code for any non-canonical amino acid
pub const NON_CANONICAL: char = 'X';

/// Gap marker in aligned sequences
pub const GAP: char = '-';

/// Which residues a string may contain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlphabetKind {
    /// Canonical residues only
    Sequence,
    /// Canonical residues plus `X`
    SequenceWithWildcard,
    /// Canonical residues plus gaps
    Alignment,
    /// Canonical residues, `X` and gaps
    AlignmentWithWildcard,
}

impl AlphabetKind {
    pub const ALL: [AlphabetKind; 4] = [
        Self::Sequence,
        Self::SequenceWithWildcard,
        Self::Alignment,
        Self::AlignmentWithWildcard,
    ];

    /// Stable policy name reported in validation errors
    pub fn policy_name(&self) -> &'static str {
        match self {
            Self::Sequence => "amino-acid",
            Self::SequenceWithWildcard => "amino-acid-with-non-canonical",
            Self::Alignment => "amino-acid-alignment",
            Self::AlignmentWithWildcard => "amino-acid-with-non-canonical-alignment",
        }
    }

    pub fn allows_wildcard(&self) -> bool {
        matches!(self, Self::SequenceWithWildcard | Self::AlignmentWithWildcard)
    }

    pub fn allows_gap(&self) -> bool {
        matches!(self, Self::Alignment | Self::AlignmentWithWildcard)
    }

    /// Membership test for a single character
    pub fn contains(&self, c: char) -> bool {
        match c {
            'A' | 'C' | 'D' | 'E' | 'F' | 'G' | 'H' | 'I' | 'K' | 'L' | 'M' | 'N' | 'P' | 'Q'
            | 'R' | 'S' | 'T' | 'V' | 'W' | 'Y' => true,
            NON_CANONICAL => self.allows_wildcard(),
            GAP => self.allows_gap(),
            _ => false,
        }
    }

    /// Every allowed character, canonical residues first
    pub fn symbols(&self) -> String {
        let mut symbols = AMINO_ACIDS.to_string();
        if self.allows_wildcard() {
            symbols.push(NON_CANONICAL);
        }
        if self.allows_gap() {
            symbols.push(GAP);
        }
        symbols
    }
}

impl fmt::Display for AlphabetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.policy_name())
    }
}

/// Check that every character of `text` belongs to `kind`.
///
/// The whole string must match; the empty string is valid.
pub fn validate(text: &str, kind: AlphabetKind) -> Result<(), ValidationError> {
    validate_field(text, kind, "value")
}

/// Like [`validate`], naming the record field in the error
pub fn validate_field(text: &str, kind: AlphabetKind, field: &str) -> Result<(), ValidationError> {
    match text.chars().enumerate().find(|(_, c)| !kind.contains(*c)) {
        None => Ok(()),
        Some((position, residue)) => Err(ValidationError::InvalidResidue {
            policy: kind.policy_name().to_string(),
            field: field.to_string(),
            residue,
            position,
        }),
    }
}
