//! Field specifications and the record validator
//!
//! Every text field a record stores is described by a [`FieldSpec`]: its name
//! and a [`FieldKind`] tag. The kind decides which alphabet (if any) applies
//! and which configured limit bounds the length. [`RecordValidator::check`] is
//! the single dispatch point for both.

use crate::alphabet::{validate_field, AlphabetKind};
use proteon_core::{Config, ValidationError};

/// What kind of value a field holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Unaligned residues, `X` allowed
    AminoAcidSequence,
    /// Aligned residues, `X` and gaps allowed
    AminoAcidAlignment,
    /// Single-line free text
    Description,
    /// Multi-line free text
    Comments,
    /// Fixed-width PDB identifier
    PdbCode,
    /// Fixed-width PDB chain identifier
    PdbChain,
}

impl FieldKind {
    /// Alphabet the value must match, `None` for free text
    pub fn alphabet(&self) -> Option<AlphabetKind> {
        match self {
            Self::AminoAcidSequence => Some(AlphabetKind::SequenceWithWildcard),
            Self::AminoAcidAlignment => Some(AlphabetKind::AlignmentWithWildcard),
            Self::Description | Self::Comments | Self::PdbCode | Self::PdbChain => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    /// Must be present and non-empty
    pub required: bool,
}

impl FieldSpec {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }

    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }
}

/// A record whose text fields can be checked against their specs
pub trait Validated {
    /// Each stored text field with its current value, `None` when unset
    fn field_values(&self) -> Vec<(FieldSpec, Option<&str>)>;
}

/// Checks records against the configured limits
#[derive(Debug, Clone, Default)]
pub struct RecordValidator {
    config: Config,
}

impl RecordValidator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Length limit for a field kind, `None` when unbounded
    pub fn max_length(&self, kind: FieldKind) -> Option<usize> {
        let fasta = &self.config.fasta;
        match kind {
            FieldKind::AminoAcidSequence | FieldKind::AminoAcidAlignment => {
                Some(fasta.max_sequence_length)
            }
            FieldKind::Description => Some(fasta.max_description_length),
            FieldKind::Comments => fasta.max_comments_length,
            FieldKind::PdbCode => Some(self.config.alignment.pdb_code_length),
            FieldKind::PdbChain => Some(self.config.alignment.pdb_chain_length),
        }
    }

    /// Validate one value against its spec
    pub fn check(&self, spec: &FieldSpec, value: &str) -> Result<(), ValidationError> {
        if spec.required && value.is_empty() {
            return Err(ValidationError::Empty {
                field: spec.name.to_string(),
            });
        }

        if let Some(max) = self.max_length(spec.kind) {
            let actual = value.chars().count();
            if actual > max {
                return Err(ValidationError::TooLong {
                    field: spec.name.to_string(),
                    max,
                    actual,
                });
            }
        }

        match spec.kind.alphabet() {
            Some(kind) => validate_field(value, kind, spec.name),
            None => Ok(()),
        }
    }

    /// Validate every field of a record, stopping at the first failure
    pub fn validate<R: Validated + ?Sized>(&self, record: &R) -> Result<(), ValidationError> {
        for (spec, value) in record.field_values() {
            match value {
                Some(value) => self.check(&spec, value)?,
                None if spec.required => {
                    return Err(ValidationError::Empty {
                        field: spec.name.to_string(),
                    })
                }
                None => {}
            }
        }
        Ok(())
    }
}
