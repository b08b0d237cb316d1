//! Protein sequence and pairwise alignment records for Proteon

pub mod alignment;
pub mod alphabet;
pub mod formats;
pub mod sequence;
pub mod validator;

// Re-export commonly used types
pub use alignment::{AlignmentField, AlignmentMethod, AlignmentRecord, MultipleAlignments};
pub use alphabet::{validate, AlphabetKind};
pub use sequence::{canonicalize, content_hash, FastaRecord};
pub use validator::{FieldKind, FieldSpec, RecordValidator, Validated};
// Re-export codec functions
pub use formats::{format_fasta, parse_fasta, parse_grishin_blocks, GrishinBlock, GrishinTag};
