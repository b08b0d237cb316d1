//! Text format errors for FASTA and Grishin input

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// FASTA text yielded no residue lines
    #[error("No FASTA sequence given. Make sure your FASTA is formatted properly and try again")]
    EmptySequence,

    /// Structurally unparseable input
    #[error("malformed block: {0}")]
    MalformedBlock(String),

    /// A field needed to render the record is unset
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// Rank plus method offset does not fit the three digit tag suffix
    #[error("grishin tag number {tag_number} does not fit in three digits")]
    TagOverflow { tag_number: i64 },

    /// Structured input carried a value of the wrong type
    #[error("field {field} expects {expected}")]
    FieldType {
        field: &'static str,
        expected: &'static str,
    },
}
