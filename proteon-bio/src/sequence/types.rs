use crate::sequence::canonical::{canonicalize, content_hash};
use crate::validator::{FieldKind, FieldSpec, RecordValidator, Validated};
use proteon_core::{FormatError, SHA256Hash, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Default FASTA body width
pub const DEFAULT_LINE_LENGTH: usize = 80;

const DESCRIPTION: FieldSpec = FieldSpec::new("description", FieldKind::Description);
const COMMENTS: FieldSpec = FieldSpec::new("comments", FieldKind::Comments);
const SEQUENCE: FieldSpec = FieldSpec::required("sequence", FieldKind::AminoAcidSequence);

/// One protein FASTA entry.
///
/// Freshly parsed or hand-built records may hold non-canonical text; [`save`]
/// canonicalizes them and attaches the content hash the storage layer keys
/// uniqueness on.
///
/// [`save`]: FastaRecord::save
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FastaRecord {
    pub description: String,
    #[serde(default)]
    pub comments: String,
    pub sequence: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sha256: Option<SHA256Hash>,
}

impl FastaRecord {
    pub fn new(description: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            comments: String::new(),
            sequence: sequence.into(),
            sha256: None,
        }
    }

    pub fn with_comments(mut self, comments: impl Into<String>) -> Self {
        self.comments = comments.into();
        self
    }

    /// Build a record from FASTA text. Nothing is canonicalized or hashed yet.
    pub fn parse(text: &str) -> Result<Self, FormatError> {
        crate::formats::fasta::parse_fasta(text)
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Header line(s).
    ///
    /// With `allow_comments` and non-empty comments the `;` dialect is used:
    /// `;description` followed by one `; ` line per comment line.
    pub fn header(&self, allow_comments: bool) -> String {
        if allow_comments && !self.comments.is_empty() {
            let mut header = format!(";{}", self.description);
            for comment in self.comments.lines() {
                header.push_str("\n; ");
                header.push_str(comment);
            }
            header
        } else {
            format!(">{}", self.description)
        }
    }

    /// Sequence wrapped to `line_length` characters per line; 0 disables wrapping
    pub fn body(&self, line_length: usize) -> String {
        if line_length == 0 {
            return self.sequence.clone();
        }
        let residues: Vec<char> = self.sequence.chars().collect();
        residues
            .chunks(line_length)
            .map(|line| line.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn format(&self, allow_comments: bool, line_length: usize) -> String {
        crate::formats::fasta::format_fasta(self, allow_comments, line_length)
    }

    /// `>` header and 80-column body
    pub fn formatted(&self) -> String {
        self.format(false, DEFAULT_LINE_LENGTH)
    }

    /// Digest of the current sequence bytes
    pub fn hash(&self) -> SHA256Hash {
        content_hash(self.sequence.as_bytes())
    }

    /// Digest attached by [`FastaRecord::save`], if it has run
    pub fn content_hash(&self) -> Option<&SHA256Hash> {
        self.sha256.as_ref()
    }

    /// Trim the description, drop a leading `>`/`;`, canonicalize the sequence
    pub fn canonicalize(&mut self) {
        self.description = self
            .description
            .trim()
            .trim_start_matches(['>', ';'])
            .to_string();
        self.sequence = canonicalize(&self.sequence);
    }

    /// Prepare the record for persistence.
    ///
    /// Canonicalizes, validates against the configured limits and attaches the
    /// content hash unless one is already present. The returned digest is what
    /// the storage layer enforces uniqueness on.
    pub fn save(&mut self, validator: &RecordValidator) -> Result<SHA256Hash, ValidationError> {
        self.canonicalize();
        validator.validate(self)?;

        let hash = *self.sha256.get_or_insert_with(|| content_hash(self.sequence.as_bytes()));
        debug!(
            description = %self.description,
            length = self.sequence.len(),
            sha256 = %hash.truncated(12),
            "finalized FASTA record"
        );
        Ok(hash)
    }
}

// The digest is derived from the sequence, so content decides equality.
impl PartialEq for FastaRecord {
    fn eq(&self, other: &Self) -> bool {
        self.description == other.description
            && self.comments == other.comments
            && self.sequence == other.sequence
    }
}

impl Eq for FastaRecord {}

impl Validated for FastaRecord {
    fn field_values(&self) -> Vec<(FieldSpec, Option<&str>)> {
        vec![
            (DESCRIPTION, Some(self.description.as_str())),
            (COMMENTS, Some(self.comments.as_str())),
            (SEQUENCE, Some(self.sequence.as_str())),
        ]
    }
}

impl fmt::Display for FastaRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}
