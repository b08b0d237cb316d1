use crate::alignment::AlignmentMethod;
use crate::formats::grishin::{GrishinBlock, GrishinTag};
use crate::sequence::{content_hash, FastaRecord};
use crate::validator::{FieldKind, FieldSpec, RecordValidator, Validated};
use chrono::{DateTime, Utc};
use proteon_core::{AlignmentConfig, FormatError, SHA256Hash, ValidationError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Group key shared by alignments submitted together
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultipleAlignments {
    pub id: Uuid,
    pub created: DateTime<Utc>,
}

impl MultipleAlignments {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            created: Utc::now(),
        }
    }
}

impl Default for MultipleAlignments {
    fn default() -> Self {
        Self::new()
    }
}

/// One pairwise alignment of a query against a PDB template.
///
/// Every stored field except `active` may be unset: records are built up
/// field by field from structured input and are valid in that partial state.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignmentRecord {
    pub alignment_method: Option<AlignmentMethod>,
    pub rank: Option<i64>,
    pub active: bool,

    /// Full, unaligned query; shared between the alignments of one query
    pub full_query_sequence: Option<Arc<FastaRecord>>,
    pub multiple_alignments: Option<MultipleAlignments>,

    // modeled sequence
    /// 1-based
    pub query_start: Option<i64>,
    pub query_description: Option<String>,
    pub query_aln_seq: Option<String>,
    pub modified_query_aln_seq: Option<String>,

    // template
    /// 1-based
    pub target_start: Option<i64>,
    pub target_description: Option<String>,
    pub target_pdb_code: Option<String>,
    pub target_pdb_chain: Option<String>,
    pub target_aln_seq: Option<String>,
    pub modified_target_aln_seq: Option<String>,

    pub score_line: Option<String>,
    pub p_correct: Option<f64>,
    pub threaded_template: Option<String>,
}

impl Default for AlignmentRecord {
    fn default() -> Self {
        Self {
            alignment_method: None,
            rank: None,
            active: true,
            full_query_sequence: None,
            multiple_alignments: None,
            query_start: None,
            query_description: None,
            query_aln_seq: None,
            modified_query_aln_seq: None,
            target_start: None,
            target_description: None,
            target_pdb_code: None,
            target_pdb_chain: None,
            target_aln_seq: None,
            modified_target_aln_seq: None,
            score_line: None,
            p_correct: None,
            threaded_template: None,
        }
    }
}

impl AlignmentRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: Arc<FastaRecord>) -> Self {
        self.full_query_sequence = Some(query);
        self
    }

    pub fn with_group(mut self, group: MultipleAlignments) -> Self {
        self.multiple_alignments = Some(group);
        self
    }

    /// Method used for tagging; an unset method tags like user input
    pub fn method(&self) -> AlignmentMethod {
        self.alignment_method.unwrap_or(AlignmentMethod::User)
    }

    pub fn grishin_tag(&self) -> Result<GrishinTag, FormatError> {
        Ok(GrishinTag::new(
            required(&self.target_pdb_code, "target_pdb_code")?,
            required(&self.target_pdb_chain, "target_pdb_chain")?,
            self.method(),
            self.rank.ok_or(FormatError::MissingField("rank"))?,
        ))
    }

    /// `{pdb_code}{pdb_chain}_{rank + offset}`, e.g. `1ABCA_205`
    pub fn target_grishin_tag(&self) -> Result<String, FormatError> {
        self.grishin_tag()?.render()
    }

    pub fn grishin_block(&self) -> Result<GrishinBlock, FormatError> {
        Ok(GrishinBlock {
            query_description: self.query_description.clone().unwrap_or_default(),
            target_tag: self.target_grishin_tag()?,
            query_start: self.query_start.ok_or(FormatError::MissingField("query_start"))?,
            query_aln_seq: required(&self.query_aln_seq, "query_aln_seq")?.to_string(),
            target_start: self.target_start.ok_or(FormatError::MissingField("target_start"))?,
            target_aln_seq: required(&self.target_aln_seq, "target_aln_seq")?.to_string(),
        })
    }

    /// The record rendered as a Grishin block
    pub fn grishin_lines(&self) -> Result<String, FormatError> {
        self.grishin_block()?.render()
    }

    /// Digest of [`AlignmentRecord::grishin_lines`]
    pub fn hash(&self) -> Result<SHA256Hash, FormatError> {
        Ok(content_hash(self.grishin_lines()?.as_bytes()))
    }

    /// Build a record from one Grishin block
    pub fn from_grishin(text: &str, config: &AlignmentConfig) -> Result<Self, FormatError> {
        let block = GrishinBlock::parse(text)?;
        Self::from_block(block, config)
    }

    pub fn from_block(block: GrishinBlock, config: &AlignmentConfig) -> Result<Self, FormatError> {
        let tag = block.tag(config)?;
        Ok(Self {
            alignment_method: Some(tag.method),
            rank: Some(tag.rank),
            query_start: Some(block.query_start),
            query_description: Some(block.query_description),
            query_aln_seq: Some(block.query_aln_seq),
            target_start: Some(block.target_start),
            target_pdb_code: Some(tag.pdb_code),
            target_pdb_chain: Some(tag.pdb_chain),
            target_aln_seq: Some(block.target_aln_seq),
            ..Self::default()
        })
    }

    /// Check stored fields and the referenced query record
    pub fn validate(&self, validator: &RecordValidator) -> Result<(), ValidationError> {
        validator.validate(self)?;
        if let Some(query) = &self.full_query_sequence {
            validator.validate(query.as_ref())?;
        }
        Ok(())
    }
}

fn required<'a>(value: &'a Option<String>, field: &'static str) -> Result<&'a str, FormatError> {
    value.as_deref().ok_or(FormatError::MissingField(field))
}

const QUERY_DESCRIPTION: FieldSpec = FieldSpec::new("query_description", FieldKind::Description);
const QUERY_ALN_SEQ: FieldSpec = FieldSpec::required("query_aln_seq", FieldKind::AminoAcidAlignment);
const MODIFIED_QUERY_ALN_SEQ: FieldSpec =
    FieldSpec::new("modified_query_aln_seq", FieldKind::AminoAcidAlignment);
const TARGET_DESCRIPTION: FieldSpec = FieldSpec::new("target_description", FieldKind::Description);
const TARGET_PDB_CODE: FieldSpec = FieldSpec::required("target_pdb_code", FieldKind::PdbCode);
const TARGET_PDB_CHAIN: FieldSpec = FieldSpec::required("target_pdb_chain", FieldKind::PdbChain);
const TARGET_ALN_SEQ: FieldSpec = FieldSpec::required("target_aln_seq", FieldKind::AminoAcidAlignment);
const MODIFIED_TARGET_ALN_SEQ: FieldSpec =
    FieldSpec::new("modified_target_aln_seq", FieldKind::AminoAcidAlignment);

impl Validated for AlignmentRecord {
    fn field_values(&self) -> Vec<(FieldSpec, Option<&str>)> {
        vec![
            (QUERY_DESCRIPTION, self.query_description.as_deref()),
            (QUERY_ALN_SEQ, self.query_aln_seq.as_deref()),
            (MODIFIED_QUERY_ALN_SEQ, self.modified_query_aln_seq.as_deref()),
            (TARGET_DESCRIPTION, self.target_description.as_deref()),
            (TARGET_PDB_CODE, self.target_pdb_code.as_deref()),
            (TARGET_PDB_CHAIN, self.target_pdb_chain.as_deref()),
            (TARGET_ALN_SEQ, self.target_aln_seq.as_deref()),
            (MODIFIED_TARGET_ALN_SEQ, self.modified_target_aln_seq.as_deref()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proteon_core::Config;

    fn sample() -> AlignmentRecord {
        AlignmentRecord {
            alignment_method: Some(AlignmentMethod::HhSearch),
            rank: Some(5),
            query_start: Some(1),
            query_description: Some("T0999".to_string()),
            query_aln_seq: Some("ACD-EFGH".to_string()),
            target_start: Some(1),
            target_pdb_code: Some("1ABC".to_string()),
            target_pdb_chain: Some("A".to_string()),
            target_aln_seq: Some("ACDKEF-H".to_string()),
            p_correct: Some(0.87),
            ..AlignmentRecord::default()
        }
    }

    #[test]
    fn test_new_record_is_active_and_empty() {
        let record = AlignmentRecord::new();
        assert!(record.active);
        assert_eq!(record.alignment_method, None);
        assert_eq!(record.rank, None);
    }

    #[test]
    fn test_target_grishin_tag_per_method() {
        let mut record = sample();
        assert_eq!(record.target_grishin_tag().unwrap(), "1ABCA_205");

        record.alignment_method = Some(AlignmentMethod::SparksX);
        assert_eq!(record.target_grishin_tag().unwrap(), "1ABCA_305");

        record.alignment_method = Some(AlignmentMethod::User);
        assert_eq!(record.target_grishin_tag().unwrap(), "1ABCA_405");

        record.alignment_method = None;
        assert_eq!(record.target_grishin_tag().unwrap(), "1ABCA_405");
    }

    #[test]
    fn test_tag_requires_rank_and_target() {
        let mut record = sample();
        record.rank = None;
        assert_eq!(record.target_grishin_tag(), Err(FormatError::MissingField("rank")));

        let mut record = sample();
        record.target_pdb_chain = None;
        assert_eq!(
            record.target_grishin_tag(),
            Err(FormatError::MissingField("target_pdb_chain"))
        );
    }

    #[test]
    fn test_grishin_lines_use_zero_based_starts() {
        let lines = sample().grishin_lines().unwrap();
        assert_eq!(
            lines,
            "## T0999 1ABCA_205\n#  \nscores_from_program: 0\n0 ACD-EFGH\n0 ACDKEF-H\n--\n\n"
        );

        let body: Vec<&str> = lines.lines().collect();
        assert!(body[3].starts_with("0 "));
        assert!(body[4].starts_with("0 "));
    }

    #[test]
    fn test_grishin_lines_without_description() {
        let mut record = sample();
        record.query_description = None;
        assert!(record.grishin_lines().unwrap().starts_with("##  1ABCA_205\n"));
    }

    #[test]
    fn test_grishin_lines_report_missing_start() {
        let mut record = sample();
        record.target_start = None;
        assert_eq!(record.grishin_lines(), Err(FormatError::MissingField("target_start")));
    }

    #[test]
    fn test_hash_covers_grishin_text() {
        let record = sample();
        let hash = record.hash().unwrap();
        assert_eq!(hash, SHA256Hash::compute(record.grishin_lines().unwrap().as_bytes()));

        let mut other = sample();
        other.rank = Some(6);
        assert_ne!(other.hash().unwrap(), hash);

        // Fields outside the block do not change identity
        let mut scored = sample();
        scored.p_correct = Some(0.1);
        assert_eq!(scored.hash().unwrap(), hash);
    }

    #[test]
    fn test_from_grishin_round_trip() {
        let record = sample();
        let text = record.grishin_lines().unwrap();
        let parsed = AlignmentRecord::from_grishin(&text, &AlignmentConfig::default()).unwrap();

        assert_eq!(parsed.alignment_method, Some(AlignmentMethod::HhSearch));
        assert_eq!(parsed.rank, Some(5));
        assert_eq!(parsed.target_pdb_code.as_deref(), Some("1ABC"));
        assert_eq!(parsed.target_pdb_chain.as_deref(), Some("A"));
        assert_eq!(parsed.grishin_lines().unwrap(), text);
    }

    #[test]
    fn test_validate_alignment_alphabets() {
        let validator = RecordValidator::default();
        assert!(sample().validate(&validator).is_ok());

        let mut record = sample();
        record.modified_target_aln_seq = Some("AC*D".to_string());
        let err = record.validate(&validator).unwrap_err();
        assert_eq!(err.field(), "modified_target_aln_seq");
    }

    #[test]
    fn test_validate_pdb_code_width() {
        let validator = RecordValidator::new(Config::default());
        let mut record = sample();
        record.target_pdb_code = Some("1ABCD".to_string());
        assert!(matches!(
            record.validate(&validator),
            Err(ValidationError::TooLong { max: 4, .. })
        ));
    }

    #[test]
    fn test_validate_checks_query_record() {
        let validator = RecordValidator::default();
        let query = Arc::new(FastaRecord::new("T0999", "ACD-EFGH"));
        let record = sample().with_query(query);
        let err = record.validate(&validator).unwrap_err();
        assert_eq!(err.field(), "sequence");
    }

    #[test]
    fn test_query_is_shared_between_alignments() {
        let query = Arc::new(FastaRecord::new("T0999", "ACDEFGH"));
        let group = MultipleAlignments::new();
        let first = sample().with_query(Arc::clone(&query)).with_group(group.clone());
        let mut second = sample().with_query(Arc::clone(&query)).with_group(group.clone());
        second.rank = Some(6);

        assert_eq!(Arc::strong_count(&query), 3);
        assert_eq!(first.multiple_alignments, second.multiple_alignments);
        assert_ne!(first.target_grishin_tag(), second.target_grishin_tag());
    }
}
