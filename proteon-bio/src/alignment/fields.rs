//! Whitelisted structured exchange for alignment records
//!
//! Only the fields listed in [`AlignmentField::ALL`] cross the boundary.
//! Output additionally carries three derived keys: `FASTA`,
//! `target_grishin_tag` and `grishin_lines`.

use crate::alignment::{AlignmentMethod, AlignmentRecord};
use proteon_core::{FormatError, ProteonResult};
use serde_json::{Map, Value};
use std::fmt;
use tracing::warn;

pub const FASTA_KEY: &str = "FASTA";
pub const TAG_KEY: &str = "target_grishin_tag";
pub const GRISHIN_KEY: &str = "grishin_lines";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlignmentField {
    AlignmentMethod,
    Rank,
    QueryDescription,
    TargetDescription,
    TargetPdbCode,
    TargetPdbChain,
    QueryStart,
    QueryAlnSeq,
    TargetStart,
    TargetAlnSeq,
    ScoreLine,
    PCorrect,
    ThreadedTemplate,
}

impl AlignmentField {
    /// Exchange order
    pub const ALL: [AlignmentField; 13] = [
        Self::AlignmentMethod,
        Self::Rank,
        Self::QueryDescription,
        Self::TargetDescription,
        Self::TargetPdbCode,
        Self::TargetPdbChain,
        Self::QueryStart,
        Self::QueryAlnSeq,
        Self::TargetStart,
        Self::TargetAlnSeq,
        Self::ScoreLine,
        Self::PCorrect,
        Self::ThreadedTemplate,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::AlignmentMethod => "alignment_method",
            Self::Rank => "rank",
            Self::QueryDescription => "query_description",
            Self::TargetDescription => "target_description",
            Self::TargetPdbCode => "target_pdb_code",
            Self::TargetPdbChain => "target_pdb_chain",
            Self::QueryStart => "query_start",
            Self::QueryAlnSeq => "query_aln_seq",
            Self::TargetStart => "target_start",
            Self::TargetAlnSeq => "target_aln_seq",
            Self::ScoreLine => "score_line",
            Self::PCorrect => "p_correct",
            Self::ThreadedTemplate => "threaded_template",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    fn get(&self, record: &AlignmentRecord) -> Option<Value> {
        let text = |v: &Option<String>| v.as_ref().map(|s| Value::String(s.clone()));
        match self {
            Self::AlignmentMethod => record
                .alignment_method
                .map(|m| Value::String(m.name().to_string())),
            Self::Rank => record.rank.map(Value::from),
            Self::QueryDescription => text(&record.query_description),
            Self::TargetDescription => text(&record.target_description),
            Self::TargetPdbCode => text(&record.target_pdb_code),
            Self::TargetPdbChain => text(&record.target_pdb_chain),
            Self::QueryStart => record.query_start.map(Value::from),
            Self::QueryAlnSeq => text(&record.query_aln_seq),
            Self::TargetStart => record.target_start.map(Value::from),
            Self::TargetAlnSeq => text(&record.target_aln_seq),
            Self::ScoreLine => text(&record.score_line),
            Self::PCorrect => record.p_correct.map(Value::from),
            Self::ThreadedTemplate => text(&record.threaded_template),
        }
    }

    fn set(&self, record: &mut AlignmentRecord, value: &Value) -> Result<(), FormatError> {
        let field = self.name();
        match self {
            Self::AlignmentMethod => {
                record.alignment_method = match value {
                    Value::Null => None,
                    Value::String(name) => Some(AlignmentMethod::from_name_lenient(name)),
                    other => {
                        warn!(method = %other, "alignment method is not a string, treating it as user input");
                        Some(AlignmentMethod::User)
                    }
                }
            }
            Self::Rank => record.rank = integer(field, value)?,
            Self::QueryDescription => record.query_description = string(field, value)?,
            Self::TargetDescription => record.target_description = string(field, value)?,
            Self::TargetPdbCode => record.target_pdb_code = string(field, value)?,
            Self::TargetPdbChain => record.target_pdb_chain = string(field, value)?,
            Self::QueryStart => record.query_start = integer(field, value)?,
            Self::QueryAlnSeq => record.query_aln_seq = string(field, value)?,
            Self::TargetStart => record.target_start = integer(field, value)?,
            Self::TargetAlnSeq => record.target_aln_seq = string(field, value)?,
            Self::ScoreLine => record.score_line = string(field, value)?,
            Self::PCorrect => record.p_correct = number(field, value)?,
            Self::ThreadedTemplate => record.threaded_template = string(field, value)?,
        }
        Ok(())
    }
}

impl fmt::Display for AlignmentField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn string(field: &'static str, value: &Value) -> Result<Option<String>, FormatError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        _ => Err(FormatError::FieldType { field, expected: "string" }),
    }
}

fn integer(field: &'static str, value: &Value) -> Result<Option<i64>, FormatError> {
    match value {
        Value::Null => Ok(None),
        other => other
            .as_i64()
            .map(Some)
            .ok_or(FormatError::FieldType { field, expected: "integer" }),
    }
}

fn number(field: &'static str, value: &Value) -> Result<Option<f64>, FormatError> {
    match value {
        Value::Null => Ok(None),
        other => other
            .as_f64()
            .map(Some)
            .ok_or(FormatError::FieldType { field, expected: "number" }),
    }
}

impl AlignmentRecord {
    /// Assign every whitelisted key present in `data`.
    ///
    /// Absent keys leave the record untouched and unknown keys are ignored.
    /// On a type error the fields assigned before it keep their new values.
    pub fn load(&mut self, data: &Map<String, Value>) -> Result<(), FormatError> {
        for field in AlignmentField::ALL {
            if let Some(value) = data.get(field.name()) {
                field.set(self, value)?;
            }
        }
        Ok(())
    }

    /// Build a fresh record from a JSON object
    pub fn from_json(value: &Value) -> ProteonResult<Self> {
        let data = value.as_object().ok_or_else(|| {
            FormatError::MalformedBlock("alignment data must be a JSON object".to_string())
        })?;
        let mut record = Self::new();
        record.load(data)?;
        Ok(record)
    }

    /// Whitelisted fields plus the derived keys; never fails
    pub fn dump(&self) -> Map<String, Value> {
        let mut data = Map::new();

        for field in AlignmentField::ALL {
            match field.get(self) {
                Some(value) => {
                    data.insert(field.name().to_string(), value);
                }
                None => warn!("Missing data for {} in the alignment", field),
            }
        }

        let fasta = match &self.full_query_sequence {
            Some(query) => Value::String(query.formatted()),
            None => {
                warn!("Missing data for {} in the alignment", FASTA_KEY);
                Value::Null
            }
        };
        data.insert(FASTA_KEY.to_string(), fasta);
        data.insert(TAG_KEY.to_string(), derived(TAG_KEY, self.target_grishin_tag()));
        data.insert(GRISHIN_KEY.to_string(), derived(GRISHIN_KEY, self.grishin_lines()));

        data
    }
}

fn derived(key: &str, value: Result<String, FormatError>) -> Value {
    match value {
        Ok(text) => Value::String(text),
        Err(e) => {
            warn!(error = %e, "Missing data for {} in the alignment", key);
            Value::Null
        }
    }
}
