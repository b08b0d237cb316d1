//! Single-record protein FASTA reader and writer
//!
//! Input may use `>` or the older `;` header convention, carry `;` comment
//! lines, and separate lines either with real newlines or with the literal
//! two-character `\n` escape some clients still send.

use crate::sequence::FastaRecord;
use proteon_core::FormatError;

/// Split on real newlines and on literal `\n` escapes
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split("\\n").flat_map(|chunk| chunk.split('\n'))
}

/// Parse FASTA text into one record.
///
/// Lines are right-trimmed, then classified:
/// - line 0 starting with `>` or `;` is the description;
/// - a later line starting with `;` is a comment, except line 1, which is
///   read as sequence (long-standing behaviour clients depend on);
/// - anything else is appended to the sequence.
///
/// The sequence is not canonicalized here, see [`FastaRecord::save`].
pub fn parse_fasta(text: &str) -> Result<FastaRecord, FormatError> {
    let mut record = FastaRecord::default();

    for (i, line) in split_lines(text).enumerate() {
        let line = line.trim_end();

        if i == 0 && (line.starts_with('>') || line.starts_with(';')) {
            record.description = line[1..].to_string();
        } else if line.starts_with(';') && i != 1 {
            record.comments.push_str(&line[1..]);
            record.comments.push('\n');
        } else {
            record.sequence.push_str(line);
        }
    }

    if record.sequence.is_empty() {
        return Err(FormatError::EmptySequence);
    }

    Ok(record)
}

/// Render a record as FASTA text: header, newline, wrapped body.
///
/// No trailing newline is added.
pub fn format_fasta(record: &FastaRecord, allow_comments: bool, line_length: usize) -> String {
    let mut fasta = record.header(allow_comments);
    fasta.push('\n');
    fasta.push_str(&record.body(line_length));
    fasta
}
