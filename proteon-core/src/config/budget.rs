//! Upper bound on the size of a whole FASTA upload
//!
//! Without an explicit `max_fasta_file_length` the bound is the sum of the
//! per-field limits. A single oversized field can still slip under it; callers
//! use this as a cheap pre-check before parsing, the record validator does the
//! real per-field enforcement.

use super::FastaConfig;

/// Maximum accepted length of a FASTA text, in characters
pub fn max_fasta_length(config: &FastaConfig) -> usize {
    if let Some(total) = config.max_fasta_file_length {
        return total;
    }

    let mut total = config.max_description_length;
    // Unbounded comments contribute nothing
    if let Some(comments) = config.max_comments_length {
        total = total.saturating_add(comments);
    }
    total.saturating_add(config.max_sequence_length)
}
