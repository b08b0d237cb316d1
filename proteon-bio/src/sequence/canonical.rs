//! Canonical residue strings and their content hashes

use once_cell::sync::Lazy;
use proteon_core::SHA256Hash;
use regex::Regex;

// Word characters minus underscore: letters and digits in any script
static ALNUM_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\W_]+").expect("valid regex"));

/// Concatenate every alphanumeric run of `raw` and uppercase the result.
///
/// Whitespace, line breaks and punctuation anywhere in the input are dropped.
pub fn canonicalize(raw: &str) -> String {
    ALNUM_RUN
        .find_iter(raw)
        .map(|m| m.as_str())
        .collect::<String>()
        .to_uppercase()
}

/// SHA256 over exactly the bytes given
pub fn content_hash(bytes: &[u8]) -> SHA256Hash {
    SHA256Hash::compute(bytes)
}

/// True when `canonicalize` would return the input unchanged
pub fn is_canonical(raw: &str) -> bool {
    canonicalize(raw) == raw
}
