pub mod canonical;
pub mod types;

// Re-export commonly used types
pub use canonical::{canonicalize, content_hash, is_canonical};
pub use types::{FastaRecord, DEFAULT_LINE_LENGTH};
