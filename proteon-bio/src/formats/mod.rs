pub mod fasta;
pub mod grishin;

// Re-export commonly used functions
pub use fasta::{format_fasta, parse_fasta};
pub use grishin::{parse_grishin_blocks, GrishinBlock, GrishinTag};
