pub mod budget;
pub mod fasta;
pub mod grishin;
