/// Core types shared across all Proteon modules
pub mod hash;

pub use hash::SHA256Hash;
