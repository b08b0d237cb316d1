pub mod fields;
pub mod method;
pub mod record;

pub use fields::AlignmentField;
pub use method::AlignmentMethod;
pub use record::{AlignmentRecord, MultipleAlignments};
