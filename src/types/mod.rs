//! Type descriptors attached to every expression node by the inference stage.
//!
//! A `MajorType` pairs a base kind (`MinorType`) with a cardinality/nullability
//! qualifier (`DataMode`). Validation only ever reads these values.
pub mod major;

pub use major::{DataMode, MajorType, MinorType};
