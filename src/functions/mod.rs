//! Function definitions referenced from call nodes, and the standard
//! argument validators they delegate to.
pub mod definition;
pub mod validators;

pub use definition::{ArgumentValidator, FunctionDefinition};
pub use validators::{
    AllowedTypeList, AnyTypeAllowed, ComparableArguments, ConstantArguments, NumericTypeAllowed,
};
