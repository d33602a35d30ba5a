//! The semantic validation pass over typed expression trees.
//!
//! `ExpressionValidator` applies each node's typing contract and records every
//! violation in a caller-owned `ErrorCollector`. Nothing in this module stops
//! a pass early or mutates the tree; an expression is valid exactly when its
//! collector ends up empty.

pub use self::batch::validate_batch;
pub use self::collector::ErrorCollector;
pub use self::config::{Traversal, ValidatorConfig};
pub use self::error::{ConfigError, ExpressionValidationError, ValidationErrorType, ValidationFailed};
pub use self::validator::ExpressionValidator;

mod batch;
mod collector;
mod config;
mod error;
mod validator;
mod rules {
    pub mod if_expr;
}
