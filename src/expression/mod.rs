//! The typed expression tree consumed by validation.
pub mod node;
pub mod position;

pub use node::{IfCondition, Children, LogicalExpression};
pub use position::ExpressionPosition;
