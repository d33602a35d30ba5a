//! Semantic validation for typed expression trees.
//!
//! The binder and type-inference stages hand over a `LogicalExpression` whose
//! nodes already carry a `MajorType`. `ExpressionValidator` checks each node's
//! typing contract and reports every violation to an `ErrorCollector`:
//!
//! ```
//! use expr_validation_core::expression::{ExpressionPosition, IfCondition, LogicalExpression};
//! use expr_validation_core::validation::{ErrorCollector, ExpressionValidator};
//!
//! let pos = ExpressionPosition::new("if (a) then 1 else 2 end", 0);
//! let expr = LogicalExpression::if_expr(
//!     [IfCondition::new(
//!         LogicalExpression::schema_path("a", pos.clone()),
//!         LogicalExpression::IntConstant { value: 1, position: pos.clone() },
//!     )],
//!     LogicalExpression::IntConstant { value: 2, position: pos.clone() },
//!     pos,
//! );
//!
//! let mut errors = ErrorCollector::new();
//! ExpressionValidator::new().validate(&expr, &mut errors);
//! // `a` is late-bound and optional, so it is not a required boolean.
//! assert_eq!(errors.error_count(), 1);
//! ```

pub mod expression;
pub mod functions;
pub mod types;
pub mod validation;

pub use expression::{ExpressionPosition, IfCondition, LogicalExpression};
pub use functions::{ArgumentValidator, FunctionDefinition};
pub use types::{DataMode, MajorType, MinorType};
pub use validation::{validate_batch, ErrorCollector, ExpressionValidator, ValidatorConfig};
