//! Defines the diagnostic and error types for the validation module.
use crate::expression::ExpressionPosition;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// The specific category of a validation diagnostic.
///
// Lets callers inspect diagnostics without matching on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ValidationErrorType {
    /// An if-expression condition that is not a required boolean.
    ConditionNotBooleanRequired,
    /// An if-expression arm whose type disagrees with the else branch.
    BranchTypeMismatch,
    /// A free-form error reported through `add_general_error`.
    General,
    UnexpectedArgumentType,
    UnexpectedArgumentCount,
    NonNumericType,
    UnexpectedType,
    ExpectedConstantValue,
}

/// A single diagnostic recorded during a validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpressionValidationError {
    /// Where in the source expression the problem was found.
    pub position: ExpressionPosition,
    /// The category of the diagnostic.
    pub error_type: ValidationErrorType,
    /// A human-readable message explaining the problem.
    pub message: String,
}

impl fmt::Display for ExpressionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Expression Validation Error at {}: {}", self.position, self.message)
    }
}

/// Returned when a caller asks a non-empty collector for a `Result`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Expression validation failed with {count} error(s):{report}")]
pub struct ValidationFailed {
    pub count: usize,
    pub report: String,
}

/// Failure to load a `ValidatorConfig`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid validator config: {0}")]
    Parse(#[from] serde_json::Error),
}
