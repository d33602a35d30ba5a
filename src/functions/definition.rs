//! Function definitions and the argument-validation capability they carry.
use crate::expression::{ExpressionPosition, LogicalExpression};
use crate::validation::ErrorCollector;
use std::fmt;
use std::sync::Arc;

/// Function-specific arity and type checks for a call's arguments.
///
/// Implementations report every problem they find to `errors` and never stop
/// early. Whether to validate argument sub-trees is up to the implementation.
pub trait ArgumentValidator: fmt::Debug + Send + Sync {
    fn validate_arguments(
        &self,
        position: &ExpressionPosition,
        args: &[LogicalExpression],
        errors: &mut ErrorCollector,
    );

    /// Names used to refer to arguments in diagnostics.
    fn argument_names(&self, arg_count: usize) -> Vec<String> {
        (0..arg_count).map(|i| format!("arg{}", i)).collect()
    }
}

/// A resolved function, shared by every call node that references it.
#[derive(Debug, Clone)]
pub struct FunctionDefinition {
    name: String,
    validator: Arc<dyn ArgumentValidator>,
    is_operator: bool,
}

impl FunctionDefinition {
    pub fn new(name: impl Into<String>, validator: Arc<dyn ArgumentValidator>) -> Self {
        Self {
            name: name.into(),
            validator,
            is_operator: false,
        }
    }

    /// A definition for an infix/prefix operator such as `+` or `!`.
    pub fn operator(name: impl Into<String>, validator: Arc<dyn ArgumentValidator>) -> Self {
        Self {
            is_operator: true,
            ..Self::new(name, validator)
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_operator(&self) -> bool {
        self.is_operator
    }

    pub fn argument_validator(&self) -> &dyn ArgumentValidator {
        self.validator.as_ref()
    }
}
