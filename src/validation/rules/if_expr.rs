//! Typing rules for if-expressions.
//!
//! Both scans run over every arm, in declaration order, regardless of what
//! the other scan found. Neither looks below the arm's immediate nodes.
use crate::expression::{IfCondition, LogicalExpression};
use crate::types::{DataMode, MinorType};
use crate::validation::{ErrorCollector, ValidationErrorType};

/// Every condition must be a `REQUIRED` `BIT`.
pub(crate) fn validate_conditions(conditions: &[IfCondition], errors: &mut ErrorCollector) {
    for (i, c) in conditions.iter().enumerate() {
        let mt = c.condition.major_type();
        if mt.mode != DataMode::Required || mt.minor_type != MinorType::Bit {
            let msg = format!(
                "Failure composing If Expression.  All conditions must return a required value and be of type boolean.  Condition {} was DatMode {} and Type {}.",
                i, mt.mode, mt.minor_type
            );
            errors.add_typed_error(
                c.condition.position(),
                ValidationErrorType::ConditionNotBooleanRequired,
                msg,
            );
        }
    }
}

/// Every arm must share the else branch's minor type, and may only be
/// `REPEATED` when the else branch is too.
///
/// A `REQUIRED` arm against a `REPEATED` else, or any `REQUIRED`/`OPTIONAL`
/// mix, is accepted. Errors are anchored at the arm's condition.
pub(crate) fn validate_branch_types(
    conditions: &[IfCondition],
    else_expression: &LogicalExpression,
    errors: &mut ErrorCollector,
) {
    let mt = else_expression.major_type();
    for (i, c) in conditions.iter().enumerate() {
        let inner = c.expression.major_type();
        if (inner.is_repeated() && !mt.is_repeated()) || inner.minor_type != mt.minor_type {
            let msg = format!(
                "Failure composing If Expression.  All expressions must return the same MajorType as the else expression.  The {} if condition returned type type {} but the else expression was of type {}",
                i, inner, mt
            );
            errors.add_typed_error(
                c.condition.position(),
                ValidationErrorType::BranchTypeMismatch,
                msg,
            );
        }
    }
}
