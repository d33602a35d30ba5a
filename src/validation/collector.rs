//! The append-only diagnostic sink threaded through one validation pass.
use super::error::{ExpressionValidationError, ValidationErrorType, ValidationFailed};
use crate::expression::ExpressionPosition;
use crate::types::{MajorType, MinorType};
use std::ops::RangeInclusive;

/// Collects diagnostics in the order they are reported.
///
/// One collector belongs to exactly one pass. Entries are never removed,
/// reordered or deduplicated; whether an expression is valid is read back
/// from `has_errors` once the pass completes.
#[derive(Debug, Clone, Default)]
pub struct ErrorCollector {
    errors: Vec<ExpressionValidationError>,
}

impl ErrorCollector {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, position: &ExpressionPosition, error_type: ValidationErrorType, message: String) {
        self.errors.push(ExpressionValidationError {
            position: position.clone(),
            error_type,
            message,
        });
    }

    pub fn add_general_error(&mut self, position: &ExpressionPosition, message: impl Into<String>) {
        self.push(position, ValidationErrorType::General, message.into());
    }

    /// Records one of the validator's own typed diagnostics.
    pub(crate) fn add_typed_error(
        &mut self,
        position: &ExpressionPosition,
        error_type: ValidationErrorType,
        message: String,
    ) {
        self.push(position, error_type, message);
    }

    pub fn add_unexpected_argument_type(
        &mut self,
        position: &ExpressionPosition,
        name: &str,
        actual: MajorType,
        expected: &[MinorType],
        argument_index: usize,
    ) {
        let expected: Vec<&str> = expected.iter().map(|m| m.name()).collect();
        let msg = format!(
            "Unexpected argument type. Index :{} Name: {}, Type: {}, Expected type(s): [{}]",
            argument_index,
            name,
            actual.minor_type,
            expected.join(", ")
        );
        self.push(position, ValidationErrorType::UnexpectedArgumentType, msg);
    }

    pub fn add_unexpected_argument_count(
        &mut self,
        position: &ExpressionPosition,
        actual: usize,
        expected: &RangeInclusive<usize>,
    ) {
        let msg = format!(
            "Unexpected argument count. Actual argument count: {}, Expected range: [{}..{}]",
            actual,
            expected.start(),
            expected.end()
        );
        self.push(position, ValidationErrorType::UnexpectedArgumentCount, msg);
    }

    pub fn add_unexpected_argument_count_exact(
        &mut self,
        position: &ExpressionPosition,
        actual: usize,
        expected: usize,
    ) {
        let msg = format!(
            "Unexpected argument count. Actual argument count: {}, Expected count: {}",
            actual, expected
        );
        self.push(position, ValidationErrorType::UnexpectedArgumentCount, msg);
    }

    pub fn add_non_numeric_type(&mut self, position: &ExpressionPosition, actual: MinorType) {
        let msg = format!("Unexpected numeric type. Actual type: {}", actual);
        self.push(position, ValidationErrorType::NonNumericType, msg);
    }

    pub fn add_unexpected_type(&mut self, position: &ExpressionPosition, index: usize, actual: MinorType) {
        let msg = format!("Unexpected argument type. Actual type: {}, Index: {}", actual, index);
        self.push(position, ValidationErrorType::UnexpectedType, msg);
    }

    pub fn add_expected_constant_value(&mut self, position: &ExpressionPosition, actual: usize, name: &str) {
        let msg = format!("Unexpected constant value. Name: {}, Actual: {}", name, actual);
        self.push(position, ValidationErrorType::ExpectedConstantValue, msg);
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ExpressionValidationError] {
        &self.errors
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ExpressionValidationError> {
        self.errors.iter()
    }

    /// All diagnostics, each on its own line after a leading newline.
    pub fn to_error_string(&self) -> String {
        self.errors.iter().map(|e| format!("\n{}", e)).collect()
    }

    /// `Ok(())` for an empty collector, otherwise the full report.
    pub fn into_result(self) -> Result<(), ValidationFailed> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationFailed {
                count: self.errors.len(),
                report: self.to_error_string(),
            })
        }
    }

    /// The diagnostics as a JSON array.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.errors)
    }
}

impl<'a> IntoIterator for &'a ErrorCollector {
    type Item = &'a ExpressionValidationError;
    type IntoIter = std::slice::Iter<'a, ExpressionValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
