//! Validation of many independent expressions at once.
use super::collector::ErrorCollector;
use super::validator::ExpressionValidator;
use crate::expression::LogicalExpression;
use rayon::prelude::*;
use tracing::{debug, instrument};

/// Validates each expression with its own collector.
///
/// The returned collectors line up with `exprs`. Runs on the rayon pool
/// unless `parallel_batch` is disabled in the validator's config.
#[instrument(skip_all, fields(exprs = exprs.len()))]
pub fn validate_batch(validator: &ExpressionValidator, exprs: &[LogicalExpression]) -> Vec<ErrorCollector> {
    let validate_one = |expr: &LogicalExpression| {
        let mut errors = ErrorCollector::new();
        validator.validate_root(expr, &mut errors);
        errors
    };

    let results: Vec<ErrorCollector> = if validator.config().parallel_batch {
        exprs.par_iter().map(validate_one).collect()
    } else {
        exprs.iter().map(validate_one).collect()
    };

    let invalid = results.iter().filter(|e| e.has_errors()).count();
    debug!(invalid, "batch validated");
    results
}
