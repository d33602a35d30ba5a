//! The standard argument validators used by built-in function definitions.
use super::definition::ArgumentValidator;
use crate::expression::{ExpressionPosition, LogicalExpression};
use crate::types::MinorType;
use crate::validation::ErrorCollector;
use std::ops::RangeInclusive;

/// Reports an out-of-range argument count at the call position.
fn check_arity(
    arities: &RangeInclusive<usize>,
    position: &ExpressionPosition,
    args: &[LogicalExpression],
    errors: &mut ErrorCollector,
) {
    if arities.contains(&args.len()) {
        return;
    }
    if arities.start() == arities.end() {
        errors.add_unexpected_argument_count_exact(position, args.len(), *arities.start());
    } else {
        errors.add_unexpected_argument_count(position, args.len(), arities);
    }
}

/// Accepts arguments of any type; only the count is checked.
#[derive(Debug, Clone)]
pub struct AnyTypeAllowed {
    pub arities: RangeInclusive<usize>,
}

impl AnyTypeAllowed {
    pub fn new(arities: RangeInclusive<usize>) -> Self {
        Self { arities }
    }
}

impl ArgumentValidator for AnyTypeAllowed {
    fn validate_arguments(
        &self,
        position: &ExpressionPosition,
        args: &[LogicalExpression],
        errors: &mut ErrorCollector,
    ) {
        check_arity(&self.arities, position, args, errors);
    }
}

/// Every argument must be of a numeric kind.
#[derive(Debug, Clone)]
pub struct NumericTypeAllowed {
    pub arities: RangeInclusive<usize>,
}

impl NumericTypeAllowed {
    pub fn new(arities: RangeInclusive<usize>) -> Self {
        Self { arities }
    }
}

impl ArgumentValidator for NumericTypeAllowed {
    fn validate_arguments(
        &self,
        position: &ExpressionPosition,
        args: &[LogicalExpression],
        errors: &mut ErrorCollector,
    ) {
        check_arity(&self.arities, position, args, errors);
        for arg in args {
            let minor = arg.major_type().minor_type;
            if !minor.is_numeric() {
                errors.add_non_numeric_type(arg.position(), minor);
            }
        }
    }
}

/// Every argument's minor type must appear in `allowed`.
#[derive(Debug, Clone)]
pub struct AllowedTypeList {
    pub arities: RangeInclusive<usize>,
    pub allowed: Vec<MinorType>,
}

impl AllowedTypeList {
    pub fn new(arities: RangeInclusive<usize>, allowed: Vec<MinorType>) -> Self {
        Self { arities, allowed }
    }
}

impl ArgumentValidator for AllowedTypeList {
    fn validate_arguments(
        &self,
        position: &ExpressionPosition,
        args: &[LogicalExpression],
        errors: &mut ErrorCollector,
    ) {
        check_arity(&self.arities, position, args, errors);
        let names = self.argument_names(args.len());
        for (i, (arg, name)) in args.iter().zip(&names).enumerate() {
            let actual = arg.major_type();
            if !self.allowed.contains(&actual.minor_type) {
                errors.add_unexpected_argument_type(arg.position(), name, actual, &self.allowed, i);
            }
        }
    }
}

/// All arguments must share the first argument's minor type.
#[derive(Debug, Clone)]
pub struct ComparableArguments {
    pub arities: RangeInclusive<usize>,
}

impl ComparableArguments {
    pub fn new(arities: RangeInclusive<usize>) -> Self {
        Self { arities }
    }
}

impl ArgumentValidator for ComparableArguments {
    fn validate_arguments(
        &self,
        position: &ExpressionPosition,
        args: &[LogicalExpression],
        errors: &mut ErrorCollector,
    ) {
        check_arity(&self.arities, position, args, errors);
        let Some(first) = args.first() else {
            return;
        };
        let expected = first.major_type().minor_type;
        for (i, arg) in args.iter().enumerate().skip(1) {
            let actual = arg.major_type().minor_type;
            if actual != expected {
                errors.add_unexpected_type(arg.position(), i, actual);
            }
        }
    }
}

/// Every argument must be a literal constant.
#[derive(Debug, Clone)]
pub struct ConstantArguments {
    pub arities: RangeInclusive<usize>,
}

impl ConstantArguments {
    pub fn new(arities: RangeInclusive<usize>) -> Self {
        Self { arities }
    }
}

impl ArgumentValidator for ConstantArguments {
    fn validate_arguments(
        &self,
        position: &ExpressionPosition,
        args: &[LogicalExpression],
        errors: &mut ErrorCollector,
    ) {
        check_arity(&self.arities, position, args, errors);
        let names = self.argument_names(args.len());
        for (i, (arg, name)) in args.iter().zip(&names).enumerate() {
            if !arg.is_constant() {
                errors.add_expected_constant_value(arg.position(), i, name);
            }
        }
    }
}
