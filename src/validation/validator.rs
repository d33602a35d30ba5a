//! The expression validator: per-node semantic rules over a typed tree.
use super::collector::ErrorCollector;
use super::config::{Traversal, ValidatorConfig};
use super::rules::if_expr;
use crate::expression::LogicalExpression;
use tracing::{debug, instrument, trace};

/// Applies each node variant's semantic rule, recording violations.
///
/// Validation reads the tree and writes only to the supplied collector. An
/// invalid expression is never an `Err`; callers check
/// `ErrorCollector::has_errors` once the pass returns.
#[derive(Debug, Clone, Default)]
pub struct ExpressionValidator {
    config: ValidatorConfig,
}

impl ExpressionValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ValidatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Checks `node` itself. Sub-trees are not visited; use `validate_tree`
    /// for that.
    pub fn validate(&self, node: &LogicalExpression, errors: &mut ErrorCollector) {
        match node {
            LogicalExpression::FunctionCall {
                definition,
                args,
                position,
                ..
            } => {
                trace!(function = definition.name(), args = args.len(), "validating call");
                definition
                    .argument_validator()
                    .validate_arguments(position, args, errors);
            }
            LogicalExpression::IfExpression {
                conditions,
                else_expression,
                ..
            } => {
                let before = errors.error_count();
                if_expr::validate_conditions(conditions, errors);
                if_expr::validate_branch_types(conditions, else_expression, errors);
                let added = errors.error_count() - before;
                if added > 0 {
                    debug!(arms = conditions.len(), errors = added, "if expression rejected");
                }
            }
            LogicalExpression::SchemaPath { .. }
            | LogicalExpression::IntConstant { .. }
            | LogicalExpression::LongConstant { .. }
            | LogicalExpression::FloatConstant { .. }
            | LogicalExpression::DoubleConstant { .. }
            | LogicalExpression::BooleanConstant { .. }
            | LogicalExpression::QuotedString { .. } => {}
            // No rule for unknown nodes.
            LogicalExpression::Unknown { .. } => {}
        }
    }

    /// Checks `root` and every node beneath it, parents before children and
    /// children in declaration order.
    #[instrument(skip_all)]
    pub fn validate_tree(&self, root: &LogicalExpression, errors: &mut ErrorCollector) {
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            self.validate(node, errors);
            stack.extend(node.children().into_iter().rev());
        }
        trace!(errors = errors.error_count(), "tree validated");
    }

    /// Checks `root` as far as the configured traversal reaches.
    pub fn validate_root(&self, root: &LogicalExpression, errors: &mut ErrorCollector) {
        match self.config.traversal {
            Traversal::Node => self.validate(root, errors),
            Traversal::Tree => self.validate_tree(root, errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::{ExpressionPosition, IfCondition};
    use crate::functions::{AnyTypeAllowed, FunctionDefinition, NumericTypeAllowed};
    use crate::types::{MajorType, MinorType};
    use crate::validation::ValidationErrorType;
    use rstest::rstest;
    use std::sync::Arc;

    fn pos(i: i32) -> ExpressionPosition {
        ExpressionPosition::new("expr", i)
    }

    fn typed(mt: MajorType, i: i32) -> LogicalExpression {
        LogicalExpression::unknown(mt, pos(i))
    }

    fn bit() -> MajorType {
        MajorType::required(MinorType::Bit)
    }

    fn int() -> MajorType {
        MajorType::required(MinorType::Int)
    }

    fn if_of(arms: Vec<(MajorType, MajorType)>, otherwise: MajorType) -> LogicalExpression {
        let conditions = arms
            .into_iter()
            .enumerate()
            .map(|(i, (c, r))| IfCondition::new(typed(c, 10 * i as i32 + 1), typed(r, 10 * i as i32 + 2)));
        LogicalExpression::if_expr(conditions, typed(otherwise, 99), pos(0))
    }

    fn add_call(args: Vec<LogicalExpression>) -> LogicalExpression {
        let def = Arc::new(FunctionDefinition::operator("add", Arc::new(NumericTypeAllowed::new(2..=2))));
        LogicalExpression::function_call(def, args, int(), pos(0))
    }

    fn run(expr: &LogicalExpression) -> ErrorCollector {
        let mut errors = ErrorCollector::new();
        ExpressionValidator::new().validate(expr, &mut errors);
        errors
    }

    #[test]
    fn test_well_typed_if_has_no_errors() {
        let expr = if_of(vec![(bit(), int()), (bit(), MajorType::optional(MinorType::Int))], int());
        assert!(!run(&expr).has_errors());
    }

    #[test]
    fn test_optional_condition_scenario() {
        let expr = if_of(vec![(MajorType::optional(MinorType::Bit), int())], int());
        let errors = run(&expr);
        assert_eq!(errors.error_count(), 1);
        let err = &errors.errors()[0];
        assert_eq!(err.error_type, ValidationErrorType::ConditionNotBooleanRequired);
        assert_eq!(
            err.message,
            "Failure composing If Expression.  All conditions must return a required value and be of type boolean.  Condition 0 was DatMode OPTIONAL and Type BIT."
        );
        assert_eq!(err.position.char_index, 1);
    }

    #[test]
    fn test_float_branch_scenario() {
        let expr = if_of(vec![(bit(), MajorType::required(MinorType::Float4))], int());
        let errors = run(&expr);
        assert_eq!(errors.error_count(), 1);
        let err = &errors.errors()[0];
        assert_eq!(err.error_type, ValidationErrorType::BranchTypeMismatch);
        assert_eq!(
            err.message,
            "Failure composing If Expression.  All expressions must return the same MajorType as the else expression.  The 0 if condition returned type type minor_type: FLOAT4\nmode: REQUIRED\n but the else expression was of type minor_type: INT\nmode: REQUIRED\n"
        );
        assert_eq!(err.position.char_index, 1);
    }

    #[rstest]
    #[case(vec![true, true, true], 0)]
    #[case(vec![false, true, true], 1)]
    #[case(vec![true, false, false], 2)]
    #[case(vec![false, false, false], 3)]
    fn test_counts_each_bad_condition(#[case] good: Vec<bool>, #[case] expected: usize) {
        let arms = good
            .iter()
            .map(|&ok| (if ok { bit() } else { MajorType::required(MinorType::VarChar) }, int()))
            .collect();
        let errors = run(&if_of(arms, int()));
        assert_eq!(errors.error_count(), expected);
        let bad_indices: Vec<usize> = good.iter().enumerate().filter(|(_, &ok)| !ok).map(|(i, _)| i).collect();
        for (err, i) in errors.iter().zip(bad_indices) {
            assert!(err.message.contains(&format!("Condition {} was", i)));
        }
    }

    #[test]
    fn test_condition_and_branch_errors_do_not_suppress_each_other() {
        let bad_cond = MajorType::optional(MinorType::Int);
        let bad_branch = MajorType::required(MinorType::VarChar);
        let expr = if_of(vec![(bad_cond, bad_branch), (bit(), int()), (bad_cond, bad_branch)], int());
        let kinds: Vec<_> = run(&expr).iter().map(|e| e.error_type).collect();
        assert_eq!(
            kinds,
            vec![
                ValidationErrorType::ConditionNotBooleanRequired,
                ValidationErrorType::ConditionNotBooleanRequired,
                ValidationErrorType::BranchTypeMismatch,
                ValidationErrorType::BranchTypeMismatch,
            ]
        );
    }

    #[test]
    fn test_repeated_mode_asymmetry() {
        let repeated = MajorType::repeated(MinorType::Int);
        assert_eq!(run(&if_of(vec![(bit(), repeated)], int())).error_count(), 1);
        assert_eq!(run(&if_of(vec![(bit(), int())], repeated)).error_count(), 0);
    }

    #[rstest]
    #[case(LogicalExpression::schema_path("a.b", pos(0)))]
    #[case(LogicalExpression::IntConstant { value: 1, position: pos(0) })]
    #[case(LogicalExpression::LongConstant { value: 1, position: pos(0) })]
    #[case(LogicalExpression::FloatConstant { value: 1.0, position: pos(0) })]
    #[case(LogicalExpression::DoubleConstant { value: 1.0, position: pos(0) })]
    #[case(LogicalExpression::BooleanConstant { value: false, position: pos(0) })]
    #[case(LogicalExpression::QuotedString { value: "x".into(), position: pos(0) })]
    #[case(LogicalExpression::unknown(MajorType::repeated(MinorType::Map), pos(0)))]
    fn test_leaf_nodes_have_no_rule(#[case] expr: LogicalExpression) {
        assert!(!run(&expr).has_errors());
    }

    #[test]
    fn test_call_errors_come_only_from_argument_validator() {
        let well_formed = add_call(vec![typed(int(), 1), typed(int(), 2)]);
        assert!(!run(&well_formed).has_errors());

        let any = Arc::new(FunctionDefinition::new("coalesce", Arc::new(AnyTypeAllowed::new(0..=8))));
        let call = LogicalExpression::function_call(
            any,
            vec![typed(MajorType::repeated(MinorType::Map), 1)],
            MajorType::optional(MinorType::Late),
            pos(0),
        );
        assert!(!run(&call).has_errors());

        let bad = add_call(vec![typed(MajorType::required(MinorType::VarChar), 1)]);
        let kinds: Vec<_> = run(&bad).iter().map(|e| e.error_type).collect();
        assert_eq!(
            kinds,
            vec![ValidationErrorType::UnexpectedArgumentCount, ValidationErrorType::NonNumericType]
        );
    }

    #[test]
    fn test_node_rule_does_not_recurse() {
        let nested = if_of(vec![(MajorType::optional(MinorType::Bit), int())], int());
        let outer = LogicalExpression::if_expr(
            [IfCondition::new(typed(bit(), 1), nested)],
            typed(int(), 2),
            pos(0),
        );
        assert!(!run(&outer).has_errors());

        let call = add_call(vec![typed(int(), 1), if_of(vec![(int(), int())], int())]);
        assert!(!run(&call).has_errors());
    }

    #[test]
    fn test_tree_walk_visits_nested_nodes_pre_order() {
        let inner_if = if_of(vec![(MajorType::optional(MinorType::Bit), int())], int());
        let call = add_call(vec![typed(MajorType::required(MinorType::Date), 50), inner_if]);
        let outer = LogicalExpression::if_expr(
            [IfCondition::new(typed(MajorType::required(MinorType::Int), 3), call)],
            typed(int(), 4),
            pos(0),
        );

        let mut errors = ErrorCollector::new();
        ExpressionValidator::new().validate_tree(&outer, &mut errors);
        let kinds: Vec<_> = errors.iter().map(|e| e.error_type).collect();
        assert_eq!(
            kinds,
            vec![
                ValidationErrorType::ConditionNotBooleanRequired,
                ValidationErrorType::NonNumericType,
                ValidationErrorType::ConditionNotBooleanRequired,
            ]
        );
    }

    #[test]
    fn test_validate_root_honours_traversal() {
        let nested = if_of(vec![(MajorType::optional(MinorType::Bit), int())], int());
        let outer = LogicalExpression::if_expr([IfCondition::new(typed(bit(), 1), nested)], typed(int(), 2), pos(0));

        let mut shallow = ErrorCollector::new();
        ExpressionValidator::new().validate_root(&outer, &mut shallow);
        assert!(!shallow.has_errors());

        let config = ValidatorConfig::from_json(r#"{"traversal": "tree"}"#).unwrap();
        let mut deep = ErrorCollector::new();
        ExpressionValidator::with_config(config).validate_root(&outer, &mut deep);
        assert_eq!(deep.error_count(), 1);
    }

    #[test]
    fn test_validation_is_idempotent() {
        let expr = if_of(
            vec![(MajorType::optional(MinorType::Bit), MajorType::repeated(MinorType::Int)), (int(), int())],
            MajorType::required(MinorType::Float8),
        );
        let first = run(&expr);
        let second = run(&expr);
        assert_eq!(first.errors(), second.errors());
        assert_eq!(first.error_count(), 4);
    }
}
