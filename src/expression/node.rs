//! Defines `LogicalExpression`, the closed family of typed expression nodes
//! handed to validation by the binder and type-inference stages.

use super::position::ExpressionPosition;
use crate::functions::FunctionDefinition;
use crate::types::{MajorType, MinorType};
use smallvec::SmallVec;
use std::sync::Arc;

/// Borrowed sub-expressions; most nodes have few enough to stay inline.
pub type Children<'a> = SmallVec<[&'a LogicalExpression; 4]>;

/// One `condition -> expression` arm of an if-expression.
#[derive(Debug, Clone)]
pub struct IfCondition {
    pub condition: LogicalExpression,
    pub expression: LogicalExpression,
}

impl IfCondition {
    pub fn new(condition: LogicalExpression, expression: LogicalExpression) -> Self {
        Self {
            condition,
            expression,
        }
    }
}

/// A node in a typed expression tree.
///
/// Every node exposes a `MajorType` fixed before validation runs, and a
/// source position used to anchor diagnostics. The set of variants is closed.
#[derive(Debug, Clone)]
pub enum LogicalExpression {
    /// A call to a function whose definition carries its own argument validator.
    FunctionCall {
        definition: Arc<FunctionDefinition>,
        args: Vec<LogicalExpression>,
        /// Output type assigned by inference.
        major_type: MajorType,
        position: ExpressionPosition,
    },
    /// Ordered `(condition, expression)` arms plus a mandatory else branch.
    IfExpression {
        conditions: Vec<IfCondition>,
        else_expression: Box<LogicalExpression>,
        position: ExpressionPosition,
    },
    /// A reference to a named column or nested field path.
    SchemaPath {
        path: String,
        position: ExpressionPosition,
    },
    IntConstant {
        value: i32,
        position: ExpressionPosition,
    },
    LongConstant {
        value: i64,
        position: ExpressionPosition,
    },
    FloatConstant {
        value: f32,
        position: ExpressionPosition,
    },
    DoubleConstant {
        value: f64,
        position: ExpressionPosition,
    },
    BooleanConstant {
        value: bool,
        position: ExpressionPosition,
    },
    QuotedString {
        value: String,
        position: ExpressionPosition,
    },
    /// Any node kind without a dedicated validation rule.
    Unknown {
        major_type: MajorType,
        position: ExpressionPosition,
    },
}

impl LogicalExpression {
    pub fn function_call(
        definition: Arc<FunctionDefinition>,
        args: Vec<LogicalExpression>,
        major_type: MajorType,
        position: ExpressionPosition,
    ) -> Self {
        LogicalExpression::FunctionCall {
            definition,
            args,
            major_type,
            position,
        }
    }

    pub fn if_expr(
        conditions: impl IntoIterator<Item = IfCondition>,
        else_expression: LogicalExpression,
        position: ExpressionPosition,
    ) -> Self {
        LogicalExpression::IfExpression {
            conditions: conditions.into_iter().collect(),
            else_expression: Box::new(else_expression),
            position,
        }
    }

    pub fn schema_path(path: impl Into<String>, position: ExpressionPosition) -> Self {
        LogicalExpression::SchemaPath {
            path: path.into(),
            position,
        }
    }

    pub fn unknown(major_type: MajorType, position: ExpressionPosition) -> Self {
        LogicalExpression::Unknown {
            major_type,
            position,
        }
    }

    pub fn position(&self) -> &ExpressionPosition {
        match self {
            LogicalExpression::FunctionCall { position, .. }
            | LogicalExpression::IfExpression { position, .. }
            | LogicalExpression::SchemaPath { position, .. }
            | LogicalExpression::IntConstant { position, .. }
            | LogicalExpression::LongConstant { position, .. }
            | LogicalExpression::FloatConstant { position, .. }
            | LogicalExpression::DoubleConstant { position, .. }
            | LogicalExpression::BooleanConstant { position, .. }
            | LogicalExpression::QuotedString { position, .. }
            | LogicalExpression::Unknown { position, .. } => position,
        }
    }

    /// The type attached to this node. Literal and path types are implied by
    /// the variant; an if-expression takes the type of its else branch.
    pub fn major_type(&self) -> MajorType {
        match self {
            LogicalExpression::FunctionCall { major_type, .. }
            | LogicalExpression::Unknown { major_type, .. } => *major_type,
            LogicalExpression::IfExpression {
                else_expression, ..
            } => else_expression.major_type(),
            LogicalExpression::SchemaPath { .. } => MajorType::LATE_BIND,
            LogicalExpression::IntConstant { .. } => MajorType::required(MinorType::Int),
            LogicalExpression::LongConstant { .. } => MajorType::required(MinorType::BigInt),
            LogicalExpression::FloatConstant { .. } => MajorType::required(MinorType::Float4),
            LogicalExpression::DoubleConstant { .. } => MajorType::required(MinorType::Float8),
            LogicalExpression::BooleanConstant { .. } => MajorType::required(MinorType::Bit),
            LogicalExpression::QuotedString { .. } => MajorType::required(MinorType::VarChar),
        }
    }

    /// True for the literal constant variants.
    pub fn is_constant(&self) -> bool {
        matches!(
            self,
            LogicalExpression::IntConstant { .. }
                | LogicalExpression::LongConstant { .. }
                | LogicalExpression::FloatConstant { .. }
                | LogicalExpression::DoubleConstant { .. }
                | LogicalExpression::BooleanConstant { .. }
                | LogicalExpression::QuotedString { .. }
        )
    }

    /// Immediate sub-expressions in declaration order. For an if-expression
    /// each arm yields its condition then its expression, and the else branch
    /// comes last.
    pub fn children(&self) -> Children<'_> {
        match self {
            LogicalExpression::FunctionCall { args, .. } => args.iter().collect(),
            LogicalExpression::IfExpression {
                conditions,
                else_expression,
                ..
            } => conditions
                .iter()
                .flat_map(|c| [&c.condition, &c.expression])
                .chain(std::iter::once(else_expression.as_ref()))
                .collect(),
            LogicalExpression::SchemaPath { .. }
            | LogicalExpression::IntConstant { .. }
            | LogicalExpression::LongConstant { .. }
            | LogicalExpression::FloatConstant { .. }
            | LogicalExpression::DoubleConstant { .. }
            | LogicalExpression::BooleanConstant { .. }
            | LogicalExpression::QuotedString { .. }
            | LogicalExpression::Unknown { .. } => SmallVec::new(),
        }
    }
}
