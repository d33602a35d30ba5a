//! Source positions attached to expression nodes and diagnostics.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where in the original expression text a node came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExpressionPosition {
    /// The expression text the node was parsed from.
    pub expression: String,
    /// Character offset into `expression`, or -1 when unknown.
    pub char_index: i32,
}

impl ExpressionPosition {
    pub fn new(expression: impl Into<String>, char_index: i32) -> Self {
        Self {
            expression: expression.into(),
            char_index,
        }
    }

    /// Position for nodes synthesized without source text.
    pub fn unknown() -> Self {
        Self::new("--UNKNOWN EXPRESSION--", -1)
    }

    pub fn is_unknown(&self) -> bool {
        self.char_index < 0
    }
}

impl Default for ExpressionPosition {
    fn default() -> Self {
        Self::unknown()
    }
}

impl fmt::Display for ExpressionPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" at index {}", self.expression, self.char_index)
    }
}
