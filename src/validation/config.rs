//! Runtime options for the expression validator.
use super::error::ConfigError;
use serde::Deserialize;

/// How much of a tree `ExpressionValidator::validate_root` checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Traversal {
    /// Apply the rule for the given node only.
    #[default]
    Node,
    /// Apply the rule for every node, pre-order.
    Tree,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidatorConfig {
    pub traversal: Traversal,
    /// Validate batches on the rayon pool rather than the calling thread.
    pub parallel_batch: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            traversal: Traversal::Node,
            parallel_batch: true,
        }
    }
}

impl ValidatorConfig {
    pub fn from_json(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }
}
