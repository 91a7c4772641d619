//! # Required-Type Rule
//!
//! A schema node marked `required` must say what it is: it needs a
//! truthy `type` or a truthy `$ref`. Nodes that are not required are
//! outside this rule's concern and always pass.
//!
//! The finding message is `"<label> is not truthy"`, where the label is
//! the node's target path joined with `.`, or `type or $ref` when no
//! target path is known.

use schemalint_core::{Finding, PathDescriptor, RuleError, SchemaNode};
use serde_json::Value;

use crate::rule::Rule;

/// Label used when the caller supplies no target path.
pub const FALLBACK_LABEL: &str = "type or $ref";

/// Checks that required nodes declare a `type` or `$ref`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequiredTypeRule;

impl RequiredTypeRule {
    /// Stable rule identifier.
    pub const NAME: &'static str = "required-type";

    /// Create the rule.
    pub fn new() -> Self {
        Self
    }
}

impl Rule for RequiredTypeRule {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        "nodes marked required must declare a type or $ref"
    }

    fn evaluate(
        &self,
        schema: &Value,
        _context: &Value,
        paths: Option<&PathDescriptor>,
    ) -> Result<Vec<Finding>, RuleError> {
        let node = SchemaNode::new(schema, Self::NAME)?;

        if !node.is_required() || node.declares_type() || node.declares_ref() {
            return Ok(Vec::new());
        }

        let label = paths
            .and_then(PathDescriptor::dotted_target)
            .unwrap_or_else(|| FALLBACK_LABEL.to_string());

        tracing::debug!(rule = Self::NAME, %label, "required node declares neither type nor $ref");

        Ok(vec![Finding::new(format!("{label} is not truthy"))])
    }
}
