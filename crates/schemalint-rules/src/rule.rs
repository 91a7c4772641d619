//! # Rule Trait
//!
//! Defines the interface shared by all schema lint rules. Every rule is
//! invoked with the same `(schema, context, paths)` triple so a host can
//! drive any rule without knowing which one it is. A rule that has no use
//! for `context` or `paths` still accepts them.
//!
//! ## Invariant
//!
//! Rules are pure functions of their inputs and require `Send + Sync`, so
//! a single instance can be shared by concurrent callers.

use schemalint_core::{Finding, PathDescriptor, RuleError};
use serde_json::Value;

/// A schema lint rule.
pub trait Rule: Send + Sync {
    /// Stable identifier, e.g. `"required-type"`.
    fn name(&self) -> &'static str;

    /// One-line description of what the rule enforces.
    fn description(&self) -> &'static str;

    /// Evaluate the rule against one schema node.
    ///
    /// * `schema` — the node under inspection.
    /// * `context` — the value containing the node.
    /// * `paths` — where the node sits in the document, for labeling.
    ///
    /// Returns an empty vector when the node satisfies the rule.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError`] when the input falls outside the rule's
    /// contract, e.g. a `null` schema node.
    fn evaluate(
        &self,
        schema: &Value,
        context: &Value,
        paths: Option<&PathDescriptor>,
    ) -> Result<Vec<Finding>, RuleError>;
}
