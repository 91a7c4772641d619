//! # Error Types
//!
//! Rule evaluation reports broken schema nodes as findings. The errors
//! here cover the other case: the caller handed the rule something it
//! cannot evaluate at all.

use thiserror::Error;

/// Error raised when a rule is invoked outside its contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// The schema node was `null`. Rules require a node to inspect.
    #[error("rule '{rule}' was invoked with a null schema node")]
    NullSchema {
        /// Identifier of the rule that rejected the input.
        rule: String,
    },
}

impl RuleError {
    /// Build a [`RuleError::NullSchema`] for the named rule.
    pub fn null_schema(rule: impl Into<String>) -> Self {
        Self::NullSchema { rule: rule.into() }
    }
}
