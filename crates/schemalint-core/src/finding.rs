//! # Findings
//!
//! A finding is what a rule hands back when a schema node breaks it.
//! The host decides how to aggregate, print, and map findings to exit
//! codes; a finding only carries the human-readable message.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single reported violation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Finding {
    /// Human-readable description of the violation.
    pub message: String,
}

impl Finding {
    /// Create a finding with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Access the message text.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
