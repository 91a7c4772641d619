//! # schemalint-rules — Schema Lint Rules
//!
//! ## Rule Interface (`rule`)
//!
//! Every rule implements [`Rule`]: it takes a schema node, the value that
//! contains it, and an optional [`PathDescriptor`], and returns the
//! findings it has about the node. The host linter owns traversal,
//! aggregation, and reporting.
//!
//! ## Rules
//!
//! - [`RequiredTypeRule`] (`required-type`) — a node marked `required`
//!   must also declare a `type` or a `$ref`.
//!
//! ## Crate Policy
//!
//! - Rules are pure: no I/O and no shared mutable state.
//! - Broken nodes are reported as findings. `Err` is only for inputs a
//!   rule cannot evaluate.
//!
//! [`PathDescriptor`]: schemalint_core::PathDescriptor

pub mod required_type;
pub mod rule;

pub use required_type::RequiredTypeRule;
pub use rule::Rule;
