//! # schemalint-core — Shared Types for Schema Lint Rules
//!
//! Every rule in the workspace speaks in terms of the types defined here.
//! A rule receives a schema node (`serde_json::Value`), an opaque context
//! value, and an optional [`PathDescriptor`], and answers with a list of
//! [`Finding`]s.
//!
//! ## Key Design Principles
//!
//! 1. **Findings, not faults.** A schema node that breaks a rule is
//!    reported as a [`Finding`]. [`RuleError`] is reserved for callers
//!    that violate the rule contract (e.g. passing `null` as the node).
//!
//! 2. **Explicit truthiness.** Rules written against loosely-typed schema
//!    documents test fields for "truthiness". The [`Truthy`] trait pins
//!    that coercion down in one place instead of scattering ad-hoc
//!    `is_null()` / `is_empty()` checks across rules.
//!
//! 3. **Borrowed views.** [`SchemaNode`] borrows the caller's value; rules
//!    never clone or mutate the document they inspect.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `schemalint-*` crates (leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod finding;
pub mod node;
pub mod path;
pub mod truthy;

// Re-export primary types for ergonomic imports.
pub use error::RuleError;
pub use finding::Finding;
pub use node::SchemaNode;
pub use path::{PathDescriptor, PathSegment};
pub use truthy::Truthy;
