//! # schemalint-cli — Command-Line Harness
//!
//! Provides the `schemalint` binary, a thin host for the rules in
//! `schemalint-rules`. It loads one schema node, hands it to a rule, and
//! prints what the rule found.
//!
//! ```bash
//! schemalint check node.json --target components schemas Pet
//! schemalint check node.yaml --format json
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing lives in `main.rs` and the `*Args` structs; rule
//!   logic lives in `schemalint-rules`.
//! - Findings go to stdout; diagnostics go to stderr via `tracing`.

pub mod check;
pub mod document;

/// Map a `-v` count to a default log filter directive.
pub fn log_level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
