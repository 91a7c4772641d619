//! # Check Subcommand
//!
//! Evaluates the `required-type` rule against a single schema node read
//! from disk and reports the findings.
//!
//! Exit codes: 0 when the node passes, 1 when findings are reported,
//! 2 on operational error (unreadable input or a rule contract violation).

use std::fmt;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use serde::Serialize;
use serde_json::Value;

use schemalint_core::{Finding, PathDescriptor, PathSegment};
use schemalint_rules::{RequiredTypeRule, Rule};

use crate::document::load_document;

/// Output format for check results.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One line per finding.
    #[default]
    Text,
    /// A single JSON report object.
    Json,
}

/// Arguments for the `schemalint check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Schema node to check (.json, .yaml, or .yml).
    #[arg(value_name = "NODE")]
    pub node: PathBuf,

    /// Path segments locating the node in its document, outermost first.
    #[arg(long, value_name = "SEGMENT", num_args = 1..)]
    pub target: Vec<String>,

    /// Value containing the node, passed through to the rule.
    #[arg(long, value_name = "FILE")]
    pub context: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl CheckArgs {
    /// Build the path descriptor from `--target`.
    ///
    /// No `--target` means no descriptor target, so findings use the
    /// rule's fallback label.
    pub fn path_descriptor(&self) -> PathDescriptor {
        if self.target.is_empty() {
            return PathDescriptor::new();
        }
        PathDescriptor::with_target(self.target.iter().map(|s| PathSegment::parse(s)))
    }
}

/// Findings produced by one rule for one node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    /// Identifier of the rule that ran.
    pub rule: &'static str,
    /// Findings, empty when the node passes.
    pub findings: Vec<Finding>,
}

impl CheckReport {
    /// Exit code for this report: 0 if clean, 1 if any findings.
    pub fn exit_code(&self) -> u8 {
        if self.findings.is_empty() {
            0
        } else {
            1
        }
    }

    /// Render the report in the requested format.
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.to_string()),
            OutputFormat::Json => {
                serde_json::to_string_pretty(self).context("failed to serialize check report")
            }
        }
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.findings.is_empty() {
            return write!(f, "OK {}", self.rule);
        }
        for (i, finding) in self.findings.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "FAIL {}: {}", self.rule, finding)?;
        }
        Ok(())
    }
}

/// Evaluate `rule` against an already-loaded node.
pub fn check_value(
    rule: &dyn Rule,
    node: &Value,
    context: &Value,
    paths: &PathDescriptor,
) -> Result<CheckReport> {
    let findings = rule
        .evaluate(node, context, Some(paths))
        .with_context(|| format!("rule '{}' could not evaluate the node", rule.name()))?;
    Ok(CheckReport {
        rule: rule.name(),
        findings,
    })
}

/// Load the inputs named by `args` and evaluate the `required-type` rule.
pub fn check(args: &CheckArgs) -> Result<CheckReport> {
    let node = load_document(&args.node).context("failed to load schema node")?;
    let context = match &args.context {
        Some(path) => load_document(path).context("failed to load context")?,
        None => Value::Object(serde_json::Map::new()),
    };
    let paths = args.path_descriptor();

    let rule = RequiredTypeRule::new();
    let report = check_value(&rule, &node, &context, &paths)?;

    tracing::info!(
        rule = report.rule,
        node = %args.node.display(),
        findings = report.findings.len(),
        "check complete"
    );

    Ok(report)
}

/// Execute the check subcommand and print the report to stdout.
///
/// Returns exit code: 0 on pass, 1 on findings. Operational errors are
/// returned as `Err` and mapped to 2 by the binary.
pub fn run_check(args: &CheckArgs) -> Result<u8> {
    let report = check(args)?;
    println!("{}", report.render(args.format)?);
    Ok(report.exit_code())
}
