//! Subcommand implementations.
//!
//! Each command writes its report to the given writer and returns the
//! process exit code.

pub mod check;
pub mod get;
pub mod scan;
pub mod set;

use anyhow::Context;
use rulebook_value::Value;

/// Parses a command-line JSON argument.
fn parse_json(text: &str) -> anyhow::Result<Value> {
    serde_json::from_str(text).with_context(|| format!("`{text}` is not valid JSON"))
}
