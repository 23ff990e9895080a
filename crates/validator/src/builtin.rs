//! The built-in check table.

use rulebook_value::Value;

use crate::error::Result;
use crate::filters::{self, Filter};
use crate::registry::{BuiltinCheck, RuleContext};

/// Names of every built-in rule.
pub const NAMES: &[&str] = &[
    "required", "nullable", "email", "min", "max", "numeric", "string", "array", "in", "same",
    "url", "ip", "mac", "domain", "integer", "float", "boolean", "safe",
];

/// Marker rule checked by the engine before any other rule runs.
pub const NULLABLE: &str = "nullable";

pub(crate) fn lookup(name: &str) -> Option<BuiltinCheck> {
    let check: BuiltinCheck = match name {
        "required" => required,
        "nullable" => nullable,
        "email" => email,
        "min" => min,
        "max" => max,
        "numeric" => numeric,
        "string" => string,
        "array" => array,
        "in" => one_of,
        "same" => same,
        "url" => url,
        "ip" => ip,
        "mac" => mac,
        "domain" => domain,
        "integer" => integer,
        "float" => float,
        "boolean" => boolean,
        "safe" => safe,
        _ => return None,
    };
    Some(check)
}

fn required(ctx: &RuleContext<'_>) -> Result<bool> {
    Ok(!ctx.value().is_blank())
}

fn nullable(_: &RuleContext<'_>) -> Result<bool> {
    Ok(true)
}

fn email(ctx: &RuleContext<'_>) -> Result<bool> {
    Ok(filters::check(ctx.value(), Filter::Email))
}

/// Character count for strings, element count for arrays and maps, the
/// number itself for numbers.
fn size(value: &Value) -> Option<f64> {
    match value {
        Value::String(s) => Some(s.chars().count() as f64),
        Value::Array(_) | Value::Map(_) => value.count().map(|n| n as f64),
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}

fn min(ctx: &RuleContext<'_>) -> Result<bool> {
    let bound = ctx.integer_parameter(0)? as f64;
    Ok(size(ctx.value()).is_some_and(|size| size >= bound))
}

fn max(ctx: &RuleContext<'_>) -> Result<bool> {
    let bound = ctx.integer_parameter(0)? as f64;
    Ok(size(ctx.value()).is_some_and(|size| size <= bound))
}

fn url(ctx: &RuleContext<'_>) -> Result<bool> {
    Ok(filters::check(ctx.value(), Filter::Url))
}

fn ip(ctx: &RuleContext<'_>) -> Result<bool> {
    Ok(filters::check(ctx.value(), Filter::Ip))
}

fn mac(ctx: &RuleContext<'_>) -> Result<bool> {
    Ok(filters::check(ctx.value(), Filter::Mac))
}

fn domain(ctx: &RuleContext<'_>) -> Result<bool> {
    Ok(filters::check(ctx.value(), Filter::Domain))
}

fn integer(ctx: &RuleContext<'_>) -> Result<bool> {
    Ok(filters::check(ctx.value(), Filter::Int))
}

fn float(ctx: &RuleContext<'_>) -> Result<bool> {
    Ok(filters::check(ctx.value(), Filter::Float))
}

fn boolean(ctx: &RuleContext<'_>) -> Result<bool> {
    Ok(filters::check(ctx.value(), Filter::Boolean))
}

fn numeric(ctx: &RuleContext<'_>) -> Result<bool> {
    Ok(match ctx.value() {
        Value::Number(_) => true,
        Value::String(s) => filters::is_float(s),
        _ => false,
    })
}

fn string(ctx: &RuleContext<'_>) -> Result<bool> {
    Ok(matches!(ctx.value(), Value::String(_)))
}

fn array(ctx: &RuleContext<'_>) -> Result<bool> {
    Ok(ctx.value().kind().is_countable())
}

fn one_of(ctx: &RuleContext<'_>) -> Result<bool> {
    Ok(ctx
        .value()
        .as_scalar_str()
        .is_some_and(|rendered| ctx.parameters().iter().any(|allowed| *allowed == rendered)))
}

/// A missing target path compares against [`Value::Null`].
fn same(ctx: &RuleContext<'_>) -> Result<bool> {
    let other = match ctx.optional_parameter(0)? {
        Some(path) => ctx.lookup(path),
        None => &Value::Null,
    };
    Ok(ctx.value() == other)
}

fn safe(ctx: &RuleContext<'_>) -> Result<bool> {
    Ok(ctx.value().as_str().is_none_or(|s| !filters::is_malicious(s)))
}
