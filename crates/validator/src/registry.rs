//! Rule name to check function dispatch.
//!
//! Built-in checks live in a closed table compiled into the crate; custom
//! checks are registered at runtime and shadow built-ins of the same name.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use rulebook_value::{Value, path};

use crate::builtin;
use crate::error::{Result, ValidatorError};
use crate::error_map::ErrorMap;
use crate::rule::RuleSpec;

/// A custom check. Returns `Ok(false)` to record a failure, `Err` to abort
/// the whole run.
pub type CheckFn = Arc<dyn Fn(&mut RuleContext<'_>) -> Result<bool> + Send + Sync>;

/// Signature of the built-in checks.
pub(crate) type BuiltinCheck = fn(&RuleContext<'_>) -> Result<bool>;

static NULL: Value = Value::Null;

/// What a check sees while evaluating one rule on one field.
pub struct RuleContext<'a> {
    rule: &'a RuleSpec,
    field: &'a str,
    value: &'a Value,
    data: &'a Value,
    errors: &'a mut ErrorMap,
    strict: bool,
}

impl<'a> RuleContext<'a> {
    pub(crate) fn new(
        rule: &'a RuleSpec,
        field: &'a str,
        value: &'a Value,
        data: &'a Value,
        errors: &'a mut ErrorMap,
    ) -> Self {
        Self {
            rule,
            field,
            value,
            data,
            errors,
            strict: false,
        }
    }

    pub(crate) fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Whether the run treats incomplete rule declarations as errors.
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// The rule name being evaluated.
    pub fn rule(&self) -> &'a str {
        self.rule.name()
    }

    /// The field path the rule is declared on.
    pub fn field(&self) -> &'a str {
        self.field
    }

    /// The resolved field value ([`Value::Null`] when the path is missing).
    pub fn value(&self) -> &'a Value {
        self.value
    }

    /// The rule parameters, untrimmed.
    pub fn parameters(&self) -> &'a [String] {
        self.rule.parameters()
    }

    /// The parameter at `index`, required in every mode.
    pub fn parameter(&self, index: usize) -> Result<&'a str> {
        self.rule
            .parameter(index)
            .ok_or_else(|| self.missing_parameter(index))
    }

    /// The parameter at `index`. A missing one is `None` in permissive runs
    /// and [`ValidatorError::MissingParameter`] in strict runs.
    pub fn optional_parameter(&self, index: usize) -> Result<Option<&'a str>> {
        match self.rule.parameter(index) {
            Some(parameter) => Ok(Some(parameter)),
            None if self.strict => Err(self.missing_parameter(index)),
            None => {
                tracing::trace!(
                    field = self.field,
                    rule = self.rule.name(),
                    index,
                    "missing parameter read as empty"
                );
                Ok(None)
            }
        }
    }

    /// The parameter at `index` read as a leading integer: an optional sign
    /// and the digits that follow it, after leading whitespace. Anything
    /// else, including a missing parameter in a permissive run, reads as `0`.
    pub fn integer_parameter(&self, index: usize) -> Result<i64> {
        Ok(self.optional_parameter(index)?.map_or(0, leading_integer))
    }

    fn missing_parameter(&self, index: usize) -> ValidatorError {
        ValidatorError::MissingParameter {
            field: self.field.to_owned(),
            rule: self.rule.name().to_owned(),
            index,
        }
    }

    /// The whole data tree under validation.
    pub fn data(&self) -> &'a Value {
        self.data
    }

    /// Resolves another path in the data tree, [`Value::Null`] if missing.
    pub fn lookup(&self, path: &str) -> &'a Value {
        path::get(self.data, path, &NULL)
    }

    /// Records a message under any field, independently of this rule's
    /// outcome.
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.add(field, message);
    }

    /// Messages recorded so far in this run.
    pub fn errors(&self) -> &ErrorMap {
        self.errors
    }
}

impl fmt::Debug for RuleContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleContext")
            .field("rule", self.rule)
            .field("field", &self.field)
            .field("value", self.value)
            .field("strict", &self.strict)
            .finish_non_exhaustive()
    }
}

fn leading_integer(parameter: &str) -> i64 {
    let trimmed = parameter.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0_i64, |acc, digit| {
            acc.saturating_mul(10).saturating_add(i64::from(digit - b'0'))
        });
    if negative { -magnitude } else { magnitude }
}

/// A resolved check, built-in or custom.
#[derive(Clone, Copy)]
pub enum Check<'r> {
    /// Compiled into the crate.
    Builtin(BuiltinCheck),
    /// Registered at runtime.
    Custom(&'r CheckFn),
}

impl Check<'_> {
    /// Runs the check against `ctx`.
    pub fn run(&self, ctx: &mut RuleContext<'_>) -> Result<bool> {
        match self {
            Self::Builtin(check) => check(ctx),
            Self::Custom(check) => check(ctx),
        }
    }
}

impl fmt::Debug for Check<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin(_) => f.write_str("Check::Builtin"),
            Self::Custom(_) => f.write_str("Check::Custom"),
        }
    }
}

/// Registry of custom checks layered over the built-in table.
///
/// # Examples
///
/// ```rust
/// use rulebook_validator::RuleRegistry;
///
/// let mut registry = RuleRegistry::new();
/// assert!(registry.contains("email"));
///
/// registry.extend("even", |ctx| Ok(ctx.value().as_f64().is_some_and(|n| n % 2.0 == 0.0)));
/// assert!(registry.contains("even"));
/// assert!(registry.remove("even"));
/// assert!(!registry.contains("even"));
/// ```
#[derive(Clone, Default)]
pub struct RuleRegistry {
    custom: HashMap<String, CheckFn>,
}

impl RuleRegistry {
    /// A registry with only the built-in checks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `check` under `name`, replacing any earlier custom check.
    /// A built-in of the same name is shadowed until [`remove`](Self::remove).
    pub fn extend<F>(&mut self, name: impl Into<String>, check: F) -> &mut Self
    where
        F: Fn(&mut RuleContext<'_>) -> Result<bool> + Send + Sync + 'static,
    {
        self.insert(name.into(), Arc::new(check))
    }

    /// Registers an already shared check.
    pub fn insert(&mut self, name: String, check: CheckFn) -> &mut Self {
        if Self::is_builtin(&name) {
            tracing::debug!(rule = %name, "custom check shadows built-in");
        }
        self.custom.insert(name, check);
        self
    }

    /// Drops the custom check `name`. Returns `true` if one was registered.
    pub fn remove(&mut self, name: &str) -> bool {
        self.custom.remove(name).is_some()
    }

    /// Resolves `name`, custom checks first.
    pub fn lookup(&self, name: &str) -> Option<Check<'_>> {
        self.custom
            .get(name)
            .map(Check::Custom)
            .or_else(|| builtin::lookup(name).map(Check::Builtin))
    }

    /// Whether any check answers to `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.custom.contains_key(name) || Self::is_builtin(name)
    }

    /// Whether `name` is a built-in rule.
    pub fn is_builtin(name: &str) -> bool {
        builtin::lookup(name).is_some()
    }

    /// Every rule name, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = builtin::NAMES
            .iter()
            .copied()
            .chain(self.custom.keys().map(String::as_str))
            .collect();
        names.sort_unstable();
        names.dedup();
        names
    }

    /// Names of the custom checks, sorted.
    pub fn custom_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.custom.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("custom", &self.custom_names())
            .finish_non_exhaustive()
    }
}
