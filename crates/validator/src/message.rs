//! Failure message resolution.
//!
//! Lookup order for a failed rule `rule` on `field`:
//!
//! 1. override keyed `"field.rule"`
//! 2. override keyed `"rule"`
//! 3. the built-in template for `rule`, or a generic fallback
//!
//! Overrides are used verbatim. Built-in templates substitute `{field}` and
//! the first parameter.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::rule::RuleSpec;

/// Caller-supplied messages keyed by `"field.rule"` or `"rule"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageOverrides(IndexMap<String, String>);

impl MessageOverrides {
    /// No overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, key: impl Into<String>, message: impl Into<String>) -> Self {
        self.0.insert(key.into(), message.into());
        self
    }

    /// Adds or replaces an override.
    pub fn insert(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.0.insert(key.into(), message.into());
    }

    /// The override for `rule` on `field`, most specific first.
    pub fn lookup(&self, field: &str, rule: &str) -> Option<&str> {
        self.0
            .get(&format!("{field}.{rule}"))
            .or_else(|| self.0.get(rule))
            .map(String::as_str)
    }

    /// Number of overrides.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no overrides.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MessageOverrides {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, message)| (key.into(), message.into()))
                .collect(),
        )
    }
}

/// The message for a failed `rule` on `field`.
pub fn resolve(field: &str, rule: &RuleSpec, overrides: &MessageOverrides) -> String {
    match overrides.lookup(field, rule.name()) {
        Some(message) => message.to_owned(),
        None => default_message(field, rule),
    }
}

/// The built-in message for `rule`, ignoring overrides.
pub fn default_message(field: &str, rule: &RuleSpec) -> String {
    let p0 = rule.parameter(0).unwrap_or_default();
    match rule.name() {
        "required" => format!("The {field} field is required."),
        "email" => format!("The {field} must be a valid email address."),
        "min" => format!("The {field} must be at least {p0} characters."),
        "max" => format!("The {field} may not be greater than {p0} characters."),
        "numeric" => format!("The {field} must be a number."),
        "string" => format!("The {field} must be a string."),
        "array" => format!("The {field} must be an array."),
        "in" => format!("The {field} must be one of: {}.", rule.parameters().join(", ")),
        "same" => format!("The {field} must match {p0}."),
        "url" => format!("The {field} must be a valid URL."),
        "ip" => format!("The {field} must be a valid IP address."),
        "mac" => format!("The {field} must be a valid MAC address."),
        "domain" => format!("The {field} must be a valid domain."),
        "integer" => format!("The {field} must be an integer."),
        "float" => format!("The {field} must be a floating point number."),
        "boolean" => format!("The {field} field must be true or false."),
        "safe" => format!("The {field} contains disallowed content."),
        _ => format!("The {field} field is invalid."),
    }
}
