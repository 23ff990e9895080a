//! The validation engine.
//!
//! For every field in declaration order the engine resolves the value with a
//! dot-path lookup (missing paths read as [`Value::Null`]), then evaluates
//! the field's rules in order and records the resolved message for each
//! failing rule.
//!
//! A field that declares `nullable` and whose value is null or `""` is
//! skipped before any of its rules run.

use rulebook_value::{Value, path};
use tracing::{debug, trace};

use crate::builtin::NULLABLE;
use crate::config::ValidatorConfig;
use crate::error::{Result, ValidatorError};
use crate::error_map::ErrorMap;
use crate::message::{self, MessageOverrides};
use crate::registry::{RuleContext, RuleRegistry};
use crate::rule::FieldRules;

static NULL: Value = Value::Null;

/// Evaluates [`FieldRules`] against a data tree.
///
/// `validate` borrows `&self`; registering checks needs `&mut self`. Wrap in
/// an `Arc` to share a configured validator across threads.
///
/// # Examples
///
/// ```rust
/// use rulebook_validator::{FieldRules, MessageOverrides, Validator};
/// use rulebook_value::Value;
///
/// let data: Value = serde_json::json!({"user": {"email": "not-an-email"}}).into();
/// let rules = FieldRules::new()
///     .field("user.email", "required|email")
///     .field("user.name", "required");
///
/// let errors = Validator::new().validate(&data, &rules, &MessageOverrides::new())?;
/// assert_eq!(errors.first("user.email"), Some("The user.email must be a valid email address."));
/// assert_eq!(errors.first("user.name"), Some("The user.name field is required."));
/// # Ok::<(), rulebook_validator::ValidatorError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Validator {
    registry: RuleRegistry,
    config: ValidatorConfig,
}

impl Validator {
    /// Built-in rules, permissive about unknown names.
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in rules with the given configuration.
    pub fn with_config(config: ValidatorConfig) -> Self {
        Self {
            registry: RuleRegistry::new(),
            config,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// The check registry.
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Registers a simple check receiving `(field, value, parameters, data)`.
    ///
    /// Custom checks win over built-ins of the same name.
    pub fn extend<F>(&mut self, name: impl Into<String>, check: F) -> &mut Self
    where
        F: Fn(&str, &Value, &[String], &Value) -> bool + Send + Sync + 'static,
    {
        self.registry.extend(name, move |ctx: &mut RuleContext<'_>| {
            Ok(check(ctx.field(), ctx.value(), ctx.parameters(), ctx.data()))
        });
        self
    }

    /// Registers a check with full access to the [`RuleContext`]. An `Err`
    /// aborts the run.
    pub fn extend_with<F>(&mut self, name: impl Into<String>, check: F) -> &mut Self
    where
        F: Fn(&mut RuleContext<'_>) -> Result<bool> + Send + Sync + 'static,
    {
        self.registry.extend(name, check);
        self
    }

    /// Drops a custom check, re-exposing any built-in of the same name.
    pub fn remove(&mut self, name: &str) -> bool {
        self.registry.remove(name)
    }

    /// Runs every rule and returns the failures. An empty map means the data
    /// passed.
    pub fn validate(
        &self,
        data: &Value,
        rules: &FieldRules,
        messages: &MessageOverrides,
    ) -> Result<ErrorMap> {
        let mut errors = ErrorMap::new();
        self.run(data, rules, messages, &mut errors)?;
        Ok(errors)
    }

    /// Whether a fresh run produces any failure.
    pub fn fails(&self, data: &Value, rules: &FieldRules, messages: &MessageOverrides) -> Result<bool> {
        self.validate(data, rules, messages).map(|errors| !errors.is_empty())
    }

    /// Opens a [`Validation`] session over borrowed inputs.
    pub fn make<'a>(
        &'a self,
        data: &'a Value,
        rules: &'a FieldRules,
        messages: &'a MessageOverrides,
    ) -> Validation<'a> {
        Validation {
            validator: self,
            data,
            rules,
            messages,
            errors: ErrorMap::new(),
        }
    }

    fn run(
        &self,
        data: &Value,
        rules: &FieldRules,
        messages: &MessageOverrides,
        errors: &mut ErrorMap,
    ) -> Result<()> {
        for (field, declared) in rules {
            let rule_set = declared.to_rule_set();
            let value = path::get(data, field.as_str(), &NULL);

            if rule_set.contains(NULLABLE) && value.is_nullish() {
                trace!(field = %field, "nullable field is empty, rules skipped");
                continue;
            }

            for spec in &rule_set {
                let Some(check) = self.registry.lookup(spec.name()) else {
                    if self.config.strict {
                        return Err(ValidatorError::UnknownRule {
                            field: field.clone(),
                            rule: spec.name().to_owned(),
                        });
                    }
                    // Permissive: a rule nobody answers to never fails.
                    trace!(field = %field, rule = spec.name(), "unknown rule skipped");
                    continue;
                };

                let mut ctx =
                    RuleContext::new(spec, field, value, data, errors).strict(self.config.strict);
                let passed = check.run(&mut ctx)?;
                trace!(field = %field, rule = spec.name(), passed, "rule evaluated");

                if !passed {
                    debug!(field = %field, rule = spec.name(), "rule failed");
                    errors.add(field.as_str(), message::resolve(field, spec, messages));
                }
            }
        }

        debug!(
            fields = rules.len(),
            failed_fields = errors.len(),
            messages = errors.message_count(),
            "validation finished"
        );
        Ok(())
    }
}

/// Validates `data` with a default [`Validator`].
pub fn validate(data: &Value, rules: &FieldRules, messages: &MessageOverrides) -> Result<ErrorMap> {
    Validator::new().validate(data, rules, messages)
}

/// Whether `data` fails `rules` under a default [`Validator`].
pub fn fails(data: &Value, rules: &FieldRules, messages: &MessageOverrides) -> Result<bool> {
    Validator::new().fails(data, rules, messages)
}

/// A validation bound to one set of inputs.
///
/// Each call to [`validate`](Self::validate) starts from an empty error map,
/// so errors added by hand before a run are discarded; add them after.
#[derive(Debug)]
pub struct Validation<'a> {
    validator: &'a Validator,
    data: &'a Value,
    rules: &'a FieldRules,
    messages: &'a MessageOverrides,
    errors: ErrorMap,
}

impl Validation<'_> {
    /// Runs all rules. Returns `true` when nothing failed.
    pub fn validate(&mut self) -> Result<bool> {
        self.errors.clear();
        self.validator
            .run(self.data, self.rules, self.messages, &mut self.errors)?;
        Ok(self.errors.is_empty())
    }

    /// Re-runs and reports failure.
    pub fn fails(&mut self) -> Result<bool> {
        self.validate().map(|passed| !passed)
    }

    /// Re-runs and reports success.
    pub fn passes(&mut self) -> Result<bool> {
        self.validate()
    }

    /// Failures from the last run plus anything added since.
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Records a message under `field`.
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.add(field, message);
    }

    /// Consumes the session, keeping its errors.
    pub fn into_errors(self) -> ErrorMap {
        self.errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn data(json: serde_json::Value) -> Value {
        Value::from(json)
    }

    #[test]
    fn passing_fields_are_absent() {
        let errors = validate(
            &data(json!({"name": "John", "email": "bad"})),
            &FieldRules::new().field("name", "required").field("email", "email"),
            &MessageOverrides::new(),
        )
        .unwrap();

        assert!(!errors.has("name"));
        assert_eq!(errors.fields().collect::<Vec<_>>(), ["email"]);
    }

    #[test]
    fn every_failing_rule_adds_a_message() {
        let errors = validate(
            &data(json!({"code": "x"})),
            &FieldRules::new().field("code", "numeric|min:3|in:a,b"),
            &MessageOverrides::new(),
        )
        .unwrap();

        assert_eq!(
            errors.get("code").unwrap(),
            [
                "The code must be a number.",
                "The code must be at least 3 characters.",
                "The code must be one of: a, b.",
            ]
        );
    }

    #[test]
    fn session_reruns_from_scratch() {
        let validator = Validator::new();
        let data = data(json!({"email": "bad"}));
        let rules = FieldRules::new().field("email", "email");
        let messages = MessageOverrides::new();
        let mut session = validator.make(&data, &rules, &messages);

        assert!(session.fails().unwrap());
        session.add_error("email", "manual");
        assert_eq!(session.errors().message_count(), 2);

        assert!(!session.passes().unwrap());
        assert_eq!(session.errors().message_count(), 1);
        assert_eq!(session.into_errors().first("email"), Some("The email must be a valid email address."));
    }

    #[test]
    fn check_errors_end_the_run() {
        let mut validator = Validator::new();
        validator.extend_with("remote", |_| Err(ValidatorError::custom("backend down")));

        let result = validator.validate(
            &data(json!({"a": 1})),
            &FieldRules::new().field("a", "remote"),
            &MessageOverrides::new(),
        );
        assert_eq!(result.unwrap_err().to_string(), "backend down");
    }

    #[test]
    fn checks_can_add_errors_to_other_fields() {
        let mut validator = Validator::new();
        validator.extend_with("match_total", |ctx| {
            let total = ctx.lookup("total").as_f64().unwrap_or_default();
            if ctx.value().as_f64() != Some(total) {
                ctx.add_error("total", "The total does not match the sum.");
            }
            Ok(true)
        });

        let errors = validator
            .validate(
                &data(json!({"sum": 3, "total": 4})),
                &FieldRules::new().field("sum", "match_total"),
                &MessageOverrides::new(),
            )
            .unwrap();

        assert_eq!(errors.first("total"), Some("The total does not match the sum."));
        assert!(!errors.has("sum"));
    }

    #[test]
    fn registered_checks_show_in_the_registry() {
        let mut validator = Validator::with_config(ValidatorConfig::strict());
        validator.extend("slug", |_, _, _, _| true);

        assert!(validator.config().strict);
        assert_eq!(validator.registry().custom_names(), ["slug"]);
        assert!(validator.remove("slug"));
        assert!(validator.registry().custom_names().is_empty());
    }
}
