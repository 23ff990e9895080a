//! End-to-end behavior of `Validator::validate`.

use pretty_assertions::assert_eq;
use rulebook_validator::prelude::*;
use rulebook_validator::{fails, validate};
use serde_json::json;

fn data(json: serde_json::Value) -> Value {
    Value::from(json)
}

fn no_messages() -> MessageOverrides {
    MessageOverrides::new()
}

// ============================================================================
// NULLABLE
// ============================================================================

#[test]
fn nullable_skips_null_and_empty_string() {
    let rules = FieldRules::new().field("nickname", "nullable|min:3|email");

    for value in [json!(null), json!("")] {
        let errors = validate(&data(json!({"nickname": value})), &rules, &no_messages()).unwrap();
        assert!(errors.is_empty(), "{value}");
    }

    let errors = validate(&data(json!({})), &rules, &no_messages()).unwrap();
    assert!(errors.is_empty());
}

#[test]
fn nullable_position_does_not_matter() {
    let rules = FieldRules::new().field("nickname", "min:3|nullable");
    let errors = validate(&data(json!({"nickname": ""})), &rules, &no_messages()).unwrap();
    assert!(errors.is_empty());
}

#[test]
fn nullable_still_validates_present_values() {
    let rules = FieldRules::new().field("nickname", "nullable|min:3");

    let errors = validate(&data(json!({"nickname": "ab"})), &rules, &no_messages()).unwrap();
    assert_eq!(
        errors.first("nickname"),
        Some("The nickname must be at least 3 characters.")
    );

    let errors = validate(&data(json!({"nickname": " "})), &rules, &no_messages()).unwrap();
    assert!(errors.has("nickname"));
}

// ============================================================================
// REQUIRED
// ============================================================================

#[test]
fn required_fails_on_empty_collections() {
    let rules = FieldRules::new()
        .field("tags", "required")
        .field("meta", "required")
        .field("note", "required");

    let errors = validate(
        &data(json!({"tags": [], "meta": {}, "note": "  "})),
        &rules,
        &no_messages(),
    )
    .unwrap();

    assert_eq!(errors.fields().collect::<Vec<_>>(), ["tags", "meta", "note"]);
    assert_eq!(errors.first("tags"), Some("The tags field is required."));
}

#[test]
fn required_resolves_nested_paths() {
    let rules = FieldRules::new().field("user.profile.name", "required");

    assert!(fails(&data(json!({"user": {}})), &rules, &no_messages()).unwrap());
    assert!(!fails(
        &data(json!({"user": {"profile": {"name": "Ada"}}})),
        &rules,
        &no_messages()
    )
    .unwrap());
}

#[test]
fn record_fields_set_to_null_count_as_missing() {
    let user = Record::new("User").with("name", Value::Null).with("age", 30);
    let root = Value::from_iter([("user", Value::from(user))]);
    let rules = FieldRules::new()
        .field("user.name", "required")
        .field("user.age", "required|numeric");

    let errors = validate(&root, &rules, &no_messages()).unwrap();
    assert_eq!(errors.fields().collect::<Vec<_>>(), ["user.name"]);
}

// ============================================================================
// MESSAGES
// ============================================================================

#[test]
fn message_precedence_field_rule_then_rule_then_default() {
    let rules = FieldRules::new()
        .field("email", "required")
        .field("name", "required")
        .field("age", "numeric");
    let messages = MessageOverrides::new()
        .with("email.required", "We need your email.")
        .with("required", "Missing.");

    let errors = validate(&data(json!({"age": "x"})), &rules, &messages).unwrap();

    assert_eq!(errors.first("email"), Some("We need your email."));
    assert_eq!(errors.first("name"), Some("Missing."));
    assert_eq!(errors.first("age"), Some("The age must be a number."));
}

#[test]
fn unknown_custom_rule_falls_back_to_generic_message() {
    let mut validator = Validator::new();
    validator.extend("uppercase", |_, value, _, _| {
        value.as_str().is_some_and(|s| s.chars().all(char::is_uppercase))
    });

    let errors = validator
        .validate(
            &data(json!({"code": "abc"})),
            &FieldRules::new().field("code", "uppercase"),
            &no_messages(),
        )
        .unwrap();
    assert_eq!(errors.first("code"), Some("The code field is invalid."));
}

// ============================================================================
// SAME
// ============================================================================

#[test]
fn same_compares_against_another_path() {
    let rules = FieldRules::new().field("password_confirmation", "same:password");

    let errors = validate(
        &data(json!({"password": "secret", "password_confirmation": "Secret"})),
        &rules,
        &no_messages(),
    )
    .unwrap();
    assert_eq!(
        errors.first("password_confirmation"),
        Some("The password_confirmation must match password.")
    );

    assert!(!fails(
        &data(json!({"password": "secret", "password_confirmation": "secret"})),
        &rules,
        &no_messages()
    )
    .unwrap());
}

#[test]
fn same_is_strict_about_kinds() {
    let rules = FieldRules::new().field("pin_confirmation", "same:pin");
    let input = data(json!({"pin": 1234, "pin_confirmation": "1234"}));
    assert!(fails(&input, &rules, &no_messages()).unwrap());
}

// ============================================================================
// UNKNOWN RULES
// ============================================================================

#[test]
fn unknown_rule_is_inert() {
    let rules = FieldRules::new().field("name", "required|no_such_rule");
    let errors = validate(&data(json!({"name": "Ada"})), &rules, &no_messages()).unwrap();
    assert!(errors.is_empty());
}

#[test]
fn strict_mode_rejects_unknown_rules() {
    let validator = Validator::with_config(ValidatorConfig::strict());
    let rules = FieldRules::new().field("name", "required|no_such_rule");

    let err = validator
        .validate(&data(json!({"name": "Ada"})), &rules, &no_messages())
        .unwrap_err();
    assert!(matches!(
        err,
        ValidatorError::UnknownRule { ref field, ref rule } if field == "name" && rule == "no_such_rule"
    ));
}

#[test]
fn missing_parameters_do_not_abort_permissive_runs() {
    let rules = FieldRules::new()
        .field("name", "same")
        .field("nickname", "required|min")
        .field("other", "required|numeric");
    let input = data(json!({"name": "abc", "nickname": "x", "other": "x"}));

    let errors = validate(&input, &rules, &no_messages()).unwrap();

    assert_eq!(errors.fields().collect::<Vec<_>>(), ["name", "other"]);
    assert_eq!(errors.first("other"), Some("The other must be a number."));
}

#[test]
fn strict_mode_rejects_missing_parameters() {
    let validator = Validator::with_config(ValidatorConfig::strict());
    let rules = FieldRules::new()
        .field("name", "required|min")
        .field("other", "required|numeric");

    let err = validator
        .validate(&data(json!({"name": "Ada", "other": "x"})), &rules, &no_messages())
        .unwrap_err();
    assert!(matches!(
        err,
        ValidatorError::MissingParameter { ref field, ref rule, index: 0 } if field == "name" && rule == "min"
    ));
}

// ============================================================================
// CUSTOM RULES
// ============================================================================

#[test]
fn custom_rule_overrides_builtin() {
    let mut validator = Validator::new();
    validator.extend("email", |_, value, _, _| {
        value.as_str().is_some_and(|s| s.ends_with("@corp.test"))
    });

    let rules = FieldRules::new().field("email", "email");
    let messages = no_messages();

    assert!(!validator
        .fails(&data(json!({"email": "anyone@corp.test"})), &rules, &messages)
        .unwrap());
    assert!(validator
        .fails(&data(json!({"email": "ada@example.com"})), &rules, &messages)
        .unwrap());

    assert!(validator.remove("email"));
    assert!(!validator
        .fails(&data(json!({"email": "ada@example.com"})), &rules, &messages)
        .unwrap());
}

#[test]
fn last_registration_wins() {
    let mut validator = Validator::new();
    validator.extend("email", |_, value, _, _| {
        value.as_str().is_some_and(|s| s.ends_with("@corp.test"))
    });
    validator.extend("email", |_, value, _, _| {
        value.as_str().is_some_and(|s| s.ends_with("@lab.test"))
    });

    let rules = FieldRules::new().field("email", "email");
    let messages = no_messages();

    assert!(!validator
        .fails(&data(json!({"email": "ada@lab.test"})), &rules, &messages)
        .unwrap());
    assert!(validator
        .fails(&data(json!({"email": "ada@corp.test"})), &rules, &messages)
        .unwrap());
    assert_eq!(validator.registry().custom_names(), ["email"]);
}

#[test]
fn custom_rule_sees_parameters_and_data() {
    let mut validator = Validator::new();
    validator.extend("greater_than", |_, value, parameters, data| {
        let missing = Value::Null;
        let other = rulebook_value::path::get(data, parameters[0].as_str(), &missing);
        match (value.as_f64(), other.as_f64()) {
            (Some(a), Some(b)) => a > b,
            _ => false,
        }
    });

    let rules = FieldRules::new().field("range.end", "greater_than:range.start");
    let messages = MessageOverrides::new().with("range.end.greater_than", "End must follow start.");

    let errors = validator
        .validate(&data(json!({"range": {"start": 5, "end": 2}})), &rules, &messages)
        .unwrap();
    assert_eq!(errors.first("range.end"), Some("End must follow start."));
}

// ============================================================================
// ORDER
// ============================================================================

#[test]
fn fields_and_messages_keep_declaration_order() {
    let rules = FieldRules::new()
        .field("zeta", "required")
        .field("alpha", ["string", "min:5"])
        .field("mid", "required|email");

    let errors = validate(&data(json!({"alpha": 1})), &rules, &no_messages()).unwrap();

    assert_eq!(errors.fields().collect::<Vec<_>>(), ["zeta", "alpha", "mid"]);
    assert_eq!(
        errors.get("alpha").unwrap(),
        ["The alpha must be a string.", "The alpha must be at least 5 characters."]
    );
    assert_eq!(
        errors.get("mid").unwrap(),
        ["The mid field is required.", "The mid must be a valid email address."]
    );
}

// ============================================================================
// PARAMETER WHITESPACE
// ============================================================================

#[test]
fn parameters_keep_their_whitespace() {
    let rules = FieldRules::new().field("role", "in:admin, user");

    assert!(fails(&data(json!({"role": "user"})), &rules, &no_messages()).unwrap());
    assert!(!fails(&data(json!({"role": " user"})), &rules, &no_messages()).unwrap());
    assert!(!fails(&data(json!({"role": "admin"})), &rules, &no_messages()).unwrap());
}

// ============================================================================
// DECLARATIONS FROM JSON
// ============================================================================

#[test]
fn rules_and_messages_deserialize_from_documents() {
    let rules: FieldRules = serde_json::from_value(json!({
        "email": "required|email",
        "tags": ["array", "min:1"],
    }))
    .unwrap();
    let messages: MessageOverrides =
        serde_json::from_value(json!({"tags.min": "Pick at least one tag."})).unwrap();

    let errors = validate(&data(json!({"email": "a@b.co", "tags": []})), &rules, &messages).unwrap();
    assert_eq!(
        serde_json::to_value(&errors).unwrap(),
        json!({"tags": ["Pick at least one tag."]})
    );
}
