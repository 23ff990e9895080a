//! Validates a signup payload and prints the failures.

use rulebook_validator::prelude::*;

fn main() -> Result<(), ValidatorError> {
    let data: Value = serde_json::json!({
        "user": {"email": "ada@example", "name": "Ada"},
        "password": "hunter2",
        "password_confirmation": "hunter3",
        "role": "owner",
    })
    .into();

    let rules = FieldRules::new()
        .field("user.email", "required|email")
        .field("user.name", "required|min:2")
        .field("password", "required|min:8")
        .field("password_confirmation", "same:password")
        .field("role", "in:admin,editor,viewer");

    let messages = MessageOverrides::new().with("password_confirmation.same", "Passwords do not match.");

    let errors = Validator::new().validate(&data, &rules, &messages)?;
    if errors.is_empty() {
        println!("✓ signup is valid");
    }
    for (field, messages) in errors.iter() {
        for message in messages {
            println!("✗ {field}: {message}");
        }
    }
    Ok(())
}
