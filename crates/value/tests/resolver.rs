//! Integration tests for mixed map / record traversal.

use pretty_assertions::assert_eq;
use rulebook_value::{Record, Value, ValueKind, path};
use serde_json::json;

fn order() -> Value {
    let customer = Record::new("Customer")
        .with("name", "Ada")
        .with("email", Value::Null)
        .with("address", Value::from(json!({"city": "London", "zip": null})));

    Value::from_iter([
        ("id", Value::from(7)),
        ("customer", Value::from(customer)),
        ("lines", Value::from(json!([{"sku": "A-1"}]))),
    ])
}

#[test]
fn reads_through_record_into_map() {
    let order = order();
    assert_eq!(
        path::get(&order, "customer.address.city", &Value::Null),
        &Value::from("London")
    );
}

#[test]
fn map_null_is_found_but_record_null_is_not() {
    let order = order();
    let default = Value::from("fallback");

    assert_eq!(path::get(&order, "customer.address.zip", &default), &Value::Null);
    assert_eq!(path::get(&order, "customer.email", &default), &default);
}

#[test]
fn arrays_stop_the_walk() {
    let order = order();
    assert!(!path::has(&order, "lines.0.sku"));
}

#[test]
fn writes_materialize_into_unset_record_fields() {
    let mut order = order();
    path::set(&mut order, "customer.email.primary", Value::from("ada@example.com"));

    assert_eq!(
        path::get(&order, "customer.email.primary", &Value::Null),
        &Value::from("ada@example.com")
    );
    assert_eq!(
        path::get(&order, "customer.email", &Value::Null).kind(),
        ValueKind::Map
    );
}

#[test]
fn serializes_back_to_plain_json() {
    let mut order = order();
    path::set(&mut order, "customer.vip", Value::from(true));

    assert_eq!(
        serde_json::to_value(&order).unwrap(),
        json!({
            "id": 7,
            "customer": {
                "name": "Ada",
                "email": null,
                "address": {"city": "London", "zip": null},
                "vip": true
            },
            "lines": [{"sku": "A-1"}]
        })
    );
}
