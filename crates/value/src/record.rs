//! Structured objects with named fields.

use indexmap::IndexMap;

use crate::members::Members;
use crate::value::{Map, Value};

/// A structured object: a class name plus named fields.
///
/// Unlike a [`Map`], a record distinguishes *declared* fields from *set*
/// fields: a field holding [`Value::Null`] exists but is not set, so the path
/// resolver treats it like a missing member.
///
/// ```rust
/// use rulebook_value::{Record, Value, path};
///
/// let user = Value::Object(Record::new("User").with("name", "John").with("email", Value::Null));
///
/// assert!(path::has(&user, "name"));
/// assert!(!path::has(&user, "email"));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    class: String,
    fields: IndexMap<String, Value>,
}

impl Record {
    /// Creates a record of the given class with no fields.
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            fields: IndexMap::new(),
        }
    }

    /// Builder-style field assignment.
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Assigns every `(field, value)` pair, overwriting existing fields.
    pub fn fill<I, K, V>(&mut self, properties: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        for (field, value) in properties {
            self.fields.insert(field.into(), value.into());
        }
        self
    }

    /// The class name.
    pub fn class_name(&self) -> &str {
        &self.class
    }

    /// All declared fields, set or not, in declaration order.
    pub fn properties(&self) -> &IndexMap<String, Value> {
        &self.fields
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if no field is declared.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Converts the record, recursively, into plain maps.
    ///
    /// Nested records become maps as well; the class name is dropped.
    pub fn to_map(&self) -> Map {
        self.fields
            .iter()
            .map(|(field, value)| (field.clone(), flatten(value)))
            .collect()
    }
}

fn flatten(value: &Value) -> Value {
    match value {
        Value::Object(record) => Value::Map(record.to_map()),
        Value::Array(items) => Value::Array(items.iter().map(flatten).collect()),
        Value::Map(map) => Value::Map(
            map.iter()
                .map(|(key, value)| (key.clone(), flatten(value)))
                .collect(),
        ),
        other => other.clone(),
    }
}

impl Members for Record {
    fn member_get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name).filter(|value| !value.is_null())
    }

    fn member_get_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.fields.get_mut(name).filter(|value| !value.is_null())
    }

    fn member_set(&mut self, name: &str, value: Value) {
        self.fields.insert(name.to_owned(), value);
    }
}
