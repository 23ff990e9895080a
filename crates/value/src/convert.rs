//! Conversions between [`Value`], Rust primitives and `serde_json`.
//!
//! JSON objects become [`Value::Map`]; records serialize as plain objects
//! (the class name is not part of the wire form).

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Number;

use crate::error::{ValueError, ValueResult};
use crate::record::Record;
use crate::value::{Map, Value};

impl Value {
    /// Builds a value tree from anything serde can serialize.
    ///
    /// Structs and maps become [`Value::Map`].
    pub fn from_serialize<T: Serialize + ?Sized>(source: &T) -> ValueResult<Self> {
        Ok(serde_json::to_value(source)?.into())
    }

    /// Builds a number from a float, rejecting NaN and infinities.
    pub fn try_from_f64(n: f64) -> ValueResult<Self> {
        Number::from_f64(n)
            .map(Self::Number)
            .ok_or(ValueError::NonFinite(n))
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => Self::Number(n),
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(object) => Self::Map(
                object
                    .into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => Self::Number(n),
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            Value::Map(map) => Self::Object(
                map.into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
            Value::Object(record) => Self::from(Value::Map(record.to_map())),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_none(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => n.serialize(serializer),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => serializer.collect_seq(items),
            Value::Map(map) => serializer.collect_map(map),
            Value::Object(record) => serializer.collect_map(record.properties()),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        serde_json::Value::deserialize(deserializer).map(Self::from)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Self::Number(Number::from(n))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<f64> for Value {
    /// Non-finite floats become [`Value::Null`]; use
    /// [`Value::try_from_f64`] to reject them instead.
    fn from(n: f64) -> Self {
        Number::from_f64(n).map_or(Self::Null, Self::Number)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Self::from(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::Array(items)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Self::Map(map)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Self::Object(record)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Null, Into::into)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::Map(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn json_objects_become_maps_in_order() {
        let value = Value::from(json!({"b": 1, "a": {"c": [true, null]}}));

        let Value::Map(map) = &value else {
            panic!("expected a map, got {value:?}");
        };
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, ["b", "a"]);
        assert_eq!(
            map["a"],
            Value::from_iter([("c", Value::Array(vec![Value::Bool(true), Value::Null]))])
        );
    }

    #[test]
    fn round_trips_through_json() {
        let json = json!({"user": {"name": "John", "tags": ["a", "b"], "age": 30, "ratio": 0.5}});
        let value = Value::from(json.clone());
        assert_eq!(serde_json::Value::from(value), json);
    }

    #[test]
    fn records_serialize_as_plain_objects() {
        let value = Value::from(Record::new("User").with("name", "John"));
        assert_eq!(serde_json::to_value(&value).unwrap(), json!({"name": "John"}));
        assert_eq!(serde_json::Value::from(value), json!({"name": "John"}));
    }

    #[test]
    fn deserializes_from_json_text() {
        let value: Value = serde_json::from_str(r#"{"a": [1, "x"]}"#).unwrap();
        assert_eq!(
            value,
            Value::from_iter([("a", Value::Array(vec![Value::from(1), Value::from("x")]))])
        );
    }

    #[test]
    fn from_serialize_builds_maps_from_structs() {
        #[derive(Serialize)]
        struct Signup<'a> {
            email: &'a str,
            age: u32,
        }

        let value = Value::from_serialize(&Signup { email: "a@b.co", age: 20 }).unwrap();
        assert_eq!(value, Value::from_iter([("email", Value::from("a@b.co")), ("age", Value::from(20))]));
    }

    #[test]
    fn non_finite_floats() {
        assert_eq!(Value::from(f64::NAN), Value::Null);
        assert!(matches!(
            Value::try_from_f64(f64::INFINITY),
            Err(ValueError::NonFinite(_))
        ));
        assert_eq!(Value::try_from_f64(2.5).unwrap(), Value::from(2.5));
    }

    #[test]
    fn options_map_none_to_null() {
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::from("x"));
    }
}
