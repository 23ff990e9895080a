//! The [`Value`] tree.

use std::borrow::Cow;

use indexmap::IndexMap;
use serde_json::Number;

use crate::kind::ValueKind;
use crate::members::Members;
use crate::record::Record;

/// String-keyed associative storage, iterated in insertion order.
pub type Map = IndexMap<String, Value>;

/// A heterogeneous, nested value.
///
/// Values have no identity beyond structural equality. Numbers keep the
/// integer/float distinction of [`serde_json::Number`], so `1` and `1.0`
/// are not equal.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Absent / null.
    #[default]
    Null,
    /// Boolean.
    Bool(bool),
    /// Integer or float.
    Number(Number),
    /// UTF-8 string.
    String(String),
    /// Ordered sequence. Not addressable by a path.
    Array(Vec<Value>),
    /// Associative mapping.
    Map(Map),
    /// Structured object with named fields.
    Object(Record),
}

impl Value {
    /// An empty [`Value::Map`].
    pub fn empty_map() -> Self {
        Self::Map(Map::new())
    }

    /// The kind of this value.
    pub const fn kind(&self) -> ValueKind {
        ValueKind::from_value(self)
    }

    /// Returns `true` for [`Value::Null`].
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Null or the empty string.
    ///
    /// This is the emptiness used by the `nullable` short-circuit. A string of
    /// spaces is *not* nullish.
    pub fn is_nullish(&self) -> bool {
        match self {
            Self::Null => true,
            Self::String(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Null, a string that trims to empty, or an empty array or map.
    ///
    /// This is the emptiness used by the `required` check. `0`, `false` and
    /// records (even without fields) are never blank.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Null => true,
            Self::String(s) => s.trim().is_empty(),
            Self::Array(items) => items.is_empty(),
            Self::Map(map) => map.is_empty(),
            Self::Bool(_) | Self::Number(_) | Self::Object(_) => false,
        }
    }

    /// Whether this node carries named members (a map or a record).
    pub const fn is_container(&self) -> bool {
        self.kind().has_members()
    }

    /// Borrows the member capability of a map or record.
    pub fn as_members(&self) -> Option<&dyn Members> {
        match self {
            Self::Map(map) => Some(map as &dyn Members),
            Self::Object(record) => Some(record as &dyn Members),
            _ => None,
        }
    }

    /// Mutably borrows the member capability of a map or record.
    pub fn as_members_mut(&mut self) -> Option<&mut dyn Members> {
        match self {
            Self::Map(map) => Some(map as &mut dyn Members),
            Self::Object(record) => Some(record as &mut dyn Members),
            _ => None,
        }
    }

    /// The string slice, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// The number, if this is a number.
    pub const fn as_number(&self) -> Option<&Number> {
        match self {
            Self::Number(n) => Some(n),
            _ => None,
        }
    }

    /// The number as `f64`, if this is a number.
    pub fn as_f64(&self) -> Option<f64> {
        self.as_number().and_then(Number::as_f64)
    }

    /// The boolean, if this is a boolean.
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Element count of an array or map.
    pub fn count(&self) -> Option<usize> {
        match self {
            Self::Array(items) => Some(items.len()),
            Self::Map(map) => Some(map.len()),
            _ => None,
        }
    }

    /// Renders a scalar as the string it compares as.
    ///
    /// Strings render verbatim, numbers in their JSON form, booleans as
    /// `true` / `false`. Null and containers have no string form.
    pub fn as_scalar_str(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::String(s) => Some(Cow::Borrowed(s)),
            Self::Number(n) => Some(Cow::Owned(n.to_string())),
            Self::Bool(b) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
            Self::Null | Self::Array(_) | Self::Map(_) | Self::Object(_) => None,
        }
    }
}
