//! Value kinds.
//!
//! `ValueKind` is a lightweight classification for [`Value`], used in log
//! fields and to answer capability questions (named members, element count)
//! without matching on the payload.

use core::fmt::{Display, Formatter};

use crate::Value;

/// Represents the kind of a [`Value`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// [`Value::Null`]
    Null,
    /// [`Value::Bool`]
    Boolean,
    /// [`Value::Number`]
    Number,
    /// [`Value::String`]
    String,
    /// [`Value::Array`]
    Array,
    /// [`Value::Map`]
    Map,
    /// [`Value::Object`]
    Object,
}

impl ValueKind {
    /// Classifies a value.
    pub const fn from_value(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Map(_) => Self::Map,
            Value::Object(_) => Self::Object,
        }
    }

    /// Whether values of this kind carry named members.
    pub const fn has_members(&self) -> bool {
        matches!(self, Self::Map | Self::Object)
    }

    /// Whether values of this kind have an element count.
    pub const fn is_countable(&self) -> bool {
        matches!(self, Self::Array | Self::Map)
    }

    /// Lowercase display name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Map => "map",
            Self::Object => "object",
        }
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
