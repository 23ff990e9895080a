//! Dot-path access for [`Value`].
//!
//! A path is a sequence of string segments, usually written as
//! `"user.address.city"`. Every segment is a member name: numeric segments are
//! ordinary keys and arrays are never indexed.
//!
//! Reads ([`get`], [`has`]) walk [`Members`] and stop at the first node that
//! cannot resolve the next segment. Writes ([`set`]) materialize empty maps
//! for missing or non-container intermediates.

use std::fmt;
use std::str::FromStr;

use smallvec::SmallVec;

use crate::members::Members;
use crate::value::{Map, Value};

/// A parsed dot-path.
///
/// Segments are never re-split, so a segment built with
/// [`Path::from_segments`] may contain a literal dot; the string form cannot
/// express that.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Path {
    segments: SmallVec<[String; 4]>,
}

impl Path {
    /// The empty path, addressing the root itself.
    pub fn root() -> Self {
        Self::default()
    }

    /// Splits a dot-delimited string. The empty string is the root path.
    ///
    /// Empty segments (`"a..b"`) are kept as empty-string keys.
    pub fn parse(path: &str) -> Self {
        if path.is_empty() {
            return Self::root();
        }
        Self {
            segments: path.split('.').map(str::to_owned).collect(),
        }
    }

    /// Builds a path from pre-split segments.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// The segments in order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` for the root path.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

impl FromStr for Path {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for Path {
    fn from(path: &str) -> Self {
        Self::parse(path)
    }
}

impl From<&String> for Path {
    fn from(path: &String) -> Self {
        Self::parse(path)
    }
}

impl From<String> for Path {
    fn from(path: String) -> Self {
        Self::parse(&path)
    }
}

impl From<&Path> for Path {
    fn from(path: &Path) -> Self {
        path.clone()
    }
}

impl From<Vec<String>> for Path {
    fn from(segments: Vec<String>) -> Self {
        Self::from_segments(segments)
    }
}

impl From<&[&str]> for Path {
    fn from(segments: &[&str]) -> Self {
        Self::from_segments(segments.iter().copied())
    }
}

impl<const N: usize> From<[&str; N]> for Path {
    fn from(segments: [&str; N]) -> Self {
        Self::from_segments(segments)
    }
}

// ==================== Resolver ====================

/// Resolves `path` inside `root`, or `None` if any segment is missing.
pub fn lookup<'v>(root: &'v Value, path: &Path) -> Option<&'v Value> {
    path.segments()
        .iter()
        .try_fold(root, |node, segment| node.as_members()?.member_get(segment))
}

/// Reads the value at `path`, falling back to `default`.
///
/// At each step a map must contain the key and a record must have the field
/// set; any other node (scalar, array, null) yields `default`. The empty path
/// returns `root`.
pub fn get<'v>(root: &'v Value, path: impl Into<Path>, default: &'v Value) -> &'v Value {
    lookup(root, &path.into()).unwrap_or(default)
}

/// Whether the whole of `path` resolves inside `root`.
pub fn has(root: &Value, path: impl Into<Path>) -> bool {
    lookup(root, &path.into()).is_some()
}

/// Writes `value` at `path` and returns the (possibly updated) root.
///
/// Missing intermediates, and intermediates that are not maps or records, are
/// replaced by empty maps. The empty path replaces the root.
///
/// If `root` (or the node a write lands on) is neither a map nor a record the
/// write is a silent no-op and the root is returned unchanged.
pub fn set(root: &mut Value, path: impl Into<Path>, value: Value) -> &mut Value {
    let path = path.into();
    set_segments(root, path.segments(), value);
    root
}

fn set_segments(node: &mut Value, segments: &[String], value: Value) {
    let Some((first, rest)) = segments.split_first() else {
        *node = value;
        return;
    };

    let Some(members) = node.as_members_mut() else {
        // Permissive: writing through a scalar or array root does nothing.
        tracing::trace!(kind = %node.kind(), segment = %first, "path write skipped, node has no members");
        return;
    };

    if rest.is_empty() {
        members.member_set(first, value);
        return;
    }

    if !members.member_get(first).is_some_and(Value::is_container) {
        members.member_set(first, Value::Map(Map::new()));
    }
    if let Some(child) = members.member_get_mut(first) {
        set_segments(child, rest, value);
    }
}

// ==================== Value methods ====================

impl Value {
    /// Reads the value at a dot-path, or `None` if it does not resolve.
    ///
    /// ```rust
    /// use rulebook_value::Value;
    ///
    /// let value: Value = serde_json::json!({"user": {"name": "John"}}).into();
    /// assert_eq!(value.get_path("user.name"), Some(&Value::from("John")));
    /// assert_eq!(value.get_path("user.age"), None);
    /// ```
    pub fn get_path(&self, path: impl Into<Path>) -> Option<&Value> {
        lookup(self, &path.into())
    }

    /// Whether a dot-path resolves.
    pub fn has_path(&self, path: impl Into<Path>) -> bool {
        has(self, path)
    }

    /// Writes at a dot-path; see [`set`].
    pub fn set_path(&mut self, path: impl Into<Path>, value: impl Into<Value>) -> &mut Self {
        set(self, path, value.into())
    }
}
