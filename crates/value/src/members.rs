//! The "has named members" capability shared by maps and records.
//!
//! The path resolver never branches on whether a node is a map or a record;
//! it asks the node for its [`Members`] and walks through that.

use crate::value::{Map, Value};

/// A node whose children are addressed by name.
pub trait Members {
    /// The member reachable under `name`, if it resolves.
    ///
    /// For a map this is any present key (including one holding null); for a
    /// record only a field holding a non-null value resolves.
    fn member_get(&self, name: &str) -> Option<&Value>;

    /// Mutable access to a resolvable member.
    fn member_get_mut(&mut self, name: &str) -> Option<&mut Value>;

    /// Assigns `value` under `name`, creating the member if needed.
    fn member_set(&mut self, name: &str, value: Value);

    /// Whether `name` resolves.
    fn member_has(&self, name: &str) -> bool {
        self.member_get(name).is_some()
    }
}

impl Members for Map {
    fn member_get(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }

    fn member_get_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.get_mut(name)
    }

    fn member_set(&mut self, name: &str, value: Value) {
        self.insert(name.to_owned(), value);
    }
}
