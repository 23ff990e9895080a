//! # rulebook-value
//!
//! The data model validated by `rulebook-validator`: a heterogeneous, nested
//! [`Value`] plus dot-path access through maps and structured objects.
//!
//! ## Quick Start
//!
//! ```rust
//! use rulebook_value::{Value, path};
//!
//! let mut root = Value::empty_map();
//! path::set(&mut root, "user.name", Value::from("John"));
//!
//! assert_eq!(path::get(&root, "user.name", &Value::Null), &Value::from("John"));
//! assert!(path::has(&root, "user"));
//! assert!(!path::has(&root, "user.age"));
//! ```
//!
//! ## Containers
//!
//! Two node kinds carry named members and are addressable by a path:
//!
//! - [`Map`]: string-keyed associative storage. A key is present even when
//!   it holds [`Value::Null`].
//! - [`Record`]: a structured object with a class name and named fields. A
//!   field only counts as set when it holds a non-null value.
//!
//! Both implement [`Members`], the only capability the path resolver uses.
//! Arrays are never addressable: a numeric segment is an ordinary key.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod convert;
mod error;
mod kind;
mod members;
pub mod path;
mod record;
mod value;

pub use error::{ValueError, ValueResult};
pub use kind::ValueKind;
pub use members::Members;
pub use path::Path;
pub use record::Record;
pub use value::{Map, Value};

/// Re-exported so callers can build numbers without naming `serde_json`.
pub use serde_json::Number;
