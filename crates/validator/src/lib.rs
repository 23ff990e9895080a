//! # rulebook-validator
//!
//! Declarative validation of nested data with rule strings.
//!
//! ## Quick Start
//!
//! ```rust
//! use rulebook_validator::prelude::*;
//!
//! let data: Value = serde_json::json!({
//!     "user": {"email": "ada@example.com", "age": 17},
//!     "password": "hunter22",
//!     "password_confirmation": "hunter22",
//! })
//! .into();
//!
//! let rules = FieldRules::new()
//!     .field("user.email", "required|email")
//!     .field("user.age", "required|numeric|min:18")
//!     .field("password_confirmation", "same:password");
//! let messages = MessageOverrides::new().with("user.age.min", "Adults only.");
//!
//! let errors = Validator::new().validate(&data, &rules, &messages)?;
//! assert_eq!(errors.first("user.age"), Some("Adults only."));
//! assert_eq!(errors.len(), 1);
//! # Ok::<(), ValidatorError>(())
//! ```
//!
//! ## Rules
//!
//! `required`, `nullable`, `email`, `min:N`, `max:N`, `numeric`, `string`,
//! `array`, `in:a,b,...`, `same:other.path`, `url`, `ip`, `mac`, `domain`,
//! `integer`, `float`, `boolean`, `safe`.
//!
//! Custom checks are added with [`Validator::extend`] or
//! [`Validator::extend_with`] and take precedence over built-ins.
//!
//! ## Errors
//!
//! Failed rules are data, collected in an [`ErrorMap`]. A
//! [`ValidatorError`] means the run itself could not finish because a check
//! returned an error. In strict mode an unknown rule name or a missing
//! parameter also ends the run; permissive runs skip the rule or read the
//! parameter as empty.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod builtin;
mod config;
mod engine;
mod error;
mod error_map;
pub mod filters;
pub mod message;
pub mod prelude;
mod registry;
mod rule;

pub use builtin::NAMES as BUILTIN_RULES;
pub use config::ValidatorConfig;
pub use engine::{Validation, Validator, fails, validate};
pub use error::{Result, ValidatorError};
pub use error_map::ErrorMap;
pub use message::MessageOverrides;
pub use registry::{Check, CheckFn, RuleContext, RuleRegistry};
pub use rule::{FieldRules, RuleSet, RuleSpec, Rules};
