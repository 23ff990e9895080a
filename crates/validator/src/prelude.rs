//! Prelude module for convenient imports.
//!
//! `use rulebook_validator::prelude::*;` brings in the engine, the rule and
//! message types, and [`Value`] from `rulebook-value`.

pub use crate::config::ValidatorConfig;
pub use crate::engine::{Validation, Validator};
pub use crate::error::ValidatorError;
pub use crate::error_map::ErrorMap;
pub use crate::filters::Filter;
pub use crate::message::MessageOverrides;
pub use crate::registry::{RuleContext, RuleRegistry};
pub use crate::rule::{FieldRules, RuleSet, RuleSpec, Rules};

pub use rulebook_value::{Path, Record, Value};
