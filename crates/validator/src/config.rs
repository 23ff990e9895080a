//! Validator configuration.

use serde::{Deserialize, Serialize};

/// Behavior switches for a [`Validator`](crate::Validator).
///
/// Deserializes from a partial document; missing keys keep their defaults.
///
/// ```toml
/// [validator]
/// strict = true
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Turn unknown rule names into [`ValidatorError::UnknownRule`](crate::ValidatorError::UnknownRule)
    /// instead of skipping them, and missing `min`/`max`/`same` parameters
    /// into [`ValidatorError::MissingParameter`](crate::ValidatorError::MissingParameter)
    /// instead of reading them as empty.
    pub strict: bool,
}

impl ValidatorConfig {
    /// Unknown rules are skipped, missing parameters read as empty.
    pub const fn permissive() -> Self {
        Self { strict: false }
    }

    /// Unknown rules and missing parameters abort the run.
    pub const fn strict() -> Self {
        Self { strict: true }
    }
}
