//! Error types for rule evaluation.
//!
//! A *failed rule* is not an error: it becomes a message in the
//! [`ErrorMap`](crate::ErrorMap). [`ValidatorError`] is reserved for runs that
//! cannot complete.

/// Errors that abort a validation run.
#[derive(Debug, thiserror::Error)]
pub enum ValidatorError {
    /// A rule name has neither a custom nor a built-in check (strict mode only).
    #[error("no check is registered for rule `{rule}` on field `{field}`")]
    UnknownRule {
        /// Field the rule was declared on.
        field: String,
        /// The unresolved rule name.
        rule: String,
    },

    /// A check asked for a parameter the declaration does not carry.
    #[error("rule `{rule}` on field `{field}` needs a parameter at position {index}")]
    MissingParameter {
        /// Field the rule was declared on.
        field: String,
        /// The rule name.
        rule: String,
        /// Zero-based parameter position.
        index: usize,
    },

    /// Raised by a custom check.
    #[error(transparent)]
    Custom(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl ValidatorError {
    /// Wraps a plain message as a [`ValidatorError::Custom`].
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into().into())
    }
}

/// Result alias used across the crate.
pub type Result<T, E = ValidatorError> = std::result::Result<T, E>;
