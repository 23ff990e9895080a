//! Error types for value construction.

/// Errors raised while building a [`Value`](crate::Value) from foreign data.
#[derive(Debug, thiserror::Error)]
pub enum ValueError {
    /// The source type could not be serialized into a value tree.
    #[error("cannot convert into a value: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A float that has no JSON representation (NaN or infinite).
    #[error("non-finite number {0} cannot be stored in a value")]
    NonFinite(f64),
}

/// Result alias for value operations.
pub type ValueResult<T> = Result<T, ValueError>;
