//! Error types shared across the workspace.

mod store_error;

pub use store_error::StoreError;

/// Convenience alias used by every fallible operation in the workspace.
pub type LectioResult<T> = Result<T, LectioError>;

/// Top-level error type for the lectio engine.
#[derive(Debug, thiserror::Error)]
pub enum LectioError {
    /// The caller passed an empty or malformed cache key.
    /// Rejected synchronously, before touching any tier.
    #[error("invalid cache key: {reason}")]
    InvalidKey { reason: String },

    /// The persistent store or event log collaborator failed.
    /// The memory tier remains usable in this state.
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("serialization failed: {message}")]
    Serialization { message: String },
}

impl From<serde_json::Error> for LectioError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: err.to_string(),
        }
    }
}
