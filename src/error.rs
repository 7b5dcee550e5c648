//! Error types shared by both engines.
//!
//! All failures are programmer errors detected eagerly at construction.
//! Nothing here is transient or retryable: once an engine exists, stepping
//! it cannot fail.

use thiserror::Error;

/// Errors raised when building an engine or a problem instance.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A parameter violates its documented range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The item list or city list is empty.
    #[error("empty instance: no {0} supplied")]
    EmptyInstance(&'static str),
}

/// Result type alias for engine construction.
pub type Result<T> = std::result::Result<T, EngineError>;

pub(crate) fn invalid(message: impl Into<String>) -> EngineError {
    EngineError::InvalidConfiguration(message.into())
}
