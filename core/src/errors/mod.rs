//! Domain-specific error types and error handling.

mod types;

// Re-export all error types
pub use types::AuthError;

use thiserror::Error;

/// Core domain errors (general purpose)
///
/// Validation failures of bearer tokens are deliberately absent from this
/// taxonomy: token validation is a predicate that resolves to "not
/// authenticated", never an error surfaced to callers.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to authentication-specific errors
    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl DomainError {
    /// Storage-level failure with context
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
