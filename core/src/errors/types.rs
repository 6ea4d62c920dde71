//! Authentication error definitions
//!
//! These errors represent login/logout failure scenarios. The presentation
//! layer maps them to HTTP status codes; messages here are for logs and
//! error bodies, not for flow control.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown email, wrong password, or any other credential mismatch.
    /// The distinction is not exposed to clients.
    #[error("Authentication failed")]
    InvalidCredentials,

    /// The account exists but its email address has not been verified
    #[error("Email address not verified")]
    EmailNotVerified,

    /// Too many login attempts in the rate-limit window
    #[error("Too many attempts, try again later")]
    RateLimited,

    /// Logout was requested without presenting a token to invalidate
    #[error("No token provided")]
    MissingToken,
}
