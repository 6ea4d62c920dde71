//! Credential verification capability
//!
//! Password checking itself lives outside this subsystem; the auth service
//! consumes it only through this trait.

use async_trait::async_trait;

use crate::errors::DomainError;

/// Outcome of a credential check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialOutcome {
    /// Credentials match a verified account; carries the user id
    Verified(i64),

    /// No account with this email
    UnknownEmail,

    /// Account exists but the password does not match
    WrongPassword,

    /// Credentials match but the email address is unverified
    EmailNotVerified,

    /// Too many attempts for this identity in the current window
    RateLimited,
}

/// Verifies an email/password pair against the identity backend
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// Check credentials and report a distinguishable outcome
    ///
    /// Infrastructure failures (connectivity etc.) surface as errors;
    /// everything else is an outcome, not an error.
    async fn verify(&self, email: &str, password: &str)
        -> Result<CredentialOutcome, DomainError>;
}
