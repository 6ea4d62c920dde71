//! Authentication service module
//!
//! Orchestrates the session lifecycle: login (credential verify → issue →
//! persist), logout (delete the store record), and the authentication
//! predicate used on every request.

mod service;
mod verifier;

#[cfg(test)]
mod tests;

pub use service::AuthService;
pub use verifier::{CredentialOutcome, CredentialVerifier};
