//! Mock collaborators for auth service tests

use async_trait::async_trait;
use std::collections::HashMap;

use crate::errors::DomainError;
use crate::services::auth::{CredentialOutcome, CredentialVerifier};

/// Credential verifier backed by a fixed email → outcome table
pub struct MockCredentialVerifier {
    outcomes: HashMap<String, CredentialOutcome>,
}

impl MockCredentialVerifier {
    pub fn new() -> Self {
        Self {
            outcomes: HashMap::new(),
        }
    }

    /// Register the outcome returned for an email
    pub fn with_outcome(mut self, email: &str, outcome: CredentialOutcome) -> Self {
        self.outcomes.insert(email.to_string(), outcome);
        self
    }
}

#[async_trait]
impl CredentialVerifier for MockCredentialVerifier {
    async fn verify(
        &self,
        email: &str,
        _password: &str,
    ) -> Result<CredentialOutcome, DomainError> {
        Ok(self
            .outcomes
            .get(email)
            .cloned()
            .unwrap_or(CredentialOutcome::UnknownEmail))
    }
}

/// Verifier whose backend is unreachable
pub struct FailingCredentialVerifier;

#[async_trait]
impl CredentialVerifier for FailingCredentialVerifier {
    async fn verify(
        &self,
        _email: &str,
        _password: &str,
    ) -> Result<CredentialOutcome, DomainError> {
        Err(DomainError::storage("credential backend unreachable"))
    }
}
