//! Authentication route handlers
//!
//! This module contains the auth subsystem endpoints:
//! - Login (credential verification and token issuance)
//! - Logout (token revocation)
//! - Session check (the authentication predicate)

pub mod login;
pub mod logout;
pub mod session;

use std::sync::Arc;

use rf_core::repositories::TokenRepository;
use rf_core::services::auth::{AuthService, CredentialVerifier};

/// Shared application state injected into handlers
pub struct AppState<V, T>
where
    V: CredentialVerifier + 'static,
    T: TokenRepository + 'static,
{
    /// Authentication service orchestrating the session lifecycle
    pub auth_service: Arc<AuthService<V, T>>,
}

impl<V, T> Clone for AppState<V, T>
where
    V: CredentialVerifier + 'static,
    T: TokenRepository + 'static,
{
    fn clone(&self) -> Self {
        Self {
            auth_service: Arc::clone(&self.auth_service),
        }
    }
}
