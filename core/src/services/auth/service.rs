//! Main authentication service implementation

use std::sync::Arc;

use crate::domain::value_objects::IssuedToken;
use crate::errors::{AuthError, DomainResult};
use crate::repositories::TokenRepository;
use crate::services::token::TokenService;

use super::verifier::{CredentialOutcome, CredentialVerifier};

/// Authentication service for managing the session lifecycle
pub struct AuthService<V, T>
where
    V: CredentialVerifier,
    T: TokenRepository,
{
    /// Credential verification capability
    verifier: Arc<V>,
    /// Token service for issuance, validation and revocation
    token_service: Arc<TokenService<T>>,
}

impl<V, T> AuthService<V, T>
where
    V: CredentialVerifier,
    T: TokenRepository,
{
    /// Create a new authentication service
    pub fn new(verifier: Arc<V>, token_service: Arc<TokenService<T>>) -> Self {
        Self {
            verifier,
            token_service,
        }
    }

    /// Log a user in and return a freshly issued token
    ///
    /// Credential outcomes map to errors as follows: unknown email and
    /// wrong password collapse into `InvalidCredentials`, an unverified
    /// email stays distinguishable, and a rate-limit hit becomes
    /// `RateLimited`. On success the token is issued and persisted; if
    /// persistence fails the whole login fails, since a token that is not
    /// durably recorded can never be revoked.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        user_agent: Option<String>,
    ) -> DomainResult<IssuedToken> {
        let user_id = match self.verifier.verify(email, password).await? {
            CredentialOutcome::Verified(user_id) => user_id,
            CredentialOutcome::UnknownEmail | CredentialOutcome::WrongPassword => {
                tracing::info!("login rejected: invalid credentials");
                return Err(AuthError::InvalidCredentials.into());
            }
            CredentialOutcome::EmailNotVerified => {
                tracing::info!("login rejected: email not verified");
                return Err(AuthError::EmailNotVerified.into());
            }
            CredentialOutcome::RateLimited => {
                tracing::warn!("login rejected: rate limited");
                return Err(AuthError::RateLimited.into());
            }
        };

        let issued = self.token_service.issue(user_id)?;
        self.token_service
            .persist(user_id, &issued, user_agent)
            .await?;

        tracing::info!(user_id, "login succeeded");
        Ok(issued)
    }

    /// Log out by revoking the presented token
    ///
    /// A missing token is a client error: there is nothing to invalidate.
    /// Deleting a token that no longer exists is success.
    pub async fn logout(&self, token: Option<&str>) -> DomainResult<()> {
        let token = token.ok_or(AuthError::MissingToken)?;
        self.token_service.revoke(token).await?;
        tracing::info!("logout succeeded");
        Ok(())
    }

    /// Validate a bearer token and return the authenticated user id
    pub async fn authenticate(&self, token: Option<&str>) -> Option<i64> {
        self.token_service.validate(token?).await
    }

    /// Authentication predicate; never fails, only answers
    pub async fn is_authenticated(&self, token: Option<&str>) -> bool {
        self.authenticate(token).await.is_some()
    }
}
