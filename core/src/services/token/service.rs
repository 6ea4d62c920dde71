//! Main token service implementation

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::{AccessToken, Claims};
use crate::domain::value_objects::IssuedToken;
use crate::errors::DomainError;
use crate::repositories::TokenRepository;

use super::config::TokenServiceConfig;

/// Service for issuing and validating access tokens
///
/// Validation combines two independent checks with logical AND: the
/// cryptographic signature/claims, and the presence of a live record in the
/// token store. The store makes logout effective even though signed tokens
/// are otherwise un-revocable before their natural expiry.
pub struct TokenService<R: TokenRepository> {
    pub(crate) repository: R,
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl<R: TokenRepository> TokenService<R> {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `repository` - Token repository for persistence
    /// * `config` - Token service configuration
    ///
    /// # Returns
    ///
    /// A new `TokenService`, or a configuration error when no signing
    /// secret is set. Callers treat that error as fatal at startup.
    pub fn new(repository: R, config: TokenServiceConfig) -> Result<Self, DomainError> {
        if config.secret.trim().is_empty() {
            return Err(DomainError::Configuration {
                message: "token signing secret is not configured".to_string(),
            });
        }

        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(config.algorithm);
        validation.set_issuer(&[&config.issuer]);
        validation.set_audience(&[&config.audience]);
        validation.validate_exp = true;
        validation.validate_nbf = true;
        // Exact expiry; the store check uses the same boundary
        validation.leeway = 0;

        Ok(Self {
            repository,
            config,
            encoding_key,
            decoding_key,
            validation,
        })
    }

    /// Issues a signed access token for a user
    ///
    /// Claims carry the configured issuer and audience, `iat`/`nbf` of now,
    /// and an expiry of now plus the configured TTL. No persistence happens
    /// here; the caller stores the token separately.
    ///
    /// # Returns
    ///
    /// * `Ok(IssuedToken)` - The signed token and its expiry
    /// * `Err(DomainError)` - Signing failed
    pub fn issue(&self, user_id: i64) -> Result<IssuedToken, DomainError> {
        let now = Utc::now();
        let expires_at = now + Duration::seconds(self.config.ttl_seconds);
        let claims = Claims::new(
            user_id,
            now,
            expires_at,
            &self.config.issuer,
            &self.config.audience,
        );

        let header = Header::new(self.config.algorithm);
        let token = encode(&header, &claims, &self.encoding_key).map_err(|e| {
            DomainError::Internal {
                message: format!("failed to sign token: {}", e),
            }
        })?;

        Ok(IssuedToken::new(token, expires_at))
    }

    /// Persists a record for an issued token
    ///
    /// # Returns
    ///
    /// * `Ok(AccessToken)` - The stored record
    /// * `Err(DomainError)` - Storage failure; the token must then be
    ///   treated as never issued
    pub async fn persist(
        &self,
        user_id: i64,
        issued: &IssuedToken,
        user_agent: Option<String>,
    ) -> Result<AccessToken, DomainError> {
        let record = AccessToken::new(
            user_id,
            issued.token.clone(),
            issued.expires_at,
            user_agent,
        );
        self.repository.save(record).await
    }

    /// Validates a bearer token and returns the authenticated user id
    ///
    /// The token authenticates only when its signature and claims verify
    /// AND a live record for it exists in the store. Every failure mode
    /// (bad signature, expired or immature claims, revoked or expired
    /// record, non-numeric subject, storage lookup failure) resolves to
    /// `None`; this is a predicate, not a throwing API.
    pub async fn validate(&self, token: &str) -> Option<i64> {
        if token.trim().is_empty() {
            return None;
        }

        let claims = self.decode(token)?;

        match self.repository.exists_live(token).await {
            Ok(true) => {}
            Ok(false) => return None,
            Err(e) => {
                tracing::warn!("token store lookup failed: {}", e);
                return None;
            }
        }

        let user_id = claims.user_id()?;

        // Best-effort last-used tracking; never blocks authentication
        if let Err(e) = self.repository.touch(token).await {
            tracing::debug!("failed to update last_used_at: {}", e);
        }

        Some(user_id)
    }

    /// Deletes the store record for a token, revoking it
    ///
    /// Deleting an unknown token is success; only infrastructure failures
    /// surface as errors.
    pub async fn revoke(&self, token: &str) -> Result<(), DomainError> {
        self.repository.delete(token).await
    }

    /// Removes expired records from storage
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - Number of records deleted
    pub async fn sweep_expired(&self) -> Result<usize, DomainError> {
        self.repository.delete_expired().await
    }

    /// Decodes and verifies a token's signature and claims
    fn decode(&self, token: &str) -> Option<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .ok()
    }
}
