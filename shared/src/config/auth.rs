//! Authentication and authorization configuration

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub secret: String,

    /// Access token lifetime in seconds
    pub ttl_seconds: i64,

    /// JWT issuer claim
    pub issuer: String,

    /// JWT audience claim
    pub audience: String,
}

impl JwtConfig {
    /// Create a new JWT configuration with the given secret
    ///
    /// Returns a [`ConfigError`] if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.trim().is_empty() {
            return Err(ConfigError::new("JWT_SECRET must not be empty"));
        }
        Ok(Self {
            secret,
            ttl_seconds: DEFAULT_TTL_SECONDS,
            issuer: DEFAULT_ISSUER.to_string(),
            audience: DEFAULT_AUDIENCE.to_string(),
        })
    }

    /// Set the token lifetime in seconds
    pub fn with_ttl_seconds(mut self, seconds: i64) -> Self {
        self.ttl_seconds = seconds;
        self
    }

    /// Set the issuer claim
    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = issuer.into();
        self
    }

    /// Set the audience claim
    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = audience.into();
        self
    }
}

/// Default access token lifetime (1 hour)
pub const DEFAULT_TTL_SECONDS: i64 = 3600;

/// Default JWT issuer
pub const DEFAULT_ISSUER: &str = "refcat";

/// Default JWT audience
pub const DEFAULT_AUDIENCE: &str = "refcat-api";

/// Complete authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,
}

impl AuthConfig {
    /// Create from environment variables
    ///
    /// `JWT_SECRET` is required; the service must not start without it.
    /// `JWT_TTL_SECONDS`, `JWT_ISSUER` and `JWT_AUDIENCE` are optional.
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret = std::env::var("JWT_SECRET")
            .map_err(|_| ConfigError::new("JWT_SECRET environment variable is not set"))?;

        let ttl_seconds = std::env::var("JWT_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TTL_SECONDS);

        let issuer =
            std::env::var("JWT_ISSUER").unwrap_or_else(|_| DEFAULT_ISSUER.to_string());
        let audience =
            std::env::var("JWT_AUDIENCE").unwrap_or_else(|_| DEFAULT_AUDIENCE.to_string());

        Ok(Self {
            jwt: JwtConfig::new(secret)?
                .with_ttl_seconds(ttl_seconds)
                .with_issuer(issuer)
                .with_audience(audience),
        })
    }
}
