//! Configuration for the token service

use jsonwebtoken::Algorithm;
use rf_shared::config::auth::JwtConfig;

/// Configuration for the token service
///
/// Built once at process start and injected; services never read ambient
/// environment state.
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub secret: String,
    /// JWT signing algorithm; fixed to HS256
    pub algorithm: Algorithm,
    /// Access token lifetime in seconds
    pub ttl_seconds: i64,
    /// Issuer claim
    pub issuer: String,
    /// Audience claim
    pub audience: String,
}

impl TokenServiceConfig {
    /// Build from the shared JWT configuration
    pub fn from_jwt_config(config: &JwtConfig) -> Self {
        Self {
            secret: config.secret.clone(),
            algorithm: Algorithm::HS256,
            ttl_seconds: config.ttl_seconds,
            issuer: config.issuer.clone(),
            audience: config.audience.clone(),
        }
    }
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            secret: "development-secret-please-change-in-production".to_string(),
            algorithm: Algorithm::HS256,
            ttl_seconds: 3600,
            issuer: "refcat".to_string(),
            audience: "refcat-api".to_string(),
        }
    }
}
