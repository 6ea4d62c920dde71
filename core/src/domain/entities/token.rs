//! Token entities for JWT-based authentication.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Token classification tag; only access tokens are issued
pub const TOKEN_TYPE_ACCESS: &str = "access";

/// Claims structure for the JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Not before timestamp
    pub nbf: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,
}

impl Claims {
    /// Creates claims for an access token
    ///
    /// `issued_at` becomes both the `iat` and `nbf` claims; `expires_at`
    /// becomes `exp`.
    pub fn new(
        user_id: i64,
        issued_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
        issuer: &str,
        audience: &str,
    ) -> Self {
        Self {
            sub: user_id.to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
            nbf: issued_at.timestamp(),
            iss: issuer.to_string(),
            aud: audience.to_string(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp();
        now >= self.exp
    }

    /// Checks if the claims are within their validity window
    pub fn is_valid(&self) -> bool {
        let now = Utc::now().timestamp();
        now >= self.nbf && now < self.exp
    }

    /// Gets the user ID from the subject claim
    ///
    /// Returns `None` if the subject is absent or not numeric.
    pub fn user_id(&self) -> Option<i64> {
        self.sub.parse().ok()
    }
}

/// Access token record stored in the database
///
/// One row per issued token. A record exists iff the token was issued and
/// not yet deleted by logout, the expiry sweep, or a user-deletion cascade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    /// Unique identifier for the token record
    pub id: Uuid,

    /// User ID this token belongs to
    pub user_id: i64,

    /// The signed token string, unique in practice
    pub token: String,

    /// Classification tag ("access")
    pub token_type: String,

    /// Optional user agent captured at issuance
    pub user_agent: Option<String>,

    /// Timestamp when the token expires; immutable after creation
    pub expires_at: DateTime<Utc>,

    /// Timestamp when the token was issued
    pub created_at: DateTime<Utc>,

    /// Timestamp of the last successful validation, if any
    pub last_used_at: Option<DateTime<Utc>>,
}

impl AccessToken {
    /// Creates a new access token record
    pub fn new(
        user_id: i64,
        token: String,
        expires_at: DateTime<Utc>,
        user_agent: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            token,
            token_type: TOKEN_TYPE_ACCESS.to_string(),
            user_agent,
            expires_at,
            created_at: Utc::now(),
            last_used_at: None,
        }
    }

    /// Checks if the record is still live
    ///
    /// Liveness is `now < expires_at`; use does not extend expiry.
    pub fn is_live(&self) -> bool {
        Utc::now() < self.expires_at
    }

    /// Records a successful validation
    pub fn touch(&mut self) {
        self.last_used_at = Some(Utc::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn claims_with_ttl(user_id: i64, ttl_seconds: i64) -> Claims {
        let now = Utc::now();
        Claims::new(
            user_id,
            now,
            now + Duration::seconds(ttl_seconds),
            "refcat",
            "refcat-api",
        )
    }

    #[test]
    fn test_access_claims() {
        let claims = claims_with_ttl(42, 3600);

        assert_eq!(claims.sub, "42");
        assert_eq!(claims.iss, "refcat");
        assert_eq!(claims.aud, "refcat-api");
        assert_eq!(claims.iat, claims.nbf);
        assert!(claims.is_valid());
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_claims_user_id_parsing() {
        let claims = claims_with_ttl(7, 3600);
        assert_eq!(claims.user_id(), Some(7));

        let mut bad = claims_with_ttl(7, 3600);
        bad.sub = "not-a-number".to_string();
        assert_eq!(bad.user_id(), None);

        bad.sub = String::new();
        assert_eq!(bad.user_id(), None);
    }

    #[test]
    fn test_claims_expiration() {
        let claims = claims_with_ttl(1, -1);

        assert!(claims.is_expired());
        assert!(!claims.is_valid());
    }

    #[test]
    fn test_claims_not_before() {
        let mut claims = claims_with_ttl(1, 3600);
        claims.nbf = Utc::now().timestamp() + 3600;

        assert!(!claims.is_valid());
    }

    #[test]
    fn test_access_token_creation() {
        let expires_at = Utc::now() + Duration::hours(1);
        let token = AccessToken::new(
            42,
            "signed.jwt.value".to_string(),
            expires_at,
            Some("curl/8.0".to_string()),
        );

        assert_eq!(token.user_id, 42);
        assert_eq!(token.token_type, TOKEN_TYPE_ACCESS);
        assert_eq!(token.expires_at, expires_at);
        assert_eq!(token.last_used_at, None);
        assert!(token.is_live());
    }

    #[test]
    fn test_access_token_liveness_boundary() {
        let mut token = AccessToken::new(
            42,
            "signed.jwt.value".to_string(),
            Utc::now() + Duration::hours(1),
            None,
        );

        token.expires_at = Utc::now() - Duration::seconds(1);
        assert!(!token.is_live());
    }

    #[test]
    fn test_access_token_touch() {
        let mut token = AccessToken::new(
            42,
            "signed.jwt.value".to_string(),
            Utc::now() + Duration::hours(1),
            None,
        );

        assert!(token.last_used_at.is_none());
        token.touch();
        assert!(token.last_used_at.is_some());
    }

    #[test]
    fn test_access_token_serialization() {
        let token = AccessToken::new(
            42,
            "signed.jwt.value".to_string(),
            Utc::now() + Duration::hours(1),
            Some("test-agent".to_string()),
        );

        let json = serde_json::to_string(&token).unwrap();
        let deserialized: AccessToken = serde_json::from_str(&json).unwrap();

        assert_eq!(token, deserialized);
    }
}
