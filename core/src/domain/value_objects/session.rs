//! Session value objects returned to the client

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A freshly issued token together with its fixed expiry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuedToken {
    /// The signed token string
    pub token: String,

    /// Absolute expiry timestamp, fixed at issuance
    pub expires_at: DateTime<Utc>,
}

impl IssuedToken {
    pub fn new(token: String, expires_at: DateTime<Utc>) -> Self {
        Self { token, expires_at }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issued_token_serialization() {
        let issued = IssuedToken::new("signed.jwt.value".to_string(), Utc::now());

        let json = serde_json::to_string(&issued).unwrap();
        let deserialized: IssuedToken = serde_json::from_str(&json).unwrap();

        assert_eq!(issued, deserialized);
    }
}
