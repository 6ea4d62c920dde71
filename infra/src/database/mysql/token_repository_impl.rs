//! MySQL implementation of the TokenRepository trait.
//!
//! Concrete persistence for access token records using SQLx. Records are
//! looked up by their exact token string; the `expires_at` index keeps the
//! liveness check and the expiry sweep cheap.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use rf_core::domain::entities::token::AccessToken;
use rf_core::errors::DomainError;
use rf_core::repositories::TokenRepository;

/// MySQL implementation of TokenRepository
pub struct MySqlTokenRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlTokenRepository {
    /// Create a new MySQL token repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to an AccessToken entity
    fn row_to_token(row: &sqlx::mysql::MySqlRow) -> Result<AccessToken, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::storage(format!("Failed to get id: {}", e)))?;

        Ok(AccessToken {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::storage(format!("Invalid token UUID: {}", e)))?,
            user_id: row
                .try_get("user_id")
                .map_err(|e| DomainError::storage(format!("Failed to get user_id: {}", e)))?,
            token: row
                .try_get("token")
                .map_err(|e| DomainError::storage(format!("Failed to get token: {}", e)))?,
            token_type: row
                .try_get("token_type")
                .map_err(|e| DomainError::storage(format!("Failed to get token_type: {}", e)))?,
            user_agent: row
                .try_get("user_agent")
                .map_err(|e| DomainError::storage(format!("Failed to get user_agent: {}", e)))?,
            expires_at: row
                .try_get::<DateTime<Utc>, _>("expires_at")
                .map_err(|e| DomainError::storage(format!("Failed to get expires_at: {}", e)))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::storage(format!("Failed to get created_at: {}", e)))?,
            last_used_at: row
                .try_get::<Option<DateTime<Utc>>, _>("last_used_at")
                .map_err(|e| DomainError::storage(format!("Failed to get last_used_at: {}", e)))?,
        })
    }
}

#[async_trait]
impl TokenRepository for MySqlTokenRepository {
    async fn save(&self, token: AccessToken) -> Result<AccessToken, DomainError> {
        let query = r#"
            INSERT INTO access_tokens (
                id, user_id, token, token_type, user_agent, expires_at, created_at, last_used_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(token.id.to_string())
            .bind(token.user_id)
            .bind(&token.token)
            .bind(&token.token_type)
            .bind(&token.user_agent)
            .bind(token.expires_at)
            .bind(token.created_at)
            .bind(token.last_used_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to save access token: {}", e)))?;

        Ok(token)
    }

    async fn find(&self, token: &str) -> Result<Option<AccessToken>, DomainError> {
        let query = r#"
            SELECT id, user_id, token, token_type, user_agent, expires_at, created_at, last_used_at
            FROM access_tokens
            WHERE token = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(token)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to find access token: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_token(&row)?)),
            None => Ok(None),
        }
    }

    async fn exists_live(&self, token: &str) -> Result<bool, DomainError> {
        let query = r#"
            SELECT EXISTS(
                SELECT 1 FROM access_tokens WHERE token = ? AND expires_at > ?
            ) AS live
        "#;

        let row = sqlx::query(query)
            .bind(token)
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to check access token: {}", e)))?;

        let live: i64 = row
            .try_get("live")
            .map_err(|e| DomainError::storage(format!("Failed to get existence result: {}", e)))?;

        Ok(live == 1)
    }

    async fn touch(&self, token: &str) -> Result<(), DomainError> {
        let query = "UPDATE access_tokens SET last_used_at = ? WHERE token = ?";

        sqlx::query(query)
            .bind(Utc::now())
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to touch access token: {}", e)))?;

        Ok(())
    }

    async fn delete(&self, token: &str) -> Result<(), DomainError> {
        // Delete-if-present; zero affected rows is success
        let query = "DELETE FROM access_tokens WHERE token = ?";

        sqlx::query(query)
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete access token: {}", e)))?;

        Ok(())
    }

    async fn delete_expired(&self) -> Result<usize, DomainError> {
        let query = "DELETE FROM access_tokens WHERE expires_at <= ?";

        let result = sqlx::query(query)
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete expired tokens: {}", e)))?;

        Ok(result.rows_affected() as usize)
    }

    async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<AccessToken>, DomainError> {
        let query = r#"
            SELECT id, user_id, token, token_type, user_agent, expires_at, created_at, last_used_at
            FROM access_tokens
            WHERE user_id = ?
            ORDER BY created_at DESC
        "#;

        let rows = sqlx::query(query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to find user tokens: {}", e)))?;

        let mut tokens = Vec::new();
        for row in rows {
            tokens.push(Self::row_to_token(&row)?);
        }

        Ok(tokens)
    }
}
