//! Mock implementation of TokenRepository for testing

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::token::AccessToken;
use crate::errors::DomainError;

use super::r#trait::TokenRepository;

/// In-memory token repository for testing, keyed by token string
pub struct MockTokenRepository {
    tokens: Arc<RwLock<HashMap<String, AccessToken>>>,
}

impl MockTokenRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            tokens: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of records currently stored
    pub async fn len(&self) -> usize {
        self.tokens.read().await.len()
    }

    /// Whether the store is empty
    pub async fn is_empty(&self) -> bool {
        self.tokens.read().await.is_empty()
    }
}

impl Default for MockTokenRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenRepository for MockTokenRepository {
    async fn save(&self, token: AccessToken) -> Result<AccessToken, DomainError> {
        let mut tokens = self.tokens.write().await;

        if tokens.contains_key(&token.token) {
            return Err(DomainError::storage("token already exists"));
        }

        tokens.insert(token.token.clone(), token.clone());
        Ok(token)
    }

    async fn find(&self, token: &str) -> Result<Option<AccessToken>, DomainError> {
        let tokens = self.tokens.read().await;
        Ok(tokens.get(token).cloned())
    }

    async fn touch(&self, token: &str) -> Result<(), DomainError> {
        let mut tokens = self.tokens.write().await;
        if let Some(record) = tokens.get_mut(token) {
            record.touch();
        }
        Ok(())
    }

    async fn delete(&self, token: &str) -> Result<(), DomainError> {
        let mut tokens = self.tokens.write().await;
        tokens.remove(token);
        Ok(())
    }

    async fn delete_expired(&self) -> Result<usize, DomainError> {
        let mut tokens = self.tokens.write().await;
        let now = Utc::now();
        let initial_count = tokens.len();

        tokens.retain(|_, record| record.expires_at > now);

        Ok(initial_count - tokens.len())
    }

    async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<AccessToken>, DomainError> {
        let tokens = self.tokens.read().await;
        let mut records: Vec<AccessToken> = tokens
            .values()
            .filter(|record| record.user_id == user_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }
}
