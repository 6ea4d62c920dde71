//! MySQL-backed credential verifier
//!
//! Checks an email/password pair against the `users` table with bcrypt and
//! tracks failed attempts per email in a sliding window. The window lives
//! in process memory; each instance rate-limits independently.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use rf_core::errors::DomainError;
use rf_core::services::auth::{CredentialOutcome, CredentialVerifier};

/// Maximum failed attempts per email before throttling
const DEFAULT_MAX_ATTEMPTS: usize = 5;

/// Length of the failed-attempt window
const DEFAULT_WINDOW: Duration = Duration::from_secs(15 * 60);

/// Credential verifier backed by the users table
pub struct MySqlCredentialVerifier {
    pool: MySqlPool,
    max_attempts: usize,
    window: Duration,
    failed_attempts: Mutex<HashMap<String, Vec<Instant>>>,
}

impl MySqlCredentialVerifier {
    /// Create a new credential verifier with default throttling
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            pool,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            window: DEFAULT_WINDOW,
            failed_attempts: Mutex::new(HashMap::new()),
        }
    }

    /// Override the throttling parameters
    pub fn with_throttle(mut self, max_attempts: usize, window: Duration) -> Self {
        self.max_attempts = max_attempts;
        self.window = window;
        self
    }

    /// Whether this email has exhausted its allowed failed attempts
    fn is_throttled(&self, email: &str) -> bool {
        let mut attempts = self.failed_attempts.lock().unwrap_or_else(|e| e.into_inner());
        let now = Instant::now();

        match attempts.get_mut(email) {
            Some(timestamps) => {
                timestamps.retain(|t| now.duration_since(*t) < self.window);
                timestamps.len() >= self.max_attempts
            }
            None => false,
        }
    }

    fn record_failure(&self, email: &str) {
        let mut attempts = self.failed_attempts.lock().unwrap_or_else(|e| e.into_inner());
        attempts
            .entry(email.to_string())
            .or_default()
            .push(Instant::now());
    }

    fn clear_failures(&self, email: &str) {
        let mut attempts = self.failed_attempts.lock().unwrap_or_else(|e| e.into_inner());
        attempts.remove(email);
    }
}

#[async_trait]
impl CredentialVerifier for MySqlCredentialVerifier {
    async fn verify(
        &self,
        email: &str,
        password: &str,
    ) -> Result<CredentialOutcome, DomainError> {
        if self.is_throttled(email) {
            return Ok(CredentialOutcome::RateLimited);
        }

        let query = r#"
            SELECT id, password_hash, email_verified_at
            FROM users
            WHERE email = ?
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to look up user: {}", e)))?;

        let Some(row) = row else {
            self.record_failure(email);
            return Ok(CredentialOutcome::UnknownEmail);
        };

        let user_id: i64 = row
            .try_get("id")
            .map_err(|e| DomainError::storage(format!("Failed to get user id: {}", e)))?;
        let password_hash: String = row
            .try_get("password_hash")
            .map_err(|e| DomainError::storage(format!("Failed to get password hash: {}", e)))?;
        let email_verified_at: Option<chrono::DateTime<chrono::Utc>> = row
            .try_get("email_verified_at")
            .map_err(|e| DomainError::storage(format!("Failed to get verification time: {}", e)))?;

        let matches = bcrypt::verify(password, &password_hash).map_err(|e| {
            DomainError::Internal {
                message: format!("Password verification failed: {}", e),
            }
        })?;

        if !matches {
            self.record_failure(email);
            return Ok(CredentialOutcome::WrongPassword);
        }

        if email_verified_at.is_none() {
            return Ok(CredentialOutcome::EmailNotVerified);
        }

        self.clear_failures(email);
        Ok(CredentialOutcome::Verified(user_id))
    }
}
