//! Token repository trait defining the interface for access token persistence.

use async_trait::async_trait;

use crate::domain::entities::token::AccessToken;
use crate::errors::DomainError;

/// Repository trait for access token persistence
///
/// This trait defines the contract for the durable token store. The store is
/// the revocation authority: a token authenticates only while a live record
/// for it exists here, regardless of what its claims say.
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Insert a new token record
    ///
    /// # Returns
    /// * `Ok(AccessToken)` - The saved record
    /// * `Err(DomainError)` - Insert failed (e.g. connectivity)
    async fn save(&self, token: AccessToken) -> Result<AccessToken, DomainError>;

    /// Find a record by its exact token string
    ///
    /// # Returns
    /// * `Ok(Some(AccessToken))` - Record found
    /// * `Ok(None)` - No record with this token string
    /// * `Err(DomainError)` - Database error occurred
    async fn find(&self, token: &str) -> Result<Option<AccessToken>, DomainError>;

    /// Update `last_used_at` to now for the matching record
    ///
    /// Callers treat this as best-effort; a missing record is not an error.
    async fn touch(&self, token: &str) -> Result<(), DomainError>;

    /// Delete the matching record if present
    ///
    /// Deleting zero rows is success; only infrastructure-level failures
    /// surface as errors.
    async fn delete(&self, token: &str) -> Result<(), DomainError>;

    /// Delete all records with `expires_at <= now`
    ///
    /// Idempotent and safe to run concurrently with issuance or other
    /// sweeps; nothing it touches can become live again.
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of expired records deleted
    async fn delete_expired(&self) -> Result<usize, DomainError>;

    /// Find all records belonging to a user, newest first
    async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<AccessToken>, DomainError>;

    /// Check that a record exists for this exact token string and is live
    ///
    /// # Returns
    /// * `Ok(true)` - Record exists and `expires_at > now`
    /// * `Ok(false)` - No record, or the record has expired
    /// * `Err(DomainError)` - Database error occurred
    async fn exists_live(&self, token: &str) -> Result<bool, DomainError> {
        match self.find(token).await? {
            Some(record) => Ok(record.is_live()),
            None => Ok(false),
        }
    }
}
