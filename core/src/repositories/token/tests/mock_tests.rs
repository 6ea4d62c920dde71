//! Unit tests for the mock token repository

use chrono::{Duration, Utc};

use crate::domain::entities::token::AccessToken;
use crate::repositories::token::{MockTokenRepository, TokenRepository};

fn live_token(user_id: i64, token: &str) -> AccessToken {
    AccessToken::new(
        user_id,
        token.to_string(),
        Utc::now() + Duration::hours(1),
        None,
    )
}

fn expired_token(user_id: i64, token: &str) -> AccessToken {
    let mut record = live_token(user_id, token);
    record.expires_at = Utc::now() - Duration::seconds(1);
    record
}

#[tokio::test]
async fn test_save_and_find() {
    let repo = MockTokenRepository::new();
    let record = live_token(1, "token-a");

    repo.save(record.clone()).await.unwrap();

    let found = repo.find("token-a").await.unwrap().unwrap();
    assert_eq!(found, record);

    assert!(repo.find("token-b").await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_save_rejected() {
    let repo = MockTokenRepository::new();
    repo.save(live_token(1, "token-a")).await.unwrap();

    let result = repo.save(live_token(2, "token-a")).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_exists_live() {
    let repo = MockTokenRepository::new();
    repo.save(live_token(1, "live")).await.unwrap();
    repo.save(expired_token(1, "expired")).await.unwrap();

    assert!(repo.exists_live("live").await.unwrap());
    // Expired rows are stored but no longer live
    assert!(!repo.exists_live("expired").await.unwrap());
    // Unknown tokens are false, not an error
    assert!(!repo.exists_live("missing").await.unwrap());
}

#[tokio::test]
async fn test_touch_updates_last_used() {
    let repo = MockTokenRepository::new();
    repo.save(live_token(1, "token-a")).await.unwrap();

    repo.touch("token-a").await.unwrap();

    let found = repo.find("token-a").await.unwrap().unwrap();
    assert!(found.last_used_at.is_some());
}

#[tokio::test]
async fn test_touch_missing_token_is_not_an_error() {
    let repo = MockTokenRepository::new();
    assert!(repo.touch("missing").await.is_ok());
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let repo = MockTokenRepository::new();
    repo.save(live_token(1, "token-a")).await.unwrap();

    repo.delete("token-a").await.unwrap();
    assert!(repo.find("token-a").await.unwrap().is_none());

    // Deleting an already-deleted token is still success
    assert!(repo.delete("token-a").await.is_ok());
    assert!(repo.delete("never-existed").await.is_ok());
}

#[tokio::test]
async fn test_delete_expired_removes_only_expired() {
    let repo = MockTokenRepository::new();
    repo.save(live_token(1, "live-1")).await.unwrap();
    repo.save(live_token(2, "live-2")).await.unwrap();
    repo.save(expired_token(1, "expired-1")).await.unwrap();
    repo.save(expired_token(3, "expired-2")).await.unwrap();

    let deleted = repo.delete_expired().await.unwrap();
    assert_eq!(deleted, 2);

    assert!(repo.find("live-1").await.unwrap().is_some());
    assert!(repo.find("live-2").await.unwrap().is_some());
    assert!(repo.find("expired-1").await.unwrap().is_none());
    assert!(repo.find("expired-2").await.unwrap().is_none());

    // A second sweep finds nothing left to delete
    assert_eq!(repo.delete_expired().await.unwrap(), 0);
}

#[tokio::test]
async fn test_find_by_user_id() {
    let repo = MockTokenRepository::new();
    repo.save(live_token(1, "token-a")).await.unwrap();
    repo.save(live_token(1, "token-b")).await.unwrap();
    repo.save(live_token(2, "token-c")).await.unwrap();

    let records = repo.find_by_user_id(1).await.unwrap();
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.user_id == 1));

    assert!(repo.find_by_user_id(99).await.unwrap().is_empty());
}
