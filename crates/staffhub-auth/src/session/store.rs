//! Session store trait and the Postgres-backed implementation.
//!
//! Refresh tokens are keyed by their SHA-256 digest; the raw token value
//! never reaches the store.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use staffhub_core::error::AppError;
use staffhub_database::repositories::session::{RotateOutcome, SessionRepository};
use staffhub_entity::session::Session;

/// Computes the SHA-256 hex digest of a refresh token for storage and
/// lookup.
pub fn hash_refresh_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Persistence operations backing the session lifecycle.
///
/// Implementations must be thread-safe; `rotate` must be atomic with
/// respect to concurrent rotations of the same token.
#[async_trait]
pub trait SessionStore: Send + Sync + std::fmt::Debug {
    /// Creates a new session record for a freshly issued refresh token.
    async fn create(
        &self,
        session_id: Uuid,
        user_id: Uuid,
        refresh_token: &str,
        expires_at: DateTime<Utc>,
        ip_address: Option<String>,
        user_agent: Option<String>,
    ) -> Result<Session, AppError>;

    /// Looks up the session for a presented refresh token.
    async fn lookup(&self, refresh_token: &str) -> Result<Option<Session>, AppError>;

    /// Atomically replaces the session keyed by the old refresh token with
    /// a new one. Fails closed with [`RotateOutcome::Conflict`] if the old
    /// session was already removed.
    async fn rotate(
        &self,
        old_refresh_token: &str,
        new_session: &Session,
    ) -> Result<RotateOutcome, AppError>;

    /// Deletes the session for a refresh token. Idempotent: deleting an
    /// absent session reports `false` but is not an error.
    async fn delete(&self, refresh_token: &str) -> Result<bool, AppError>;

    /// Deletes all sessions whose expiry has passed.
    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, AppError>;
}

/// Postgres-backed session store wrapping the database repository.
#[derive(Debug, Clone)]
pub struct DbSessionStore {
    /// Session database repository.
    repo: Arc<SessionRepository>,
}

impl DbSessionStore {
    /// Creates a new session store.
    pub fn new(repo: Arc<SessionRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl SessionStore for DbSessionStore {
    async fn create(
        &self,
        session_id: Uuid,
        user_id: Uuid,
        refresh_token: &str,
        expires_at: DateTime<Utc>,
        ip_address: Option<String>,
        user_agent: Option<String>,
    ) -> Result<Session, AppError> {
        let session = Session {
            id: session_id,
            user_id,
            refresh_token_hash: hash_refresh_token(refresh_token),
            ip_address,
            user_agent,
            created_at: Utc::now(),
            expires_at,
        };

        self.repo.create(&session).await?;
        Ok(session)
    }

    async fn lookup(&self, refresh_token: &str) -> Result<Option<Session>, AppError> {
        self.repo
            .find_by_refresh_hash(&hash_refresh_token(refresh_token))
            .await
    }

    async fn rotate(
        &self,
        old_refresh_token: &str,
        new_session: &Session,
    ) -> Result<RotateOutcome, AppError> {
        self.repo
            .rotate(&hash_refresh_token(old_refresh_token), new_session)
            .await
    }

    async fn delete(&self, refresh_token: &str) -> Result<bool, AppError> {
        self.repo
            .delete_by_refresh_hash(&hash_refresh_token(refresh_token))
            .await
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, AppError> {
        self.repo.delete_expired(now).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refresh_token_hash_is_stable_hex() {
        let a = hash_refresh_token("some-token");
        let b = hash_refresh_token("some-token");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn distinct_tokens_hash_differently() {
        assert_ne!(hash_refresh_token("token-a"), hash_refresh_token("token-b"));
    }
}
