//! Session repository implementation.
//!
//! The session table is the source of truth for refresh-token revocation.
//! `rotate` is the concurrency-critical operation: it must guarantee that
//! at most one of any number of concurrent rotations of the same refresh
//! token succeeds.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use staffhub_core::error::{AppError, ErrorKind};
use staffhub_core::result::AppResult;
use staffhub_entity::session::Session;

/// Outcome of a rotation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotateOutcome {
    /// The old session was replaced by the new one.
    Rotated,
    /// The old session no longer existed — it was already rotated,
    /// logged out, or swept. The new session was NOT inserted.
    Conflict,
}

/// Repository for session persistence and rotation.
#[derive(Debug, Clone)]
pub struct SessionRepository {
    pool: PgPool,
}

impl SessionRepository {
    /// Create a new session repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new session record.
    pub async fn create(&self, session: &Session) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO sessions (id, user_id, refresh_token_hash, ip_address, user_agent, created_at, expires_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(session.id)
        .bind(session.user_id)
        .bind(&session.refresh_token_hash)
        .bind(&session.ip_address)
        .bind(&session.user_agent)
        .bind(session.created_at)
        .bind(session.expires_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create session", e))?;
        Ok(())
    }

    /// Find a session by its refresh token hash.
    pub async fn find_by_refresh_hash(&self, hash: &str) -> AppResult<Option<Session>> {
        sqlx::query_as::<_, Session>("SELECT * FROM sessions WHERE refresh_token_hash = $1")
            .bind(hash)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find session by token", e)
            })
    }

    /// Atomically replace the session keyed by `old_hash` with `new_session`.
    ///
    /// Both statements run inside one transaction. The conditional delete is
    /// the compare step: if zero rows are deleted the old session was already
    /// removed by a concurrent rotation, a logout, or the expiry sweep, and
    /// the whole rotation fails closed with [`RotateOutcome::Conflict`].
    /// Postgres row locking serializes concurrent deletes of the same row,
    /// so at most one caller ever observes a deleted row.
    pub async fn rotate(&self, old_hash: &str, new_session: &Session) -> AppResult<RotateOutcome> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin rotation", e)
        })?;

        let deleted = sqlx::query("DELETE FROM sessions WHERE refresh_token_hash = $1")
            .bind(old_hash)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete old session", e)
            })?;

        if deleted.rows_affected() == 0 {
            tx.rollback().await.map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to roll back rotation", e)
            })?;
            return Ok(RotateOutcome::Conflict);
        }

        sqlx::query(
            "INSERT INTO sessions (id, user_id, refresh_token_hash, ip_address, user_agent, created_at, expires_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(new_session.id)
        .bind(new_session.user_id)
        .bind(&new_session.refresh_token_hash)
        .bind(&new_session.ip_address)
        .bind(&new_session.user_agent)
        .bind(new_session.created_at)
        .bind(new_session.expires_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to insert rotated session", e)
        })?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit rotation", e)
        })?;

        Ok(RotateOutcome::Rotated)
    }

    /// Delete a session by its refresh token hash. Returns whether a row
    /// existed. Deleting an absent session is not an error.
    pub async fn delete_by_refresh_hash(&self, hash: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM sessions WHERE refresh_token_hash = $1")
            .bind(hash)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete session", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete all sessions whose expiry has passed. Idempotent and safe to
    /// run concurrently with every other operation.
    pub async fn delete_expired(&self, now: DateTime<Utc>) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM sessions WHERE expires_at <= $1")
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete expired sessions", e)
            })?;
        Ok(result.rows_affected())
    }
}
