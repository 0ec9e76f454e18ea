//! Session entity model.
//!
//! One row exists per *active* refresh token. The row is the source of
//! truth for revocation: a refresh token is usable only while its session
//! record exists and is unexpired.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A server-held session record binding a refresh token to its owner.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Session {
    /// Unique session identifier.
    pub id: Uuid,
    /// The owning user's ID.
    pub user_id: Uuid,
    /// SHA-256 hex of the refresh token value. The raw token is never
    /// persisted.
    #[serde(skip_serializing)]
    pub refresh_token_hash: String,
    /// IP address the session was created from.
    pub ip_address: Option<String>,
    /// User-Agent header at session creation.
    pub user_agent: Option<String>,
    /// When the session was created.
    pub created_at: DateTime<Utc>,
    /// When the session (and its refresh token) expires.
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Check whether the session has passed its expiry.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}
