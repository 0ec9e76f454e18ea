//! Request context carrying the authenticated identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use staffhub_entity::user::UserRole;

/// Context for the current authenticated request.
///
/// Built by the request gate from a validated access token and passed
/// into handlers so every operation knows *who* is acting. The context
/// is request-scoped and discarded on completion; this is the only
/// channel by which CRUD code depends on the auth core (audit fields
/// and role gating).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: Uuid,
    /// The session ID the access token was issued under.
    pub session_id: Uuid,
    /// The role set snapshot from the token.
    pub roles: Vec<UserRole>,
    /// The username (convenience field from the claims).
    pub username: String,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: Uuid, session_id: Uuid, roles: Vec<UserRole>, username: String) -> Self {
        Self {
            user_id,
            session_id,
            roles,
            username,
            request_time: Utc::now(),
        }
    }

    /// Returns the current identity's ID (for audit columns).
    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    /// Returns the current identity's role set.
    pub fn roles(&self) -> &[UserRole] {
        &self.roles
    }
}
