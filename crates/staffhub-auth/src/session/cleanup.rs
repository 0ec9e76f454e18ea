//! Expired session cleanup.
//!
//! Best-effort housekeeping: an expired session already fails its next
//! validation even if not yet swept, so this task is not
//! correctness-critical.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use staffhub_core::error::AppError;

use super::store::SessionStore;

/// Handles periodic deletion of expired sessions.
#[derive(Debug, Clone)]
pub struct SessionCleanup {
    /// Session store for the sweep.
    session_store: Arc<dyn SessionStore>,
}

impl SessionCleanup {
    /// Creates a new session cleanup handler.
    pub fn new(session_store: Arc<dyn SessionStore>) -> Self {
        Self { session_store }
    }

    /// Runs one cleanup cycle. Idempotent and safe to run concurrently
    /// with every other session operation.
    ///
    /// Returns the number of sessions removed.
    pub async fn run_cleanup(&self) -> Result<u64, AppError> {
        let removed = self.session_store.delete_expired(Utc::now()).await?;
        if removed > 0 {
            info!(removed, "Expired sessions swept");
        }
        Ok(removed)
    }
}
