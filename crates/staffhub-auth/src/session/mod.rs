//! Server-side session records and the authentication lifecycle.

pub mod cleanup;
pub mod manager;
pub mod store;

pub use cleanup::SessionCleanup;
pub use manager::{ClientInfo, LoginResult, SessionManager};
pub use store::{DbSessionStore, SessionStore, hash_refresh_token};
