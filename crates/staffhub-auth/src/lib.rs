//! # staffhub-auth
//!
//! Authentication and session lifecycle for StaffHub.
//!
//! ## Modules
//!
//! - `password` — Argon2id password hashing and verification
//! - `jwt` — signed token issuance and validation (access + refresh)
//! - `session` — server-side session records, atomic refresh rotation,
//!   and expired-session cleanup
//! - `credentials` — the identity store trait consulted at login and
//!   refresh
//! - `rbac` — role-based authorization checks
//! - `context` — the per-request identity context handed to handlers
//! - `error` — the internal rejection taxonomy, collapsed to uniform
//!   HTTP outcomes at the boundary

pub mod context;
pub mod credentials;
pub mod error;
pub mod jwt;
pub mod password;
pub mod rbac;
pub mod session;

pub use context::RequestContext;
pub use credentials::CredentialStore;
pub use error::{AuthError, TokenError};
pub use jwt::{Claims, JwtDecoder, JwtEncoder, TokenKind, TokenPair};
pub use password::PasswordHasher;
pub use rbac::RbacEnforcer;
pub use session::{DbSessionStore, SessionCleanup, SessionManager, SessionStore};
