//! Authentication lifecycle orchestrator — login, refresh, logout.
//!
//! Per credential the lifecycle runs Anonymous → Authenticated (live
//! access/refresh pair) → rotated on each successful refresh → revoked
//! at logout or expiry. Refresh tokens are only usable while their
//! session row exists; rotation replaces that row atomically so a
//! pre-rotation token can never be replayed.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use staffhub_core::config::AuthConfig;
use staffhub_core::error::AppError;
use staffhub_database::repositories::session::RotateOutcome;
use staffhub_entity::session::Session;
use staffhub_entity::user::{CreateUser, User, UserRole};

use crate::credentials::CredentialStore;
use crate::error::AuthError;
use crate::jwt::encoder::TokenPair;
use crate::jwt::{JwtDecoder, JwtEncoder};
use crate::password::PasswordHasher;

use super::store::{SessionStore, hash_refresh_token};

/// Result of a successful login.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LoginResult {
    /// Generated token pair.
    pub tokens: TokenPair,
    /// The authenticated user.
    pub user: User,
}

/// Client metadata recorded alongside a session.
#[derive(Debug, Clone, Default)]
pub struct ClientInfo {
    /// Originating IP address.
    pub ip_address: Option<String>,
    /// User-Agent header value.
    pub user_agent: Option<String>,
}

/// Drives the complete authentication lifecycle.
#[derive(Clone)]
pub struct SessionManager {
    /// JWT encoder for token generation.
    jwt_encoder: Arc<JwtEncoder>,
    /// JWT decoder for token validation.
    jwt_decoder: Arc<JwtDecoder>,
    /// Session persistence.
    session_store: Arc<dyn SessionStore>,
    /// Credential store (consulted, never owned).
    user_repo: Arc<dyn CredentialStore>,
    /// Password hasher.
    password_hasher: Arc<PasswordHasher>,
    /// Auth configuration.
    auth_config: AuthConfig,
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager").finish()
    }
}

impl SessionManager {
    /// Creates a new session manager with all required dependencies.
    pub fn new(
        jwt_encoder: Arc<JwtEncoder>,
        jwt_decoder: Arc<JwtDecoder>,
        session_store: Arc<dyn SessionStore>,
        user_repo: Arc<dyn CredentialStore>,
        password_hasher: Arc<PasswordHasher>,
        auth_config: AuthConfig,
    ) -> Self {
        Self {
            jwt_encoder,
            jwt_decoder,
            session_store,
            user_repo,
            password_hasher,
            auth_config,
        }
    }

    /// Performs the login flow: credential verification, token pair
    /// issuance, session persistence.
    ///
    /// Unknown usernames and wrong passwords are deliberately the same
    /// [`AuthError::InvalidCredentials`] outcome so callers cannot
    /// enumerate accounts.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
        client: ClientInfo,
    ) -> Result<LoginResult, AuthError> {
        let user = self
            .user_repo
            .find_by_username(username)
            .await
            .map_err(AuthError::Store)?
            .ok_or(AuthError::InvalidCredentials)?;

        let password_valid = self
            .password_hasher
            .verify_password(password, &user.password_hash)
            .map_err(AuthError::Store)?;

        if !password_valid {
            return Err(AuthError::InvalidCredentials);
        }

        let result = self.issue_session(&user, client).await?;

        // Best-effort; a failed timestamp update must not fail the login.
        let _ = self.user_repo.update_last_login(user.id, Utc::now()).await;

        info!(user_id = %user.id, "Login successful");
        Ok(result)
    }

    /// Registers a new identity with the default role and issues its
    /// first token pair.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        email: Option<String>,
        client: ClientInfo,
    ) -> Result<LoginResult, AppError> {
        if password.len() < self.auth_config.password_min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters",
                self.auth_config.password_min_length
            )));
        }

        let password_hash = self.password_hasher.hash_password(password)?;
        let user = self
            .user_repo
            .create(&CreateUser {
                username: username.to_string(),
                email,
                password_hash,
                roles: vec![UserRole::User],
            })
            .await?;

        info!(user_id = %user.id, "User registered");

        self.issue_session(&user, client)
            .await
            .map_err(AppError::from)
    }

    /// Exchanges a refresh token for a new pair, rotating the session.
    ///
    /// Validation happens in two stages: codec verification (signature,
    /// expiry, kind) and then the session-store lookup — a token that
    /// verifies but has no live session row was logged out or already
    /// rotated, and is denied. Rotation itself is an atomic swap; losing
    /// the race against a concurrent refresh yields
    /// [`AuthError::RotationConflict`].
    pub async fn refresh(
        &self,
        refresh_token: &str,
        client: ClientInfo,
    ) -> Result<TokenPair, AuthError> {
        let claims = self.jwt_decoder.decode_refresh_token(refresh_token)?;

        let session = self
            .session_store
            .lookup(refresh_token)
            .await
            .map_err(AuthError::Store)?
            .ok_or(AuthError::SessionNotFound)?;

        let now = Utc::now();
        if session.is_expired(now) {
            // Leave removal to the sweep; an expired row never validates.
            return Err(AuthError::SessionNotFound);
        }

        // Reload the user so the new pair snapshots current roles.
        let user = self
            .user_repo
            .find_by_id(claims.user_id())
            .await
            .map_err(AuthError::Store)?
            .ok_or(AuthError::SessionNotFound)?;

        let new_session_id = Uuid::new_v4();
        let tokens = self
            .jwt_encoder
            .generate_token_pair(&user, new_session_id)
            .map_err(AuthError::Store)?;

        let new_session = Session {
            id: new_session_id,
            user_id: user.id,
            refresh_token_hash: hash_refresh_token(&tokens.refresh_token),
            ip_address: client.ip_address,
            user_agent: client.user_agent,
            created_at: now,
            expires_at: tokens.refresh_expires_at,
        };

        match self
            .session_store
            .rotate(refresh_token, &new_session)
            .await
            .map_err(AuthError::Store)?
        {
            RotateOutcome::Rotated => {
                info!(user_id = %user.id, session_id = %new_session_id, "Token refreshed");
                Ok(tokens)
            }
            RotateOutcome::Conflict => {
                warn!(user_id = %user.id, "Concurrent rotation detected");
                Err(AuthError::RotationConflict)
            }
        }
    }

    /// Revokes the session for a refresh token. Idempotent: deleting an
    /// absent session is not an error, and the token is not required to
    /// verify — a malformed token simply deletes nothing.
    ///
    /// Access tokens already issued stay cryptographically valid until
    /// their own short expiry; there is no mid-flight access revocation.
    pub async fn logout(&self, refresh_token: &str) -> Result<(), AppError> {
        let existed = self.session_store.delete(refresh_token).await?;
        if existed {
            info!("Session revoked on logout");
        }
        Ok(())
    }

    /// Issues a token pair and persists the backing session row.
    async fn issue_session(
        &self,
        user: &User,
        client: ClientInfo,
    ) -> Result<LoginResult, AuthError> {
        let session_id = Uuid::new_v4();
        let tokens = self
            .jwt_encoder
            .generate_token_pair(user, session_id)
            .map_err(AuthError::Store)?;

        self.session_store
            .create(
                session_id,
                user.id,
                &tokens.refresh_token,
                tokens.refresh_expires_at,
                client.ip_address,
                client.user_agent,
            )
            .await
            .map_err(AuthError::Store)?;

        Ok(LoginResult {
            tokens,
            user: user.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, Ordering};

    use async_trait::async_trait;
    use chrono::{DateTime, Duration, Utc};
    use tokio::sync::Mutex;

    use super::*;

    /// Session store over a mutex-guarded map, keyed by refresh token
    /// hash like the database schema.
    #[derive(Debug, Default)]
    struct MemorySessionStore {
        sessions: Mutex<HashMap<String, Session>>,
        force_conflict: AtomicBool,
    }

    impl MemorySessionStore {
        async fn session_count(&self) -> usize {
            self.sessions.lock().await.len()
        }

        /// Backdates every stored session past its expiry.
        async fn expire_all(&self) {
            let mut sessions = self.sessions.lock().await;
            for session in sessions.values_mut() {
                session.expires_at = Utc::now() - Duration::hours(1);
            }
        }
    }

    #[async_trait]
    impl SessionStore for MemorySessionStore {
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
            self.sessions
                .lock()
                .await
                .insert(session.refresh_token_hash.clone(), session.clone());
            Ok(session)
        }

        async fn lookup(&self, refresh_token: &str) -> Result<Option<Session>, AppError> {
            let sessions = self.sessions.lock().await;
            Ok(sessions.get(&hash_refresh_token(refresh_token)).cloned())
        }

        async fn rotate(
            &self,
            old_refresh_token: &str,
            new_session: &Session,
        ) -> Result<RotateOutcome, AppError> {
            if self.force_conflict.load(Ordering::SeqCst) {
                return Ok(RotateOutcome::Conflict);
            }
            let mut sessions = self.sessions.lock().await;
            if sessions.remove(&hash_refresh_token(old_refresh_token)).is_none() {
                return Ok(RotateOutcome::Conflict);
            }
            sessions.insert(new_session.refresh_token_hash.clone(), new_session.clone());
            Ok(RotateOutcome::Rotated)
        }

        async fn delete(&self, refresh_token: &str) -> Result<bool, AppError> {
            let mut sessions = self.sessions.lock().await;
            Ok(sessions.remove(&hash_refresh_token(refresh_token)).is_some())
        }

        async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, AppError> {
            let mut sessions = self.sessions.lock().await;
            let before = sessions.len();
            sessions.retain(|_, s| !s.is_expired(now));
            Ok((before - sessions.len()) as u64)
        }
    }

    #[derive(Debug, Default)]
    struct MemoryCredentials {
        users: Mutex<Vec<User>>,
    }

    #[async_trait]
    impl CredentialStore for MemoryCredentials {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
            let users = self.users.lock().await;
            Ok(users.iter().find(|u| u.id == id).cloned())
        }

        async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
            let users = self.users.lock().await;
            Ok(users.iter().find(|u| u.username == username).cloned())
        }

        async fn create(&self, user: &CreateUser) -> Result<User, AppError> {
            let mut users = self.users.lock().await;
            if users.iter().any(|u| u.username == user.username) {
                return Err(AppError::conflict("Username is already taken"));
            }
            let now = Utc::now();
            let created = User {
                id: Uuid::new_v4(),
                username: user.username.clone(),
                email: user.email.clone(),
                password_hash: user.password_hash.clone(),
                roles: user.roles.clone(),
                created_at: now,
                updated_at: now,
                last_login_at: None,
            };
            users.push(created.clone());
            Ok(created)
        }

        async fn update_last_login(&self, id: Uuid, at: DateTime<Utc>) -> Result<(), AppError> {
            let mut users = self.users.lock().await;
            if let Some(user) = users.iter_mut().find(|u| u.id == id) {
                user.last_login_at = Some(at);
            }
            Ok(())
        }
    }

    const PASSWORD: &str = "correct horse battery";

    fn test_setup() -> (SessionManager, Arc<MemorySessionStore>) {
        let hasher = Arc::new(PasswordHasher::new());
        let config = AuthConfig::default();

        let user = User {
            id: Uuid::new_v4(),
            username: "alice".to_string(),
            email: None,
            password_hash: hasher.hash_password(PASSWORD).unwrap(),
            roles: vec![UserRole::Hr],
            created_at: Utc::now(),
            updated_at: Utc::now(),
            last_login_at: None,
        };

        let credentials = Arc::new(MemoryCredentials {
            users: Mutex::new(vec![user]),
        });
        let store = Arc::new(MemorySessionStore::default());

        let manager = SessionManager::new(
            Arc::new(JwtEncoder::new(&config)),
            Arc::new(JwtDecoder::new(&config)),
            Arc::clone(&store) as Arc<dyn SessionStore>,
            credentials as Arc<dyn CredentialStore>,
            hasher,
            config,
        );

        (manager, store)
    }

    #[tokio::test]
    async fn login_rejects_unknown_user_and_wrong_password() {
        let (manager, store) = test_setup();

        let err = manager
            .login("nobody", PASSWORD, ClientInfo::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));

        let err = manager
            .login("alice", "wrong password", ClientInfo::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));

        assert_eq!(store.session_count().await, 0);
    }

    #[tokio::test]
    async fn login_issues_pair_and_persists_session() {
        let (manager, store) = test_setup();

        let result = manager
            .login("alice", PASSWORD, ClientInfo::default())
            .await
            .unwrap();

        assert!(!result.tokens.access_token.is_empty());
        assert!(!result.tokens.refresh_token.is_empty());
        assert_eq!(store.session_count().await, 1);

        let session = store.lookup(&result.tokens.refresh_token).await.unwrap().unwrap();
        assert_eq!(session.user_id, result.user.id);
    }

    #[tokio::test]
    async fn refresh_rotates_session_exactly_once() {
        let (manager, store) = test_setup();

        let login = manager
            .login("alice", PASSWORD, ClientInfo::default())
            .await
            .unwrap();
        let first_token = login.tokens.refresh_token;

        let rotated = manager
            .refresh(&first_token, ClientInfo::default())
            .await
            .unwrap();
        assert_ne!(rotated.refresh_token, first_token);
        assert_eq!(store.session_count().await, 1);

        // Replaying the pre-rotation token must be denied.
        let err = manager
            .refresh(&first_token, ClientInfo::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::SessionNotFound));

        // The rotated token keeps working.
        manager
            .refresh(&rotated.refresh_token, ClientInfo::default())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn logout_revokes_refresh_token() {
        let (manager, store) = test_setup();

        let login = manager
            .login("alice", PASSWORD, ClientInfo::default())
            .await
            .unwrap();
        let token = login.tokens.refresh_token;

        manager.logout(&token).await.unwrap();
        assert_eq!(store.session_count().await, 0);

        let err = manager
            .refresh(&token, ClientInfo::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::SessionNotFound));

        // Logout is idempotent.
        manager.logout(&token).await.unwrap();
    }

    #[tokio::test]
    async fn concurrent_rotation_fails_closed() {
        let (manager, store) = test_setup();

        let login = manager
            .login("alice", PASSWORD, ClientInfo::default())
            .await
            .unwrap();

        store.force_conflict.store(true, Ordering::SeqCst);
        let err = manager
            .refresh(&login.tokens.refresh_token, ClientInfo::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::RotationConflict));
    }

    #[tokio::test]
    async fn expired_session_is_rejected_before_rotation() {
        let (manager, store) = test_setup();

        let login = manager
            .login("alice", PASSWORD, ClientInfo::default())
            .await
            .unwrap();

        store.expire_all().await;

        // JWT itself is still valid; the expired row alone denies the
        // refresh and stays behind for the sweep.
        let err = manager
            .refresh(&login.tokens.refresh_token, ClientInfo::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::SessionNotFound));
        assert_eq!(store.session_count().await, 1);

        assert_eq!(store.delete_expired(Utc::now()).await.unwrap(), 1);
        assert_eq!(store.session_count().await, 0);
    }
}
