//! Credential store trait over the user repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use staffhub_core::error::AppError;
use staffhub_database::repositories::user::UserRepository;
use staffhub_entity::user::{CreateUser, User};

/// Identity lookup and creation as seen by the auth core.
///
/// The credential store is consulted, never owned: reads during login and
/// refresh, a single insert during signup.
#[async_trait]
pub trait CredentialStore: Send + Sync + std::fmt::Debug {
    /// Finds a user by ID.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError>;

    /// Finds a user by username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;

    /// Inserts a new user.
    async fn create(&self, user: &CreateUser) -> Result<User, AppError>;

    /// Records a successful login time.
    async fn update_last_login(&self, id: Uuid, at: DateTime<Utc>) -> Result<(), AppError>;
}

#[async_trait]
impl CredentialStore for UserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
        UserRepository::find_by_id(self, id).await
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        UserRepository::find_by_username(self, username).await
    }

    async fn create(&self, user: &CreateUser) -> Result<User, AppError> {
        UserRepository::create(self, user).await
    }

    async fn update_last_login(&self, id: Uuid, at: DateTime<Utc>) -> Result<(), AppError> {
        UserRepository::update_last_login(self, id, at).await
    }
}
