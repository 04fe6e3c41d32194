//! User storage
//!
//! `UserRepository` is the persistence seam used by the user service. The
//! crate ships an in-memory implementation; a database-backed one only has
//! to implement the trait.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::types::ApiError;
use crate::user::models::User;

/// In-place edit applied to a stored user while the store is locked.
pub type UserPatch = Box<dyn FnOnce(&mut User) -> Result<(), ApiError> + Send>;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user. Fails with `EmailAlreadyExists` if the email
    /// (compared case-insensitively) is taken.
    async fn create(&self, user: User) -> Result<User, ApiError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ApiError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError>;

    /// Snapshot of every stored user, in no particular order.
    async fn all(&self) -> Result<Vec<User>, ApiError>;

    /// Apply `patch` to the stored user atomically. Nothing is written if the
    /// id is unknown (`UserNotFound`) or the patch returns an error.
    async fn update_with(&self, id: Uuid, patch: UserPatch) -> Result<User, ApiError>;
}

#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, ApiError> {
        let mut users = self.users.write().await;

        if users.values().any(|existing| existing.email.eq_ignore_ascii_case(&user.email)) {
            return Err(ApiError::EmailAlreadyExists);
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ApiError> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        let users = self.users.read().await;
        Ok(users.values().find(|user| user.email.eq_ignore_ascii_case(email)).cloned())
    }

    async fn all(&self) -> Result<Vec<User>, ApiError> {
        Ok(self.users.read().await.values().cloned().collect())
    }

    async fn update_with(&self, id: Uuid, patch: UserPatch) -> Result<User, ApiError> {
        let mut users = self.users.write().await;
        let slot = users.get_mut(&id).ok_or(ApiError::UserNotFound)?;

        let mut draft = slot.clone();
        patch(&mut draft)?;
        *slot = draft.clone();
        Ok(draft)
    }
}
