use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::errors::RepoError;
use crate::models::{User, UserResponse};

/// Storage operations on the user collection.
///
/// Implementations enforce email uniqueness themselves and report a
/// violation as `RepoError::UserExists`.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// All users in insertion order, read without their password hashes.
    async fn find_all(&self) -> Result<Vec<UserResponse>, RepoError>;

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<User>, RepoError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;

    async fn find_root(&self) -> Result<Option<User>, RepoError>;

    /// Persist a new user and return its generated id.
    async fn insert(&self, user: &User) -> Result<ObjectId, RepoError>;

    /// Write the editable fields of `user` (`name`, `email`, `role`, `root`,
    /// `updated_at`) onto the stored document. The password hash is never
    /// written here. Returns false when no document has its id.
    async fn save(&self, user: &User) -> Result<bool, RepoError>;

    /// Overwrite the password hash. Returns false when `id` matches nothing.
    async fn update_password(&self, id: ObjectId, password_hash: &str)
        -> Result<bool, RepoError>;

    /// Returns false when `id` matches nothing.
    async fn delete(&self, id: ObjectId) -> Result<bool, RepoError>;
}
