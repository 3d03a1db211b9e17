//! In-process [`UserStore`], used by tests and local tooling.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use crate::errors::RepoError;
use crate::models::{User, UserResponse};
use crate::repositories::UserStore;

/// Users kept in insertion order behind a lock. The uniqueness check and the
/// write happen under the same write guard.
#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw stored document, including the password hash.
    pub async fn get_raw(&self, id: ObjectId) -> Option<User> {
        self.users
            .read()
            .await
            .iter()
            .find(|u| u.id == Some(id))
            .cloned()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_all(&self) -> Result<Vec<UserResponse>, RepoError> {
        let users = self.users.read().await;
        Ok(users.iter().cloned().map(UserResponse::from).collect())
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<User>, RepoError> {
        Ok(self.get_raw(id).await)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_root(&self) -> Result<Option<User>, RepoError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.root).cloned())
    }

    async fn insert(&self, user: &User) -> Result<ObjectId, RepoError> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.email == user.email) {
            return Err(RepoError::user_exists(&user.email));
        }

        let id = ObjectId::new();
        users.push(User {
            id: Some(id),
            ..user.clone()
        });
        Ok(id)
    }

    async fn save(&self, user: &User) -> Result<bool, RepoError> {
        let mut users = self.users.write().await;
        if users
            .iter()
            .any(|u| u.email == user.email && u.id != user.id)
        {
            return Err(RepoError::user_exists(&user.email));
        }

        match users.iter_mut().find(|u| u.id.is_some() && u.id == user.id) {
            Some(stored) => {
                stored.name = user.name.clone();
                stored.email = user.email.clone();
                stored.role = user.role;
                stored.root = user.root;
                stored.updated_at = user.updated_at;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn update_password(
        &self,
        id: ObjectId,
        password_hash: &str,
    ) -> Result<bool, RepoError> {
        let mut users = self.users.write().await;
        match users.iter_mut().find(|u| u.id == Some(id)) {
            Some(stored) => {
                stored.password = password_hash.to_string();
                stored.updated_at = mongodb::bson::DateTime::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: ObjectId) -> Result<bool, RepoError> {
        let mut users = self.users.write().await;
        let before = users.len();
        users.retain(|u| u.id != Some(id));
        Ok(users.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    fn user(email: &str) -> User {
        User::new("A".to_string(), email.to_string(), "hash".to_string())
    }

    #[tokio::test]
    async fn test_insert_assigns_id_and_keeps_order() {
        let store = InMemoryUserStore::new();
        let first = store.insert(&user("a@x.com")).await.unwrap();
        let second = store.insert(&user("b@x.com")).await.unwrap();
        assert_ne!(first, second);

        let all = store.find_all().await.unwrap();
        let emails: Vec<_> = all.iter().map(|u| u.email.as_str()).collect();
        assert_eq!(emails, ["a@x.com", "b@x.com"]);
        assert_eq!(all[0].id, first.to_hex());
    }

    #[tokio::test]
    async fn test_insert_rejects_duplicate_email() {
        let store = InMemoryUserStore::new();
        store.insert(&user("a@x.com")).await.unwrap();

        let err = store.insert(&user("a@x.com")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UserExists);
        assert_eq!(store.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_save_rejects_email_of_other_user() {
        let store = InMemoryUserStore::new();
        store.insert(&user("a@x.com")).await.unwrap();
        let id = store.insert(&user("b@x.com")).await.unwrap();

        let mut changed = store.get_raw(id).await.unwrap();
        changed.email = "a@x.com".to_string();
        let err = store.save(&changed).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UserExists);
    }

    #[tokio::test]
    async fn test_save_leaves_password_alone() {
        let store = InMemoryUserStore::new();
        let id = store.insert(&user("a@x.com")).await.unwrap();

        let mut stale = store.get_raw(id).await.unwrap();
        store.update_password(id, "fresh-hash").await.unwrap();

        stale.name = "B".to_string();
        stale.password = "stale-hash".to_string();
        assert!(store.save(&stale).await.unwrap());

        let stored = store.get_raw(id).await.unwrap();
        assert_eq!(stored.name, "B");
        assert_eq!(stored.password, "fresh-hash");
    }

    #[tokio::test]
    async fn test_save_unknown_id_reports_no_match() {
        let store = InMemoryUserStore::new();
        let mut ghost = user("ghost@x.com");
        ghost.id = Some(ObjectId::new());
        assert!(!store.save(&ghost).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_reports_whether_removed() {
        let store = InMemoryUserStore::new();
        let id = store.insert(&user("a@x.com")).await.unwrap();
        assert!(store.delete(id).await.unwrap());
        assert!(!store.delete(id).await.unwrap());
        assert!(store.find_by_id(id).await.unwrap().is_none());
    }
}
