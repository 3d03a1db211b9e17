//! MongoDB implementation of [`UserStore`].

use async_trait::async_trait;
use futures::TryStreamExt;
use log::{debug, info};
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::options::IndexOptions;
use mongodb::{Collection, Database, IndexModel};
use serde::Deserialize;

use crate::constants::COLLECTION_USERS;
use crate::errors::{is_duplicate_key, RepoError};
use crate::models::responses::user::to_chrono;
use crate::models::{Role, User, UserResponse};
use crate::repositories::UserStore;
use crate::utils::log_sanitizer::mask_email;

/// Shape of a user document read with the password projected out.
#[derive(Debug, Deserialize)]
struct ProjectedUser {
    #[serde(rename = "_id")]
    id: ObjectId,
    name: String,
    email: String,
    #[serde(default)]
    role: Role,
    #[serde(default)]
    root: bool,
    created_at: mongodb::bson::DateTime,
    updated_at: mongodb::bson::DateTime,
}

impl From<ProjectedUser> for UserResponse {
    fn from(user: ProjectedUser) -> Self {
        Self {
            id: user.id.to_hex(),
            name: user.name,
            email: user.email,
            role: user.role,
            root: user.root,
            created_at: to_chrono(user.created_at),
            updated_at: to_chrono(user.updated_at),
        }
    }
}

pub struct MongoUserStore {
    collection: Collection<User>,
}

impl MongoUserStore {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_USERS),
        }
    }

    /// Create the indexes the store relies on.
    ///
    /// Call once at startup. The unique index on `email` is what turns a
    /// duplicate sign-up into `RepoError::UserExists`.
    pub async fn create_indexes(&self) -> Result<(), RepoError> {
        info!("Creating database indexes for users collection...");

        let indexes = vec![
            IndexModel::builder()
                .keys(doc! { "email": 1 })
                .options(IndexOptions::builder().unique(true).build())
                .build(),
            IndexModel::builder().keys(doc! { "root": 1 }).build(),
        ];

        self.collection.create_indexes(indexes).await?;
        info!("Database indexes created successfully");
        Ok(())
    }
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn find_all(&self) -> Result<Vec<UserResponse>, RepoError> {
        debug!("Store: Listing all users");
        let cursor = self
            .collection
            .clone_with_type::<ProjectedUser>()
            .find(doc! {})
            .projection(doc! { "password": 0 })
            .sort(doc! { "_id": 1 })
            .await?;

        let users: Vec<ProjectedUser> = cursor.try_collect().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<User>, RepoError> {
        debug!("Store: Finding user by ID: {}", id);
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        debug!("Store: Finding user by email: {}", mask_email(email));
        Ok(self.collection.find_one(doc! { "email": email }).await?)
    }

    async fn find_root(&self) -> Result<Option<User>, RepoError> {
        Ok(self.collection.find_one(doc! { "root": true }).await?)
    }

    async fn insert(&self, user: &User) -> Result<ObjectId, RepoError> {
        match self.collection.insert_one(user).await {
            Ok(result) => result
                .inserted_id
                .as_object_id()
                .ok_or_else(|| RepoError::Database {
                    message: "inserted _id is not an ObjectId".to_string(),
                }),
            Err(err) if is_duplicate_key(&err) => Err(RepoError::user_exists(&user.email)),
            Err(err) => Err(err.into()),
        }
    }

    async fn save(&self, user: &User) -> Result<bool, RepoError> {
        let Some(id) = user.id else {
            return Ok(false);
        };

        let changes = doc! {
            "$set": {
                "name": user.name.as_str(),
                "email": user.email.as_str(),
                "role": user.role.to_string(),
                "root": user.root,
                "updated_at": user.updated_at,
            }
        };

        match self.collection.update_one(doc! { "_id": id }, changes).await {
            Ok(result) => Ok(result.matched_count > 0),
            Err(err) if is_duplicate_key(&err) => Err(RepoError::user_exists(&user.email)),
            Err(err) => Err(err.into()),
        }
    }

    async fn update_password(
        &self,
        id: ObjectId,
        password_hash: &str,
    ) -> Result<bool, RepoError> {
        let result = self
            .collection
            .update_one(
                doc! { "_id": id },
                doc! {
                    "$set": {
                        "password": password_hash,
                        "updated_at": mongodb::bson::DateTime::now()
                    }
                },
            )
            .await?;
        Ok(result.matched_count > 0)
    }

    async fn delete(&self, id: ObjectId) -> Result<bool, RepoError> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}
