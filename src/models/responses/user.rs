//! User-related response models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Role, User};

/// User data returned to callers (without the password hash)
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UserResponse {
    /// Hex form of the document id
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub root: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: user.name,
            email: user.email,
            role: user.role,
            root: user.root,
            created_at: to_chrono(user.created_at),
            updated_at: to_chrono(user.updated_at),
        }
    }
}

/// The account fields echoed back after sign-up or sign-in.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct UserSummary {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub root: bool,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
            root: user.root,
        }
    }
}

pub(crate) fn to_chrono(dt: mongodb::bson::DateTime) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(dt.timestamp_millis()).unwrap_or_default()
}
