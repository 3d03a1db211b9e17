//! Authentication response models.

use serde::Serialize;

use crate::models::UserSummary;

/// Result of `create` and `authenticate`.
#[derive(Debug, Serialize, Clone)]
pub struct AuthResponse {
    pub user: UserSummary,
    pub token: String,
}
