//! Authentication request models.

use serde::Deserialize;

/// Credentials for `authenticate`.
#[derive(Debug, Deserialize, Clone)]
pub struct AuthenticateParams {
    pub email: String,
    pub password: String,
}
