//! User-related request models.

use serde::Deserialize;

use crate::models::Role;

/// Parameters for creating an account. `password` is plaintext and is hashed
/// before it reaches the store.
#[derive(Debug, Deserialize, Clone)]
pub struct CreateUserParams {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Fields a caller may change through `update`.
///
/// Unknown fields are rejected on deserialization; the password is changed
/// only through `reset_password`.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct UpdateUserParams {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
    pub root: Option<bool>,
}

impl UpdateUserParams {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.role.is_none() && self.root.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_params_reject_password() {
        let parsed: Result<UpdateUserParams, _> =
            serde_json::from_str(r#"{"name":"B","password":"plain"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_update_params_partial() {
        let params: UpdateUserParams = serde_json::from_str(r#"{"role":"admin"}"#).unwrap();
        assert_eq!(params.role, Some(Role::Admin));
        assert!(params.name.is_none());
        assert!(!params.is_empty());
        assert!(UpdateUserParams::default().is_empty());
    }
}
