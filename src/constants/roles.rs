//! Role names as stored in the `role` field.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_USER: &str = "user";
