//! Error message constants.

pub const ERR_USER_NOT_FOUND: &str = "User not found";
pub const ERR_INVALID_CREDENTIALS: &str = "Invalid email or password";
pub const ERR_INVALID_TOKEN: &str = "Invalid or expired token";
