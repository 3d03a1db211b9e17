//! Error code constants.
//!
//! These codes provide a machine-readable identifier for each error kind,
//! so callers can branch on failures without parsing messages.

// User errors
pub const CODE_USER_NOT_FOUND: &str = "USER_NOT_FOUND";
pub const CODE_EMAIL_EXISTS: &str = "EMAIL_EXISTS";

// Authentication errors
pub const CODE_INVALID_CREDENTIALS: &str = "INVALID_CREDENTIALS";
pub const CODE_INVALID_TOKEN: &str = "INVALID_TOKEN";

// Infrastructure errors
pub const CODE_DATABASE_ERROR: &str = "DATABASE_ERROR";
pub const CODE_HASHING_ERROR: &str = "HASHING_ERROR";
