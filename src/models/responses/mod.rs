//! Response models returned to callers.

pub mod auth;
pub mod user;

pub use auth::*;
pub use user::*;
