//! Data models organized by type.

pub mod claims;
pub mod requests;
pub mod responses;
pub mod user;

pub use claims::Claims;
pub use requests::{AuthenticateParams, CreateUserParams, UpdateUserParams};
pub use responses::{AuthResponse, UserResponse, UserSummary};
pub use user::{normalize_email, Role, User};
