//! User accounts on MongoDB: CRUD, bcrypt-hashed credentials and JWT access
//! tokens behind a single [`UserRepository`].

pub mod config;
pub mod constants;
pub mod db;
pub mod errors;
pub mod models;
pub mod repositories;
pub mod services;
pub mod utils;

pub use errors::{ErrorKind, RepoError};
pub use repositories::{InMemoryUserStore, MongoUserStore, UserRepository, UserStore};
pub use services::AuthService;
