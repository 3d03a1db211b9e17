//! Services used by the repository layer.

pub mod auth_service;

pub use auth_service::AuthService;
