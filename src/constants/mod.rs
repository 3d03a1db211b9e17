//! Application constants module.
//!
//! This module centralizes the constant strings used throughout the crate:
//! machine-readable error codes, error messages, role names, and collection names.

pub mod collections;
pub mod error_codes;
pub mod errors;
pub mod roles;

pub use collections::*;
pub use error_codes::*;
pub use errors::*;
pub use roles::*;
