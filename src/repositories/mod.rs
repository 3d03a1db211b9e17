//! Repository layer for user persistence.
//!
//! `UserRepository` holds the account operations; it talks to storage only
//! through the `UserStore` trait, implemented for MongoDB and for memory.

pub mod memory_user_store;
pub mod mongo_user_store;
pub mod user_repository;
pub mod user_store;

pub use memory_user_store::InMemoryUserStore;
pub use mongo_user_store::MongoUserStore;
pub use user_repository::UserRepository;
pub use user_store::UserStore;
