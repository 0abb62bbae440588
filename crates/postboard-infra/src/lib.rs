//! # Postboard Infrastructure
//!
//! Concrete implementations of the ports defined in `postboard-core`.
//!
//! ## Feature Flags
//!
//! - `mysql` (default) - MySQL storage via SeaORM
//!
//! The in-memory repositories are always available.

pub mod database;

pub use database::{DatabaseConfig, InMemoryPostRepository, InMemoryUserRepository};

#[cfg(feature = "mysql")]
pub use database::{DatabasePool, MySqlPostRepository, MySqlUserRepository};
