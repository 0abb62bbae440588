//! Database connection management and repositories.

mod connection;
mod memory;

#[cfg(feature = "mysql")]
mod mysql_base;
#[cfg(feature = "mysql")]
mod mysql_repo;

#[cfg(feature = "mysql")]
pub mod entity;

pub use connection::DatabaseConfig;
pub use memory::{InMemoryPostRepository, InMemoryUserRepository};

#[cfg(feature = "mysql")]
pub use connection::DatabasePool;
#[cfg(feature = "mysql")]
pub use mysql_repo::{MySqlPostRepository, MySqlUserRepository};

#[cfg(feature = "mysql")]
#[cfg(test)]
mod tests;
