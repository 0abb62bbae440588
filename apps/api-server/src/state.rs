//! Application state - shared across all handlers.

use std::sync::Arc;

use postboard_core::ports::{PostRepository, UserRepository};

#[cfg(feature = "mysql")]
use postboard_infra::{DatabasePool, MySqlPostRepository, MySqlUserRepository};

#[cfg(any(test, not(feature = "mysql")))]
use postboard_infra::{InMemoryPostRepository, InMemoryUserRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    pub fn new(users: Arc<dyn UserRepository>, posts: Arc<dyn PostRepository>) -> Self {
        Self { users, posts }
    }

    /// Repositories backed by the MySQL pool.
    #[cfg(feature = "mysql")]
    pub fn mysql(pool: &DatabasePool) -> Self {
        Self::new(
            Arc::new(MySqlUserRepository::new(pool.conn.clone())),
            Arc::new(MySqlPostRepository::new(pool.conn.clone())),
        )
    }

    /// Repositories kept in process memory.
    #[cfg(any(test, not(feature = "mysql")))]
    pub fn in_memory() -> Self {
        let users = Arc::new(InMemoryUserRepository::new());
        let posts = Arc::new(InMemoryPostRepository::new(users.clone()));
        Self::new(users, posts)
    }
}
