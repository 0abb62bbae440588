//! In-memory repositories - used when the server is built without MySQL.
//!
//! Ids are assigned from 1 upward like an auto-increment column, and the post
//! store refuses posts whose owner is unknown, like the `posts.user_id`
//! foreign key does.
//! Note: Data is lost on process restart.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use postboard_core::domain::{NewPost, NewUser, Post, User};
use postboard_core::error::RepoError;
use postboard_core::ports::{BaseRepository, PostRepository, UserRepository};

struct Table<T> {
    rows: BTreeMap<i32, T>,
    last_id: i32,
}

impl<T> Table<T> {
    fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }

    fn next_id(&mut self) -> i32 {
        self.last_id += 1;
        self.last_id
    }
}

/// In-memory user store.
pub struct InMemoryUserRepository {
    table: RwLock<Table<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table::new()),
        }
    }

    async fn contains(&self, id: i32) -> bool {
        self.table.read().await.rows.contains_key(&id)
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<User, i32> for InMemoryUserRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn save(&self, user: User) -> Result<User, RepoError> {
        let mut table = self.table.write().await;
        match table.rows.get_mut(&user.id) {
            Some(row) => {
                *row = user.clone();
                Ok(user)
            }
            None => Err(RepoError::NotFound),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, RepoError> {
        let mut table = self.table.write().await;
        let user = user.with_id(table.next_id());
        table.rows.insert(user.id, user.clone());
        Ok(user)
    }
}

/// In-memory post store, checking owners against a user store.
pub struct InMemoryPostRepository {
    users: Arc<InMemoryUserRepository>,
    table: RwLock<Table<Post>>,
}

impl InMemoryPostRepository {
    pub fn new(users: Arc<InMemoryUserRepository>) -> Self {
        Self {
            users,
            table: RwLock::new(Table::new()),
        }
    }

    async fn check_owner(&self, user_id: i32) -> Result<(), RepoError> {
        if self.users.contains(user_id).await {
            Ok(())
        } else {
            Err(RepoError::Constraint(format!(
                "posts.user_id {user_id} does not reference an existing user"
            )))
        }
    }
}

#[async_trait]
impl BaseRepository<Post, i32> for InMemoryPostRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn save(&self, post: Post) -> Result<Post, RepoError> {
        self.check_owner(post.user_id).await?;

        let mut table = self.table.write().await;
        match table.rows.get_mut(&post.id) {
            Some(row) => {
                *row = post.clone();
                Ok(post)
            }
            None => Err(RepoError::NotFound),
        }
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, post: NewPost) -> Result<Post, RepoError> {
        self.check_owner(post.user_id).await?;

        let mut table = self.table.write().await;
        let post = post.with_id(table.next_id());
        table.rows.insert(post.id, post.clone());
        Ok(post)
    }
}
