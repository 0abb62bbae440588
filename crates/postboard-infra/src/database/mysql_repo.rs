//! MySQL repository implementations.

use async_trait::async_trait;

use postboard_core::domain::{NewPost, NewUser, Post, User};
use postboard_core::error::RepoError;
use postboard_core::ports::{PostRepository, UserRepository};

use super::entity::post::Entity as PostEntity;
use super::entity::user::Entity as UserEntity;
use super::mysql_base::MySqlBaseRepository;

/// MySQL user repository.
pub type MySqlUserRepository = MySqlBaseRepository<UserEntity>;

/// MySQL post repository.
pub type MySqlPostRepository = MySqlBaseRepository<PostEntity>;

/// Mask an email address so it can be logged without exposing PII.
pub(crate) fn mask_email(email: &str) -> String {
    match email.find('@') {
        Some(at_pos) => {
            let (local, domain) = email.split_at(at_pos);
            let masked_local = match local.chars().next() {
                Some(first) if local.len() > 1 => format!("{first}***"),
                _ => "***".to_string(),
            };
            format!("{masked_local}{domain}")
        }
        None => "***".to_string(),
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, RepoError> {
        tracing::debug!(user_email = %mask_email(&user.email), "Creating user");

        let user: User = self.insert(user).await?;
        tracing::debug!(user_id = user.id, "User created");
        Ok(user)
    }
}

#[async_trait]
impl PostRepository for MySqlPostRepository {
    async fn create(&self, post: NewPost) -> Result<Post, RepoError> {
        tracing::debug!(user_id = post.user_id, "Creating post");

        let post: Post = self.insert(post).await?;
        tracing::debug!(post_id = post.id, "Post created");
        Ok(post)
    }
}
