use serde::{Deserialize, Serialize};

use super::{REQUIRED_FIELDS_MESSAGE, required_text};
use crate::error::DomainError;

/// Post entity - a titled text owned by a user.
///
/// `user_id` is kept as a plain scalar; the owning user is never loaded
/// alongside the post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub user_id: i32,
}

/// A validated post awaiting insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub description: String,
    pub user_id: i32,
}

impl NewPost {
    /// Build a new post from possibly missing request fields.
    ///
    /// A `user_id` of zero is treated the same as an absent one.
    pub fn from_parts(
        title: Option<String>,
        description: Option<String>,
        user_id: Option<i32>,
    ) -> Result<Self, DomainError> {
        match (
            required_text(title),
            required_text(description),
            user_id.filter(|id| *id != 0),
        ) {
            (Some(title), Some(description), Some(user_id)) => Ok(Self {
                title,
                description,
                user_id,
            }),
            _ => Err(DomainError::Validation(REQUIRED_FIELDS_MESSAGE.to_string())),
        }
    }

    pub fn with_id(self, id: i32) -> Post {
        Post {
            id,
            title: self.title,
            description: self.description,
            user_id: self.user_id,
        }
    }
}
