use serde::{Deserialize, Serialize};

use super::{REQUIRED_FIELDS_MESSAGE, required_text};
use crate::error::DomainError;

/// User entity - represents a stored user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// A user that has passed validation but has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl NewUser {
    /// Build a new user from possibly missing request fields.
    ///
    /// Absent and empty values are both rejected.
    pub fn from_parts(
        first_name: Option<String>,
        last_name: Option<String>,
        email: Option<String>,
    ) -> Result<Self, DomainError> {
        match (
            required_text(first_name),
            required_text(last_name),
            required_text(email),
        ) {
            (Some(first_name), Some(last_name), Some(email)) => Ok(Self {
                first_name,
                last_name,
                email,
            }),
            _ => Err(DomainError::Validation(REQUIRED_FIELDS_MESSAGE.to_string())),
        }
    }

    /// Attach the identifier assigned by the store.
    pub fn with_id(self, id: i32) -> User {
        User {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
        }
    }
}
