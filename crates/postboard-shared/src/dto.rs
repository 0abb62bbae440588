//! Data Transfer Objects - request types for the API.
//!
//! Every field is optional on the wire so that a missing field reaches the
//! handler and is answered with the same message as an empty one.

use serde::{Deserialize, Serialize};

/// Body of `POST /users`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

/// Body of `POST /posts`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub user_id: Option<i32>,
}
