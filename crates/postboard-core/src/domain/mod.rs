//! Domain entities - the core business objects.

mod user;

mod post;

pub use post::{NewPost, Post};
pub use user::{NewUser, User};

/// Message returned whenever a create request lacks a required field.
pub const REQUIRED_FIELDS_MESSAGE: &str = "All fields are required.";

/// A required text field counts as present only when it is non-empty.
pub(crate) fn required_text(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
