//! Post handlers.

use actix_web::{HttpResponse, web};

use postboard_core::DomainError;
use postboard_core::domain::NewPost;
use postboard_shared::dto::CreatePostRequest;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /posts
///
/// The owner lookup and the insert run separately; the `posts.user_id`
/// foreign key rejects a post whose owner disappeared in between.
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let new_post = NewPost::from_parts(req.title, req.description, req.user_id)?;

    if state.users.find_by_id(new_post.user_id).await?.is_none() {
        return Err(DomainError::NotFound {
            entity_type: "User",
            id: new_post.user_id,
        }
        .into());
    }

    let post = state.posts.create(new_post).await?;

    tracing::info!(post_id = post.id, user_id = post.user_id, "Post created");
    Ok(HttpResponse::Created().json(post))
}
