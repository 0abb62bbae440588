//! User handlers.

use actix_web::{HttpResponse, web};

use postboard_core::domain::NewUser;
use postboard_shared::dto::CreateUserRequest;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /users
pub async fn create_user(
    state: web::Data<AppState>,
    body: web::Json<CreateUserRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let new_user = NewUser::from_parts(req.first_name, req.last_name, req.email)?;
    let user = state.users.create(new_user).await?;

    tracing::info!(user_id = user.id, "User created");
    Ok(HttpResponse::Created().json(user))
}
