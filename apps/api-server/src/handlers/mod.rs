//! HTTP handlers and route configuration.

mod health;
mod posts;
mod users;

use actix_web::web;

use crate::middleware::error;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(error::json_config())
        .route("/health", web::get().to(health::health_check))
        .route("/users", web::post().to(users::create_user))
        .route("/posts", web::post().to(posts::create_post));
}
