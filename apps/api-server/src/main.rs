//! # Postboard API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod state;
mod telemetry;

use config::AppConfig;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    // Exits the process when the database is unreachable
    let state = build_state(&config).await;

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?;

    tracing::info!("Server is running on port {}", config.port);

    server.run().await
}

#[cfg(feature = "mysql")]
async fn build_state(config: &AppConfig) -> AppState {
    match postboard_infra::DatabasePool::connect(&config.database).await {
        Ok(pool) => {
            tracing::info!("Data source has been initialized");
            AppState::mysql(&pool)
        }
        Err(e) => {
            tracing::error!(error = %e, "Error during data source initialization");
            std::process::exit(1);
        }
    }
}

#[cfg(not(feature = "mysql"))]
async fn build_state(_config: &AppConfig) -> AppState {
    tracing::warn!("Built without the mysql feature - data is kept in memory");
    AppState::in_memory()
}
