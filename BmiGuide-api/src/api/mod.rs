pub mod handlers;
pub mod routes;

use axum::Router;

use crate::config::AppConfig;

/// Create the application router
pub fn create_application() -> Router {
    routes::create_app()
}

/// Create the application router for the given configuration
pub fn create_application_with_config(config: &AppConfig) -> Router {
    routes::create_app_from_config(config)
}
