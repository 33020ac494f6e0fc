use axum::{
    routing::{get, post},
    Extension, Router,
};
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::api::handlers::{bmi, health};
use crate::config::AppConfig;
use crate::openapi::configure_swagger_routes;

/// Create the application router with the default services and configuration
pub fn create_app() -> Router {
    create_app_from_config(&AppConfig::default())
}

/// Create the application router with the default services
pub fn create_app_from_config(config: &AppConfig) -> Router {
    create_app_with(
        bmi::create_service(),
        health::create_health_service(),
        health::AppEnvironment(config.environment.clone()),
    )
}

/// Create the application router around the given services
pub fn create_app_with(
    bmi_service: bmi::BmiService,
    health_service: health::SharedHealthService,
    environment: health::AppEnvironment,
) -> Router {
    debug!("Creating application router");

    // Calculator pages
    let page_routes = Router::new()
        .route("/", get(bmi::home))
        .route("/calculate-bmi", post(bmi::calculate_bmi))
        .with_state(bmi_service);

    debug!("Page routes configured");

    // Operational routes
    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .layer(Extension(health_service))
        .layer(Extension(environment));

    debug!("Health routes configured");

    let app = Router::new()
        .merge(page_routes)
        .merge(health_routes);

    // Configure the Swagger UI using the helper function
    let app = add_swagger_ui(app);

    debug!("Swagger UI merged");

    // Initialize health check service startup time
    health::initialize_server_start_time();

    app.layer(TraceLayer::new_for_http())
}

/// Add Swagger UI to the router
pub fn add_swagger_ui(app: Router) -> Router {
    let swagger = configure_swagger_routes();
    app.merge(swagger)
}
