use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Configure Swagger UI endpoints
pub fn configure_swagger_routes() -> SwaggerUi {
    SwaggerUi::new("/api-docs")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
}

// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Calculator pages
        crate::api::handlers::bmi::home,
        crate::api::handlers::bmi::calculate_bmi,

        // Health endpoints
        crate::api::handlers::health::health_check,
    ),
    components(
        schemas(
            // Entities
            crate::entities::bmi::CalculateBmiForm,

            // Health handlers
            crate::api::handlers::health::HealthResponse,
            crate::api::handlers::health::ComponentStatus,
            crate::api::handlers::health::ComponentHealthStatus,
        )
    ),
    tags(
        (name = "bmi", description = "BMI calculator pages"),
        (name = "health", description = "Health check endpoint")
    ),
    info(
        title = "BmiGuide",
        version = "0.1.0",
        description = "Body-mass index calculator rendered as HTML pages",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        ),
    ),
    servers(
        (url = "/", description = "Local development server")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_calculator_paths() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/"));
        assert!(doc.paths.paths.contains_key("/calculate-bmi"));
        assert!(doc.paths.paths.contains_key("/health"));
    }
}
