use axum::{http::StatusCode, response::IntoResponse, Json, Extension};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use utoipa::ToSchema;
use std::time::{SystemTime, UNIX_EPOCH};
use std::sync::{Once, Arc};
use once_cell::sync::OnceCell;
use std::collections::HashMap;
// Use the trait from domain layer
use bmi_guide_domain::health::{HealthServiceTrait, SystemHealth, SystemStatus, ComponentStatus as DomainComponentStatus, HealthComponent as DomainHealthComponent};
use bmi_guide_domain::health;
use async_trait::async_trait;

/// Health service type shared through a request extension
pub type SharedHealthService = Arc<dyn HealthServiceTrait + Send + Sync>;

/// Deployment environment reported by the health check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppEnvironment(pub String);

impl Default for AppEnvironment {
    fn default() -> Self {
        AppEnvironment("development".to_string())
    }
}

/// Health check response model
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Current service status ("ok", "degraded", or "error")
    pub status: String,
    /// Current application version from Cargo manifest
    pub version: String,
    /// Timestamp of when the response was generated
    pub timestamp: u64,
    /// Uptime of the service in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uptime: Option<u64>,
    /// Details about various components of the system
    pub components: ComponentStatus,
    /// Environment information
    pub environment: String,
}

/// Status of individual system components
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ComponentStatus {
    /// Calculator self-check status
    pub calculator: ComponentHealthStatus,
    /// API status
    pub api: ComponentHealthStatus,
    /// Additional components (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional: Option<serde_json::Value>,
}

/// Health status for an individual component
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ComponentHealthStatus {
    /// Status of the component ("ok", "degraded", or "error")
    pub status: String,
    /// Optional message with more details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

// Track the time when the server started using a thread-safe OnceCell
static SERVER_START_TIME: OnceCell<u64> = OnceCell::new();
static INIT: Once = Once::new();

// Initialize the server start time
pub fn initialize_server_start_time() {
    INIT.call_once(|| {
        let _ = SERVER_START_TIME.set(unix_now());
    });
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Health check endpoint to verify the service is running
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 500, description = "Service is not healthy", body = HealthResponse),
        (status = 503, description = "Service is degraded", body = HealthResponse)
    ),
    tag = "health"
)]
#[instrument(skip(health_service))]
pub async fn health_check(
    Extension(health_service): Extension<SharedHealthService>,
    Extension(AppEnvironment(environment)): Extension<AppEnvironment>,
) -> impl IntoResponse {
    info!("Health check requested");

    let now = unix_now();

    // Calculate uptime if server start time is available
    let uptime = SERVER_START_TIME.get().map(|&start_time| now.saturating_sub(start_time));

    let system_health = health_service.get_system_health().await;

    let overall_status = match system_health.status {
        SystemStatus::Healthy => "ok",
        SystemStatus::Degraded => "degraded",
        SystemStatus::Unhealthy => "error",
    };

    let mut component_statuses = ComponentStatus {
        calculator: component_health(system_health.components.get("calculator")),
        api: component_health(system_health.components.get("api")),
        additional: None,
    };

    // Add any additional components as a JSON object
    let additional_components: serde_json::Map<String, serde_json::Value> = system_health.components.iter()
        .filter(|(name, _)| name.as_str() != "calculator" && name.as_str() != "api")
        .map(|(name, component)| {
            (name.clone(), serde_json::json!({
                "status": map_component_status(&component.status),
                "message": component.details,
            }))
        })
        .collect();

    if !additional_components.is_empty() {
        component_statuses.additional = Some(additional_components.into());
    }

    let response = HealthResponse {
        status: overall_status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: now,
        uptime,
        components: component_statuses,
        environment,
    };

    // Return appropriate status code based on overall status
    let status_code = match overall_status {
        "ok" => StatusCode::OK,
        "degraded" => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (status_code, Json(response))
}

/// Missing components are reported as healthy
fn component_health(component: Option<&DomainHealthComponent>) -> ComponentHealthStatus {
    ComponentHealthStatus {
        status: map_component_status(
            &component.map(|c| c.status.clone()).unwrap_or(DomainComponentStatus::Healthy),
        ),
        message: component.and_then(|c| c.details.clone()),
    }
}

/// Map domain component status to API status string
fn map_component_status(status: &DomainComponentStatus) -> String {
    match status {
        DomainComponentStatus::Healthy => "ok",
        DomainComponentStatus::Degraded => "degraded",
        DomainComponentStatus::Unhealthy => "error",
    }.to_string()
}

/// Implementation of the health service
#[derive(Debug, Default)]
pub struct HealthService;

impl HealthService {
    /// Create a new health service
    pub fn new() -> Self {
        HealthService
    }
}

#[async_trait]
impl HealthServiceTrait for HealthService {
    async fn get_system_health(&self) -> SystemHealth {
        let mut components = HashMap::new();

        let calculator_status = match self.check_calculator_status().await {
            Ok(true) => DomainComponentStatus::Healthy,
            Ok(false) => DomainComponentStatus::Degraded,
            Err(_) => DomainComponentStatus::Unhealthy,
        };

        components.insert(
            "calculator".to_string(),
            DomainHealthComponent {
                status: calculator_status.clone(),
                details: match calculator_status {
                    DomainComponentStatus::Healthy => None,
                    DomainComponentStatus::Degraded => Some("Calculator returned an unexpected reference value".to_string()),
                    DomainComponentStatus::Unhealthy => Some("Calculator self-check failed".to_string()),
                },
            },
        );

        // Add API component (always healthy in this implementation)
        components.insert(
            "api".to_string(),
            DomainHealthComponent {
                status: DomainComponentStatus::Healthy,
                details: None,
            },
        );

        SystemHealth::from_components(components)
    }

    async fn check_calculator_status(&self) -> Result<bool, String> {
        health::check_calculator_status().await
    }
}

/// Factory function to create a health service
pub fn create_health_service() -> SharedHealthService {
    Arc::new(HealthService::new())
}
