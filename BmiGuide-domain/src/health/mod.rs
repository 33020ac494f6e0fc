//! Domain layer health check functionality
//! This module provides health check services for the application

use std::collections::HashMap;
use async_trait::async_trait;

use crate::entities::bmi::{BmiCategory, BmiResult, MeasurementInput};
use crate::services::{BmiService, BmiServiceTrait};

/// System health status
#[derive(Debug, Clone, PartialEq)]
pub enum SystemStatus {
    /// All components are healthy
    Healthy,
    /// Some components are degraded but the system is functional
    Degraded,
    /// System is not functioning properly
    Unhealthy,
}

/// Component health status
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentStatus {
    /// Component is functioning normally
    Healthy,
    /// Component is functioning but with reduced performance
    Degraded,
    /// Component is not functioning
    Unhealthy,
}

/// Represents a health component with status and optional details
#[derive(Debug, Clone)]
pub struct HealthComponent {
    /// Status of the component
    pub status: ComponentStatus,
    /// Optional details about the component status
    pub details: Option<String>,
}

/// Represents the overall health of the system
#[derive(Debug, Clone)]
pub struct SystemHealth {
    /// Overall system status
    pub status: SystemStatus,
    /// Map of component names to their health status
    pub components: HashMap<String, HealthComponent>,
}

impl SystemHealth {
    /// Build a report whose overall status is the worst component status
    pub fn from_components(components: HashMap<String, HealthComponent>) -> Self {
        let status = if components.values().any(|c| c.status == ComponentStatus::Unhealthy) {
            SystemStatus::Unhealthy
        } else if components.values().any(|c| c.status == ComponentStatus::Degraded) {
            SystemStatus::Degraded
        } else {
            SystemStatus::Healthy
        };

        Self { status, components }
    }
}

/// Trait for health services
#[async_trait]
pub trait HealthServiceTrait: Send + Sync + std::fmt::Debug {
    /// Get the overall system health
    async fn get_system_health(&self) -> SystemHealth;

    /// Check that the calculator still produces the expected result
    /// for a known measurement
    async fn check_calculator_status(&self) -> Result<bool, String>;
}

/// Run the calculator against a reference measurement
///
/// Returns:
/// - Ok(true) if the reference BMI and category match
/// - Ok(false) if a result was produced but differs from the reference
/// - Err if the reference input was rejected
pub async fn check_calculator_status() -> Result<bool, String> {
    let service = BmiService::new();
    match service.evaluate(&MeasurementInput::new("70", "1.75")) {
        Ok(result) => Ok(matches_reference(&result)),
        Err(e) => Err(format!("Calculator self-check failed: {}", e)),
    }
}

/// 70 kg at 1.75 m is 22.9, Normal Weight
fn matches_reference(result: &BmiResult) -> bool {
    result.value == 22.9 && result.category == BmiCategory::Normal
}

/// Get overall system health
pub async fn get_system_health() -> SystemHealth {
    let calculator = match check_calculator_status().await {
        Ok(true) => HealthComponent {
            status: ComponentStatus::Healthy,
            details: None,
        },
        Ok(false) => HealthComponent {
            status: ComponentStatus::Degraded,
            details: Some("Calculator returned an unexpected reference value".to_string()),
        },
        Err(e) => HealthComponent {
            status: ComponentStatus::Unhealthy,
            details: Some(e),
        },
    };

    SystemHealth::from_components(
        vec![("calculator".to_string(), calculator)].into_iter().collect(),
    )
}
