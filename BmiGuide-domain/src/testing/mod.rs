// Testing utilities and mock implementations for the domain layer
// This module is only available when the "mock" feature is enabled

use crate::entities::bmi::{BmiCategory, BmiResult, MeasurementInput, Measurements, ValidationResult};
use crate::health::{ComponentStatus, HealthComponent, HealthServiceTrait, SystemHealth, SystemStatus};
use crate::services::bmi::BmiServiceTrait;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Mock implementation of the BmiServiceTrait for testing
#[derive(Debug)]
pub struct MockBmiService {
    fixed_result: Option<BmiResult>,
    should_fail_validation: bool,
    calculations: AtomicUsize,
}

impl Default for MockBmiService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBmiService {
    /// Create a new mock BMI service that accepts any input
    pub fn new() -> Self {
        Self {
            fixed_result: None,
            should_fail_validation: false,
            calculations: AtomicUsize::new(0),
        }
    }

    /// Configure the mock to reject every input
    pub fn with_validation_failure(mut self) -> Self {
        self.should_fail_validation = true;
        self
    }

    /// Configure the mock to return a pre-defined result
    pub fn with_result(mut self, result: BmiResult) -> Self {
        self.fixed_result = Some(result);
        self
    }

    /// Number of times `calculate` has been called
    pub fn calculation_count(&self) -> usize {
        self.calculations.load(Ordering::SeqCst)
    }
}

impl BmiServiceTrait for MockBmiService {
    fn validate(&self, _input: &MeasurementInput) -> ValidationResult {
        if self.should_fail_validation {
            ValidationResult::Invalid(
                "Validation failed - mock is configured to fail validation".to_string(),
            )
        } else {
            ValidationResult::Valid(Measurements { weight_kg: 70.0, height_m: 1.75 })
        }
    }

    fn calculate(&self, measurements: Measurements) -> BmiResult {
        self.calculations.fetch_add(1, Ordering::SeqCst);
        match &self.fixed_result {
            Some(result) => result.clone(),
            None => BmiResult {
                value: 22.9,
                category: BmiCategory::Normal,
                recommendation: BmiCategory::Normal.recommendation(),
                weight_kg: measurements.weight_kg,
                height_m: measurements.height_m,
            },
        }
    }
}

/// Mock implementation of the HealthServiceTrait for testing
#[derive(Debug)]
pub struct MockHealthService {
    system_status: SystemStatus,
    calculator_status: ComponentStatus,
    components: HashMap<String, HealthComponent>,
}

impl Default for MockHealthService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockHealthService {
    /// Create a new mock health service where everything is healthy
    pub fn new() -> Self {
        Self {
            system_status: SystemStatus::Healthy,
            calculator_status: ComponentStatus::Healthy,
            components: HashMap::new(),
        }
    }

    /// Configure the calculator component status
    pub fn with_calculator_status(mut self, status: ComponentStatus) -> Self {
        self.calculator_status = status;
        self
    }

    /// Set the overall system status
    pub fn with_system_status(mut self, status: SystemStatus) -> Self {
        self.system_status = status;
        self
    }

    /// Add a custom component with a specific status
    pub fn with_component(mut self, name: &str, status: ComponentStatus, details: Option<String>) -> Self {
        self.components.insert(name.to_string(), HealthComponent { status, details });
        self
    }
}

#[async_trait]
impl HealthServiceTrait for MockHealthService {
    async fn get_system_health(&self) -> SystemHealth {
        let mut components = HashMap::new();

        components.insert(
            "calculator".to_string(),
            HealthComponent {
                status: self.calculator_status.clone(),
                details: match self.calculator_status {
                    ComponentStatus::Healthy => None,
                    ComponentStatus::Degraded => Some("Calculator returned an unexpected reference value".to_string()),
                    ComponentStatus::Unhealthy => Some("Calculator self-check failed".to_string()),
                },
            },
        );

        components.insert(
            "api".to_string(),
            HealthComponent {
                status: ComponentStatus::Healthy,
                details: None,
            },
        );

        for (name, component) in &self.components {
            components.insert(name.clone(), component.clone());
        }

        SystemHealth {
            status: self.system_status.clone(),
            components,
        }
    }

    async fn check_calculator_status(&self) -> Result<bool, String> {
        match self.calculator_status {
            ComponentStatus::Healthy => Ok(true),
            ComponentStatus::Degraded => Ok(false),
            ComponentStatus::Unhealthy => Err("Calculator self-check failed".to_string()),
        }
    }
}

/// Factory function to create a mock BMI service
pub fn create_mock_bmi_service() -> MockBmiService {
    MockBmiService::new()
}

/// Factory function to create a mock health service
pub fn create_mock_health_service() -> MockHealthService {
    MockHealthService::new()
}
