use thiserror::Error;
use tracing::debug;

use crate::entities::bmi::{BmiResult, MeasurementInput, Measurements, ValidationResult};
use crate::services::classification::calculate_bmi;
use crate::services::validation::validate_input;

/// BMI service errors
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BmiServiceError {
    /// The submitted weight or height was rejected
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Trait for BMI service operations
pub trait BmiServiceTrait {
    /// Validate raw form values
    fn validate(&self, input: &MeasurementInput) -> ValidationResult;

    /// Compute and classify the BMI of validated measurements
    fn calculate(&self, measurements: Measurements) -> BmiResult;

    /// Validate raw form values and, when accepted, calculate their BMI
    fn evaluate(&self, input: &MeasurementInput) -> Result<BmiResult, BmiServiceError> {
        match self.validate(input) {
            ValidationResult::Valid(measurements) => Ok(self.calculate(measurements)),
            ValidationResult::Invalid(reason) => Err(BmiServiceError::InvalidInput(reason)),
        }
    }
}

/// BMI service for domain logic
#[derive(Debug, Default, Clone, Copy)]
pub struct BmiService;

impl BmiService {
    /// Create a new BMI service
    pub fn new() -> Self {
        Self
    }
}

impl BmiServiceTrait for BmiService {
    fn validate(&self, input: &MeasurementInput) -> ValidationResult {
        validate_input(input)
    }

    fn calculate(&self, measurements: Measurements) -> BmiResult {
        let raw = calculate_bmi(measurements.weight_kg, measurements.height_m);
        let result = BmiResult::from_raw(raw, measurements);
        debug!(
            "BMI {:.3} rounded to {:.1} ({})",
            raw, result.value, result.category
        );
        result
    }
}

/// Factory function to create the default BMI service
pub fn create_default_bmi_service() -> BmiService {
    BmiService::new()
}
