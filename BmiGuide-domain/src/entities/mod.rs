// Domain entities and value objects
pub mod bmi;

// Re-export common types for easier imports
pub use bmi::{
    BmiCategory, BmiResult, MeasurementInput, Measurements, ValidationResult,
    ADVISORY_MAX_WEIGHT_KG, MAX_HEIGHT_M, MIN_HEIGHT_M,
};
