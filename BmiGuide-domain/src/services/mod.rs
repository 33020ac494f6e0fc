pub mod bmi;
pub mod classification;
pub mod validation;

// Domain services
// This module contains business logic implementations.

// Re-export service traits and factory functions
pub use bmi::{create_default_bmi_service, BmiService, BmiServiceError, BmiServiceTrait};
pub use classification::{calculate_bmi, categorize_bmi, round_to_tenth};
pub use validation::validate_input;
