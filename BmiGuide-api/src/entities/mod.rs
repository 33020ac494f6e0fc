// Public entities for the BmiGuide API
// This module contains data structures that are shared across the application boundary

// Form payload of the calculator page
pub mod bmi;
