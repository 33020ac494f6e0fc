pub mod health;
pub mod bmi;


// Re-export handlers for easier imports
pub use bmi::{calculate_bmi, home};
pub use health::health_check;
