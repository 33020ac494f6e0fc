use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::services::classification::{categorize_bmi, round_to_tenth};

/// Lowest height accepted by the calculator, in meters
pub const MIN_HEIGHT_M: f64 = 0.5;

/// Highest height accepted by the calculator, in meters
pub const MAX_HEIGHT_M: f64 = 2.5;

/// Weight ceiling shown to users and checked by the form script.
/// The server does not reject weights above it.
pub const ADVISORY_MAX_WEIGHT_KG: f64 = 300.0;

/// Raw weight and height exactly as they were submitted
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeasurementInput {
    /// Weight in kilograms, unparsed
    pub weight: Option<String>,

    /// Height in meters, unparsed
    pub height: Option<String>,
}

impl MeasurementInput {
    /// Build an input pair from string slices
    pub fn new(weight: impl Into<String>, height: impl Into<String>) -> Self {
        Self {
            weight: Some(weight.into()),
            height: Some(height.into()),
        }
    }
}

/// Parsed measurements that passed every range rule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct Measurements {
    /// Weight in kilograms
    pub weight_kg: f64,

    /// Height in meters
    #[validate(range(min = 0.5, max = 2.5, message = "Height must be between 0.5 and 2.5 meters"))]
    pub height_m: f64,
}

/// Outcome of checking a [`MeasurementInput`]
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult {
    /// Both values parsed and are within bounds
    Valid(Measurements),

    /// At least one value was rejected; carries the reason
    Invalid(String),
}

impl ValidationResult {
    /// Whether the input was accepted
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid(_))
    }
}

/// BMI category based on the rounded index
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,

    /// BMI from 18.5 up to, but excluding, 25
    Normal,

    /// BMI from 25 up to, but excluding, 30
    Overweight,

    /// BMI of 30 or more
    Obese,
}

impl BmiCategory {
    /// Label shown on the result page
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal Weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    /// Stylesheet class of the result box
    pub fn css_class(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "category-underweight",
            BmiCategory::Normal => "category-normal",
            BmiCategory::Overweight => "category-overweight",
            BmiCategory::Obese => "category-obese",
        }
    }

    /// Static health recommendation for the category
    pub fn recommendation(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => {
                "Consider consulting a nutritionist to develop a healthy weight gain plan."
            }
            BmiCategory::Normal => {
                "Great! Maintain your current healthy lifestyle with balanced diet and regular exercise."
            }
            BmiCategory::Overweight => {
                "Consider increasing physical activity and adjusting your diet. Small changes can make a big difference!"
            }
            BmiCategory::Obese => {
                "We recommend consulting with a healthcare provider for guidance on weight management."
            }
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A computed BMI together with its classification
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BmiResult {
    /// BMI rounded to one decimal place
    pub value: f64,

    /// Category of the rounded value
    pub category: BmiCategory,

    /// Recommendation attached to the category
    pub recommendation: &'static str,

    /// Weight the index was computed from, in kilograms
    pub weight_kg: f64,

    /// Height the index was computed from, in meters
    pub height_m: f64,
}

impl BmiResult {
    /// Round a raw index and classify the rounded value
    pub fn from_raw(raw_bmi: f64, measurements: Measurements) -> Self {
        let value = round_to_tenth(raw_bmi);
        let category = categorize_bmi(value);
        Self {
            value,
            category,
            recommendation: category.recommendation(),
            weight_kg: measurements.weight_kg,
            height_m: measurements.height_m,
        }
    }
}
