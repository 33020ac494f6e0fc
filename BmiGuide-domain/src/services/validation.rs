use tracing::debug;
use validator::Validate;

use crate::entities::bmi::{MeasurementInput, Measurements, ValidationResult};
use crate::services::classification::calculate_bmi;

/// Check raw form values and turn them into [`Measurements`]
///
/// A value is rejected when it is absent, blank, not a finite number, or not
/// positive. Height must additionally lie within the realistic range declared
/// on [`Measurements`]. Weight has no enforced upper bound, but the pair is
/// rejected when its index overflows to a non-finite value.
pub fn validate_input(input: &MeasurementInput) -> ValidationResult {
    let weight_kg = match parse_positive("weight", input.weight.as_deref()) {
        Ok(value) => value,
        Err(reason) => return ValidationResult::Invalid(reason),
    };
    let height_m = match parse_positive("height", input.height.as_deref()) {
        Ok(value) => value,
        Err(reason) => return ValidationResult::Invalid(reason),
    };

    let measurements = Measurements { weight_kg, height_m };

    if let Err(validation_errors) = measurements.validate() {
        let error_message = validation_errors
            .field_errors()
            .iter()
            .map(|(field, errors)| {
                let error_msgs: Vec<String> = errors
                    .iter()
                    .map(|err| match &err.message {
                        Some(msg) => msg.to_string(),
                        None => format!("Invalid {}", field),
                    })
                    .collect();
                error_msgs.join(", ")
            })
            .collect::<Vec<String>>()
            .join("; ");

        debug!("Measurements rejected: {}", error_message);
        return ValidationResult::Invalid(error_message);
    }

    if !calculate_bmi(weight_kg, height_m).is_finite() {
        debug!("BMI overflowed for weight {:e} and height {}", weight_kg, height_m);
        return ValidationResult::Invalid("BMI could not be computed for these values".to_string());
    }

    ValidationResult::Valid(measurements)
}

fn parse_positive(field: &str, raw: Option<&str>) -> Result<f64, String> {
    let raw = raw.map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        return Err(format!("Missing {}", field));
    }

    let value: f64 = raw
        .parse()
        .map_err(|_| format!("{} must be a number", capitalize(field)))?;

    if !value.is_finite() {
        return Err(format!("{} must be a number", capitalize(field)));
    }
    if value <= 0.0 {
        return Err(format!("{} must be a positive number", capitalize(field)));
    }

    Ok(value)
}

fn capitalize(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invalid_reason(result: ValidationResult) -> String {
        match result {
            ValidationResult::Invalid(reason) => reason,
            ValidationResult::Valid(m) => panic!("expected invalid input, got {:?}", m),
        }
    }

    #[test]
    fn test_valid_input() {
        let result = validate_input(&MeasurementInput::new("70", "1.75"));
        assert_eq!(
            result,
            ValidationResult::Valid(Measurements { weight_kg: 70.0, height_m: 1.75 })
        );
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        let result = validate_input(&MeasurementInput::new(" 50 ", "1.8\n"));
        assert!(result.is_valid());
    }

    #[test]
    fn test_missing_fields() {
        let reason = invalid_reason(validate_input(&MeasurementInput::default()));
        assert!(reason.contains("weight"));

        let input = MeasurementInput { weight: Some("70".to_string()), height: None };
        let reason = invalid_reason(validate_input(&input));
        assert!(reason.contains("height"));

        let reason = invalid_reason(validate_input(&MeasurementInput::new("  ", "1.75")));
        assert!(reason.contains("weight"));
    }

    #[test]
    fn test_non_numeric_values() {
        let reason = invalid_reason(validate_input(&MeasurementInput::new("seventy", "1.75")));
        assert!(reason.contains("Weight must be a number"));

        assert!(!validate_input(&MeasurementInput::new("70kg", "1.75")).is_valid());
        assert!(!validate_input(&MeasurementInput::new("70", "NaN")).is_valid());
        assert!(!validate_input(&MeasurementInput::new("inf", "1.75")).is_valid());
    }

    #[test]
    fn test_zero_or_negative_height() {
        let reason = invalid_reason(validate_input(&MeasurementInput::new("70", "0")));
        assert!(reason.contains("Height must be a positive number"));

        assert!(!validate_input(&MeasurementInput::new("70", "-1.75")).is_valid());
    }

    #[test]
    fn test_zero_or_negative_weight() {
        assert!(!validate_input(&MeasurementInput::new("0", "1.75")).is_valid());
        assert!(!validate_input(&MeasurementInput::new("-70", "1.75")).is_valid());
    }

    #[test]
    fn test_height_out_of_range() {
        let reason = invalid_reason(validate_input(&MeasurementInput::new("70", "3.0")));
        assert!(reason.contains("between 0.5 and 2.5"));

        assert!(!validate_input(&MeasurementInput::new("70", "0.3")).is_valid());
    }

    #[test]
    fn test_overflowing_bmi_is_rejected() {
        let reason = invalid_reason(validate_input(&MeasurementInput::new("1e308", "0.5")));
        assert_eq!(reason, "BMI could not be computed for these values");
    }

    #[test]
    fn test_weight_above_advisory_limit_is_accepted() {
        let result = validate_input(&MeasurementInput::new("350", "1.9"));
        assert!(result.is_valid());
    }
}
