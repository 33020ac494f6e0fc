use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use bmi_guide_domain::entities::MeasurementInput;

/// Form fields submitted by the calculator page
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CalculateBmiForm {
    /// Weight in kilograms
    #[schema(example = "70.5")]
    pub weight: Option<String>,

    /// Height in meters
    #[schema(example = "1.75")]
    pub height: Option<String>,
}

impl From<CalculateBmiForm> for MeasurementInput {
    fn from(form: CalculateBmiForm) -> Self {
        MeasurementInput {
            weight: form.weight,
            height: form.height,
        }
    }
}
