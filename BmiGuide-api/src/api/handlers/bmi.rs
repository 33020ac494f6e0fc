use std::sync::Arc;

use axum::{
    extract::{rejection::FormRejection, Form, State},
    response::Html,
};
use tracing::{info, instrument, warn};

// Import domain entities and services
use bmi_guide_domain::entities::MeasurementInput;
use bmi_guide_domain::services::{create_default_bmi_service, BmiServiceError, BmiServiceTrait};

// Import our entities
use crate::entities::bmi::CalculateBmiForm;
use crate::views;

/// Service type for dependency injection
pub type BmiService = Arc<dyn BmiServiceTrait + Send + Sync>;

/// Create a default service for the handlers to use
pub fn create_service() -> BmiService {
    Arc::new(create_default_bmi_service())
}

/// Render the calculator form
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Calculator form page", body = String, content_type = "text/html")
    ),
    tag = "bmi"
)]
#[instrument]
pub async fn home() -> Html<String> {
    info!("Serving calculator form");
    Html(views::home_page())
}

/// Calculate the BMI of the submitted weight and height
///
/// Invalid input is answered with an error page, never with an error status.
#[utoipa::path(
    post,
    path = "/calculate-bmi",
    request_body(
        content = CalculateBmiForm,
        description = "Weight in kilograms and height in meters",
        content_type = "application/x-www-form-urlencoded"
    ),
    responses(
        (status = 200, description = "Result page, or error page when the input is rejected", body = String, content_type = "text/html")
    ),
    tag = "bmi"
)]
#[instrument(skip(service, form))]
pub async fn calculate_bmi(
    State(service): State<BmiService>,
    form: Result<Form<CalculateBmiForm>, FormRejection>,
) -> Html<String> {
    let input: MeasurementInput = match form {
        Ok(Form(form)) => form.into(),
        Err(rejection) => {
            warn!("Could not decode BMI form: {}", rejection);
            MeasurementInput::default()
        }
    };

    match service.evaluate(&input) {
        Ok(result) => {
            info!("BMI calculated: {:.1} ({})", result.value, result.category);
            Html(views::result_page(&result))
        }
        Err(BmiServiceError::InvalidInput(reason)) => {
            warn!("Rejected BMI input: {}", reason);
            Html(views::error_page(&reason))
        }
    }
}
