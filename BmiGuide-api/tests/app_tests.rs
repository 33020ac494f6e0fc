use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use bmi_guide_api::api::{create_application, create_application_with_config};
use bmi_guide_api::config::AppConfig;

// Initialize tracing once for all tests
static INIT: std::sync::Once = std::sync::Once::new();
fn initialize() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("info")
            .with_test_writer()
            .try_init();
    });
}

// Helper function to get the body of a response as text
async fn body_text(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn content_type(response: &axum::response::Response) -> mime::Mime {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse().ok())
        .expect("response should carry a content type")
}

async fn post_form(body: &str) -> axum::response::Response {
    create_application()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/calculate-bmi")
                .header(header::CONTENT_TYPE, mime::APPLICATION_WWW_FORM_URLENCODED.as_ref())
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

#[tokio::test]
async fn test_home_page_serves_form() {
    initialize();

    let response = create_application()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content_type(&response), mime::TEXT_HTML_UTF_8);

    let body = body_text(response).await;
    assert!(body.contains("<title>BMI Calculator</title>"));
    assert!(body.contains(r#"action="/calculate-bmi""#));
}

#[tokio::test]
async fn test_normal_weight_result() {
    initialize();

    let response = post_form("weight=70&height=1.75").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content_type(&response), mime::TEXT_HTML_UTF_8);

    let body = body_text(response).await;
    assert!(body.contains("<title>BMI Result</title>"));
    assert!(body.contains(r#"<div class="bmi-value">22.9</div>"#));
    assert!(body.contains("Normal Weight"));
    assert!(body.contains("Maintain your current healthy lifestyle"));
}

#[tokio::test]
async fn test_underweight_result() {
    initialize();

    let body = body_text(post_form("weight=50&height=1.8").await).await;
    assert!(body.contains(r#"<div class="bmi-value">15.4</div>"#));
    assert!(body.contains("category-underweight"));
}

#[tokio::test]
async fn test_rounded_boundary_is_overweight() {
    initialize();

    let body = body_text(post_form("weight=76.44&height=1.75").await).await;
    assert!(body.contains(r#"<div class="bmi-value">25.0</div>"#));
    assert!(body.contains("category-overweight"));
}

#[tokio::test]
async fn test_invalid_input_renders_error_page_with_ok_status() {
    initialize();

    for form in [
        "weight=70&height=0",
        "weight=70&height=-1.75",
        "weight=70&height=3.0",
        "weight=abc&height=1.75",
        "weight=&height=1.75",
        "height=1.75",
    ] {
        let response = post_form(form).await;
        assert_eq!(response.status(), StatusCode::OK, "form {}", form);

        let body = body_text(response).await;
        assert!(body.contains("<title>Error - BMI Calculator</title>"), "form {}", form);
        assert!(body.contains("Try Again"), "form {}", form);
    }
}

#[tokio::test]
async fn test_non_form_body_renders_error_page() {
    initialize();

    let response = create_application()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/calculate-bmi")
                .header(header::CONTENT_TYPE, mime::APPLICATION_JSON.as_ref())
                .body(Body::from(r#"{"weight":70,"height":1.75}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Invalid Input"));
}

#[tokio::test]
async fn test_heavy_weight_is_not_rejected() {
    initialize();

    let body = body_text(post_form("weight=350&height=1.9").await).await;
    assert!(body.contains("<title>BMI Result</title>"));
    assert!(body.contains("category-obese"));
}

#[tokio::test]
async fn test_overflowing_weight_renders_error_page() {
    initialize();

    let response = post_form("weight=1e308&height=0.5").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("<title>Error - BMI Calculator</title>"));
    assert!(body.contains("BMI could not be computed for these values"));
    assert!(!body.contains("inf</div>"));
}

#[tokio::test]
async fn test_health_check() {
    initialize();

    let response = create_application()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let health: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(health["status"], "ok");
    assert_eq!(health["components"]["calculator"]["status"], "ok");
    assert!(health["version"].is_string());
    assert_eq!(health["environment"], "development");
}

#[tokio::test]
async fn test_health_check_reports_configured_environment() {
    initialize();

    let config = AppConfig {
        environment: "staging".to_string(),
        ..AppConfig::default()
    };

    let response = create_application_with_config(&config)
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let health: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(health["environment"], "staging");
}

#[tokio::test]
async fn test_openapi_documentation_available() {
    initialize();

    let response = create_application()
        .oneshot(
            Request::builder()
                .uri("/api-docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let doc: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert!(doc["paths"]["/calculate-bmi"]["post"].is_object());
}
