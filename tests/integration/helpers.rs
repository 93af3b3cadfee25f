//! Shared test helpers for integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use parkhub_api::{AppState, build_router};
use parkhub_core::config::AppConfig;
use parkhub_service::ParkingService;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application with an empty, uninitialized lot
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a test application from an explicit config
    pub fn with_config(config: AppConfig) -> Self {
        let parking_service =
            ParkingService::with_tracing(&config.lot).expect("Failed to build parking service");
        let state = AppState::new(config.clone(), parking_service);

        Self {
            router: build_router(state),
            config,
        }
    }

    /// Create a test application whose lot already has `slots` slots
    pub async fn with_slots(slots: i64) -> Self {
        let app = Self::new();
        let response = app
            .request(
                "POST",
                "/parking/parking_lot",
                Some(serde_json::json!({ "no_of_slot": slots })),
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Initialize failed: {:?}",
            response.body
        );
        app
    }

    /// Park a car and return the allocated slot
    pub async fn park(&self, registration: &str, color: &str) -> u64 {
        let response = self
            .request(
                "POST",
                "/parking/park",
                Some(serde_json::json!({
                    "car_reg_no": registration,
                    "car_color": color,
                })),
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Park failed: {:?}",
            response.body
        );

        response
            .body
            .get("allocated_slot_number")
            .and_then(|v| v.as_u64())
            .expect("No allocated_slot_number in park response")
    }

    /// Make an HTTP request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        self.raw_request(method, path, body_str).await
    }

    /// Make an HTTP request with a literal body
    pub async fn raw_request(&self, method: &str, path: &str, body: String) -> TestResponse {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// The `message` field of an error body
    pub fn message(&self) -> &str {
        self.body
            .get("message")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
    }

    /// The `error` code of an error body
    pub fn error_code(&self) -> &str {
        self.body
            .get("error")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
    }
}
