//! Handler for the health check endpoint.

use axum::{Json, extract::State};
use rand::Rng;

use crate::SERVICE_NAME;
use crate::api::dto::health::HealthResponse;
use crate::state::AppState;

/// Returns service liveness status.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// With slow mode disabled, responds immediately:
///
/// ```json
/// { "status": "healthy", "service": "pricing-service", "response_time_ms": 34 }
/// ```
///
/// With slow mode enabled, the probe itself suspends for the configured
/// delay before reporting degraded status:
///
/// ```json
/// {
///   "status": "degraded",
///   "service": "pricing-service",
///   "response_time_ms": 4500,
///   "issue": "high_latency"
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    if state.slow_mode {
        tokio::time::sleep(state.slow_delay).await;

        return Json(HealthResponse {
            status: "degraded".to_string(),
            service: SERVICE_NAME.to_string(),
            response_time_ms: state.slow_delay.as_millis() as u64,
            issue: Some("high_latency".to_string()),
        });
    }

    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        response_time_ms: rand::rng().random_range(20..=50),
        issue: None,
    })
}
