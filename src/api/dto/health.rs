//! DTOs for the health check endpoint.

use serde::Serialize;

/// Health check response.
///
/// `issue` is only present in the degraded case.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub response_time_ms: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue: Option<String>,
}
