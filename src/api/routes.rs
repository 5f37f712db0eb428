//! API route configuration.

use crate::api::handlers::calculate_handler;
use crate::state::AppState;
use axum::{Router, routing::post};

/// Routes nested under `/api`.
///
/// # Endpoints
///
/// - `POST /calculate` - Price a model with selected extras
pub fn api_routes() -> Router<AppState> {
    Router::new().route("/calculate", post(calculate_handler))
}
