//! Handler for the price calculation endpoint.

use axum::{Json, extract::State};

use crate::api::dto::calculate::{CalculateRequest, CalculateResponse};
use crate::domain::pricing;
use crate::state::AppState;

/// Computes the total price for a model plus selected extras.
///
/// # Endpoint
///
/// `POST /api/calculate`
///
/// # Request Body
///
/// ```json
/// { "model": "octavia", "extras": ["nav", "leather"] }
/// ```
///
/// # Response
///
/// Always HTTP 200. On success:
///
/// ```json
/// {
///   "model": "Octavia",
///   "base_price": 689900,
///   "extras_total": 100000,
///   "total": 789900,
///   "discount": 0,
///   "final_price": 789900
/// }
/// ```
///
/// For an unknown model id the same envelope carries an error field
/// instead: `{"error": "Model not found"}`.
///
/// # Slow mode
///
/// When slow mode is enabled the handler suspends for the configured delay
/// first, then schedules the webhook notification as a detached task. The
/// notification fires for every slow request, even when the model does not
/// resolve, and the response never waits on its delivery.
pub async fn calculate_handler(
    State(state): State<AppState>,
    Json(payload): Json<CalculateRequest>,
) -> Json<CalculateResponse> {
    if state.slow_mode {
        tokio::time::sleep(state.slow_delay).await;

        let notifier = state.notifier.clone();
        tokio::spawn(async move {
            notifier.notify_slow_response().await;
        });
    }

    let Some(quote) = pricing::quote(&state.catalog, &payload.model, &payload.extras) else {
        tracing::debug!(model = %payload.model, "calculation requested for unknown model");
        return Json(CalculateResponse::model_not_found());
    };

    Json(quote.into())
}
