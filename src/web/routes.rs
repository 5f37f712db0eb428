//! Web page route configuration.

use crate::state::AppState;
use crate::web::handlers::configurator_handler;
use axum::{Router, routing::get};

/// Public page routes without authentication.
///
/// # Endpoints
///
/// - `GET /` - Configurator page
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/", get(configurator_handler))
}
