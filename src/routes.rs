//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`               - Configurator page
//! - `GET  /health`         - Health check (delayed + degraded in slow mode)
//! - `POST /api/calculate`  - Price calculation
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::LatencyUnit;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .merge(web::routes::public_routes())
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state)
        .layer(trace_layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// Request/response tracing at `INFO` level, latencies in milliseconds.
///
/// With slow mode enabled the response log is the quickest place to see
/// the injected delay:
///
/// ```text
/// INFO request{method=POST uri=/api/calculate version=HTTP/1.1}: finished processing request latency=4500 ms status=200
/// ```
fn trace_layer()
-> TraceLayer<tower_http::classify::SharedClassifier<tower_http::classify::ServerErrorsAsFailures>>
{
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}
