//! HTTP server initialization and runtime setup.
//!
//! Builds the shared state from configuration and runs the Axum server
//! until a shutdown signal arrives.

use crate::config::Config;
use crate::domain::catalog::Catalog;
use crate::infrastructure::webhook::WebhookNotifier;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The webhook HTTP client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let catalog = Arc::new(Catalog::builtin());
    let notifier = Arc::new(WebhookNotifier::new(config.alert_webhook.clone())?);

    if config.slow_mode {
        tracing::warn!(
            delay_secs = config.slow_delay_secs,
            "slow mode enabled, responses will be delayed"
        );
    }

    let state = AppState {
        catalog,
        notifier,
        slow_mode: config.slow_mode,
        slow_delay: config.slow_delay(),
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves when ctrl-c is received.
async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("Shutdown signal received");
    }
}
