//! Shared application state injected into all handlers.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::catalog::Catalog;
use crate::infrastructure::webhook::WebhookNotifier;

/// State shared across requests.
///
/// Everything here is read-only after startup, so handlers need no locking.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub notifier: Arc<WebhookNotifier>,
    /// When true, `/health` and `/api/calculate` suspend for `slow_delay`
    /// before responding.
    pub slow_mode: bool,
    pub slow_delay: Duration,
}
