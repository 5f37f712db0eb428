#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use pricing_service::domain::catalog::Catalog;
use pricing_service::infrastructure::webhook::WebhookNotifier;
use pricing_service::state::AppState;

/// Webhook target on a reserved port; delivery fails fast and is swallowed.
pub const UNREACHABLE_WEBHOOK: &str = "http://127.0.0.1:9/webhook/slow-response";

/// Delay short enough to keep slow-mode tests fast but long enough to
/// measure.
pub const TEST_DELAY: Duration = Duration::from_millis(100);

pub fn create_test_state(slow_mode: bool, webhook_url: &str) -> AppState {
    AppState {
        catalog: Arc::new(Catalog::builtin()),
        notifier: Arc::new(WebhookNotifier::new(webhook_url.to_string()).unwrap()),
        slow_mode,
        slow_delay: TEST_DELAY,
    }
}

pub fn fast_state() -> AppState {
    create_test_state(false, UNREACHABLE_WEBHOOK)
}

pub fn slow_state() -> AppState {
    create_test_state(true, UNREACHABLE_WEBHOOK)
}
