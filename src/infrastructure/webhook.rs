//! Best-effort webhook notification for slow responses.

use anyhow::Result;
use std::time::Duration;

/// Timeout for a single webhook delivery attempt.
const DELIVERY_TIMEOUT: Duration = Duration::from_secs(2);

/// Fire-and-forget notifier for a monitoring webhook.
///
/// Delivery is at-most-once: there are no retries, and every failure
/// (connect error, timeout, non-2xx status) is swallowed. Callers spawn
/// [`notify_slow_response`](Self::notify_slow_response) as a detached task
/// so the client response never waits on it.
#[derive(Debug, Clone)]
pub struct WebhookNotifier {
    client: reqwest::Client,
    webhook_url: String,
}

impl WebhookNotifier {
    /// Creates a notifier targeting `webhook_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(webhook_url: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(DELIVERY_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            webhook_url,
        })
    }

    /// POSTs to the configured webhook, discarding any failure.
    ///
    /// This never returns an error; the request outcome is only visible at
    /// debug log level.
    pub async fn notify_slow_response(&self) {
        match self.client.post(&self.webhook_url).send().await {
            Ok(response) if response.status().is_success() => {
                tracing::debug!(url = %self.webhook_url, "slow-response webhook delivered");
            }
            Ok(response) => {
                tracing::debug!(
                    url = %self.webhook_url,
                    status = %response.status(),
                    "slow-response webhook rejected"
                );
            }
            Err(e) => {
                tracing::debug!(url = %self.webhook_url, error = %e, "slow-response webhook failed");
            }
        }
    }
}
