//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. There is no ambient global state: the loaded [`Config`] is passed
//! into [`crate::server::run`] explicitly.
//!
//! ## Variables
//!
//! All variables are optional:
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8002`)
//! - `SLOW_MODE` - Enable artificial latency: `true`/`1` (default: enabled)
//! - `SLOW_DELAY` - Artificial delay in seconds (default: `4.5`)
//! - `ALERT_WEBHOOK` - URL notified after each slow calculation
//!   (default: `http://host.docker.internal:8099/webhook/slow-response`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::Result;
use std::env;
use std::time::Duration;

/// Default webhook target, matching the docker-compose demo topology.
const DEFAULT_ALERT_WEBHOOK: &str = "http://host.docker.internal:8099/webhook/slow-response";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// When true, `/health` and `/api/calculate` suspend for
    /// [`slow_delay_secs`](Self::slow_delay_secs) before responding.
    pub slow_mode: bool,
    /// Artificial delay in seconds (`SLOW_DELAY`, default: 4.5).
    pub slow_delay_secs: f64,
    /// Webhook URL notified (best-effort) after each slow calculation.
    pub alert_webhook: String,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8002".to_string());

        // Slow mode defaults to enabled: the service exists to demo a
        // degraded dependency.
        let slow_mode = env::var("SLOW_MODE")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(true);

        let slow_delay_secs = env::var("SLOW_DELAY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(4.5);

        let alert_webhook =
            env::var("ALERT_WEBHOOK").unwrap_or_else(|_| DEFAULT_ALERT_WEBHOOK.to_string());

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Self {
            listen_addr,
            slow_mode,
            slow_delay_secs,
            alert_webhook,
            log_level,
            log_format,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `slow_delay_secs` is negative, not finite, or over 300 seconds
    /// - `alert_webhook` is not an http(s) URL
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not in `host:port` form
    pub fn validate(&self) -> Result<()> {
        if !self.slow_delay_secs.is_finite() || self.slow_delay_secs < 0.0 {
            anyhow::bail!(
                "SLOW_DELAY must be a non-negative number of seconds, got {}",
                self.slow_delay_secs
            );
        }

        if self.slow_delay_secs > 300.0 {
            anyhow::bail!(
                "SLOW_DELAY is too large (max: 300 seconds), got {}",
                self.slow_delay_secs
            );
        }

        if !self.alert_webhook.starts_with("http://") && !self.alert_webhook.starts_with("https://")
        {
            anyhow::bail!(
                "ALERT_WEBHOOK must start with 'http://' or 'https://', got '{}'",
                self.alert_webhook
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        Ok(())
    }

    /// Returns the artificial delay as a [`Duration`].
    pub fn slow_delay(&self) -> Duration {
        Duration::from_secs_f64(self.slow_delay_secs)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        if self.slow_mode {
            tracing::info!("  Slow mode: enabled ({}s delay)", self.slow_delay_secs);
        } else {
            tracing::info!("  Slow mode: disabled");
        }
        tracing::info!("  Alert webhook: {}", self.alert_webhook);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn base_config() -> Config {
        Config {
            listen_addr: "0.0.0.0:8002".to_string(),
            slow_mode: true,
            slow_delay_secs: 4.5,
            alert_webhook: DEFAULT_ALERT_WEBHOOK.to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = base_config();
        assert!(config.validate().is_ok());

        // Negative delay
        config.slow_delay_secs = -1.0;
        assert!(config.validate().is_err());

        // Excessive delay
        config.slow_delay_secs = 301.0;
        assert!(config.validate().is_err());

        config.slow_delay_secs = 0.0;
        assert!(config.validate().is_ok());

        // Invalid webhook scheme
        config.alert_webhook = "ftp://example.com/hook".to_string();
        assert!(config.validate().is_err());

        config.alert_webhook = "https://example.com/hook".to_string();
        assert!(config.validate().is_ok());

        // Invalid log format
        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        // Invalid listen address
        config.listen_addr = "8002".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_slow_delay_duration() {
        let mut config = base_config();
        assert_eq!(config.slow_delay(), Duration::from_millis(4500));

        config.slow_delay_secs = 0.25;
        assert_eq!(config.slow_delay(), Duration::from_millis(250));
    }

    #[test]
    #[serial]
    fn test_defaults_when_env_is_empty() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("SLOW_MODE");
            env::remove_var("SLOW_DELAY");
            env::remove_var("ALERT_WEBHOOK");
        }

        let config = Config::from_env();

        assert_eq!(config.listen_addr, "0.0.0.0:8002");
        assert!(config.slow_mode);
        assert_eq!(config.slow_delay_secs, 4.5);
        assert_eq!(config.alert_webhook, DEFAULT_ALERT_WEBHOOK);
    }

    #[test]
    #[serial]
    fn test_slow_mode_parsing() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("SLOW_MODE", "false");
        }
        assert!(!Config::from_env().slow_mode);

        unsafe {
            env::set_var("SLOW_MODE", "TRUE");
        }
        assert!(Config::from_env().slow_mode);

        unsafe {
            env::set_var("SLOW_MODE", "1");
        }
        assert!(Config::from_env().slow_mode);

        unsafe {
            env::set_var("SLOW_MODE", "off");
        }
        assert!(!Config::from_env().slow_mode);

        // Cleanup
        unsafe {
            env::remove_var("SLOW_MODE");
        }
    }

    #[test]
    #[serial]
    fn test_slow_delay_parsing() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("SLOW_DELAY", "1.25");
        }
        assert_eq!(Config::from_env().slow_delay_secs, 1.25);

        // Unparseable values fall back to the default
        unsafe {
            env::set_var("SLOW_DELAY", "soon");
        }
        assert_eq!(Config::from_env().slow_delay_secs, 4.5);

        // Cleanup
        unsafe {
            env::remove_var("SLOW_DELAY");
        }
    }
}
