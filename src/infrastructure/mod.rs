//! Integrations with external systems.
//!
//! Currently only the outbound slow-response webhook.

pub mod webhook;

pub use webhook::WebhookNotifier;
