//! # Pricing Service
//!
//! A demo vehicle pricing and configurator service built with Axum.
//!
//! The service exposes a small HTTP surface over a fixed in-memory catalog:
//!
//! - `GET /` - Interactive configurator page (model + extras selection)
//! - `GET /health` - Liveness probe; reports degraded status under slow mode
//! - `POST /api/calculate` - Computes a total price for a model and extras
//!
//! ## Slow mode
//!
//! When enabled (the default), latency-sensitive endpoints suspend for a
//! configured delay before responding, simulating a degraded service for
//! incident-monitoring demos. Each slow calculation also fires a
//! best-effort webhook notification via [`infrastructure::webhook`].
//!
//! ## Quick Start
//!
//! ```bash
//! # All variables are optional; defaults match the demo scenario
//! export SLOW_MODE=true
//! export SLOW_DELAY=4.5
//! export ALERT_WEBHOOK="http://host.docker.internal:8099/webhook/slow-response"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod domain;
pub mod infrastructure;
pub mod state;
pub mod web;

pub mod config;
pub mod server;

pub mod routes;

pub use state::AppState;

/// Service name reported by the health endpoint.
pub const SERVICE_NAME: &str = "pricing-service";
