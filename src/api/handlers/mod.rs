//! HTTP request handlers for API endpoints.

pub mod calculate;
pub mod health;

pub use calculate::calculate_handler;
pub use health::health_handler;
