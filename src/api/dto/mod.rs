//! Data Transfer Objects for API request/response serialization.

pub mod calculate;
pub mod health;
