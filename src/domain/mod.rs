//! Core domain types: the vehicle catalog and price calculation.
//!
//! The catalog is immutable and constructed once at startup; pricing is a
//! pure function over it. Nothing in this layer knows about HTTP.

pub mod catalog;
pub mod pricing;

pub use catalog::{Catalog, Extra, Model};
pub use pricing::Quote;
