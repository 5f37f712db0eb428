//! Template rendering handlers for web pages.

pub mod configurator;

pub use configurator::configurator_handler;
