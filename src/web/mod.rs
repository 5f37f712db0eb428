//! Web layer for the browser-based configurator.
//!
//! Serves the single interactive page. Uses Askama templates for
//! server-side rendering; all interactivity runs client-side against the
//! catalog data embedded into the page.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod routes;
