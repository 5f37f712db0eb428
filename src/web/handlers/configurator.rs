//! Configurator page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};

use crate::state::AppState;

/// Template for the configurator page.
///
/// Renders `templates/configurator.html` with the full catalog serialized
/// as JSON and embedded into the page script, so model selection, extras
/// toggling and the price preview all run client-side.
#[derive(Template, WebTemplate)]
#[template(path = "configurator.html")]
pub struct ConfiguratorTemplate {
    /// Catalog models as a JSON array literal.
    pub models_json: String,
    /// Catalog extras as a JSON array literal.
    pub extras_json: String,
}

/// Renders the configurator page.
///
/// # Endpoint
///
/// `GET /`
pub async fn configurator_handler(State(state): State<AppState>) -> impl IntoResponse {
    ConfiguratorTemplate {
        models_json: catalog_json(state.catalog.models()),
        extras_json: catalog_json(state.catalog.extras()),
    }
}

/// Serializes a catalog table to a JSON array literal.
///
/// Serialization of these plain structs cannot fail; the empty-array
/// fallback keeps the page renderable regardless.
fn catalog_json<T: serde::Serialize>(items: &[T]) -> String {
    serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
}
