//! DTOs for the price calculation endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::pricing::Quote;

/// Request to price a model with a set of extras.
///
/// Both fields default when absent: a missing `model` resolves to nothing
/// in the catalog (yielding the "Model not found" envelope) and a missing
/// `extras` array prices as an empty selection.
#[derive(Debug, Deserialize)]
pub struct CalculateRequest {
    #[serde(default)]
    pub model: String,

    /// Extra ids to include. Unknown ids are silently ignored.
    #[serde(default)]
    pub extras: Vec<String>,
}

/// Calculation outcome, always returned with HTTP 200.
///
/// Uses untagged enum for cleaner JSON structure (no discriminator field);
/// callers distinguish the cases by the presence of the `error` field.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum CalculateResponse {
    Priced {
        model: String,
        base_price: u32,
        extras_total: u32,
        total: u32,
        discount: u32,
        final_price: u32,
    },
    Error {
        error: String,
    },
}

impl From<Quote> for CalculateResponse {
    fn from(quote: Quote) -> Self {
        Self::Priced {
            model: quote.model_name,
            base_price: quote.base_price,
            extras_total: quote.extras_total,
            total: quote.total,
            discount: quote.discount,
            final_price: quote.final_price,
        }
    }
}

impl CalculateResponse {
    /// The envelope returned for an unknown model id.
    pub fn model_not_found() -> Self {
        Self::Error {
            error: "Model not found".to_string(),
        }
    }
}
