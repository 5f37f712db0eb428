//! In-memory vehicle catalog: models and optional extras.

use serde::Serialize;

/// A vehicle model offered by the configurator.
#[derive(Debug, Clone, Serialize)]
pub struct Model {
    pub id: String,
    pub name: String,
    /// Base price in whole currency units (CZK).
    pub base_price: u32,
    /// Glyph shown on the model card.
    pub image: String,
}

/// An optional priced add-on selectable alongside a model.
#[derive(Debug, Clone, Serialize)]
pub struct Extra {
    pub id: String,
    pub name: String,
    pub price: u32,
}

/// Read-only lookup tables for models and extras.
///
/// Constructed once at startup and shared across requests. Ids are unique
/// within each table; "not found" is a normal outcome, not an error.
#[derive(Debug, Clone)]
pub struct Catalog {
    models: Vec<Model>,
    extras: Vec<Extra>,
}

impl Catalog {
    /// Builds the demo catalog.
    pub fn builtin() -> Self {
        let models = [
            ("fabia", "Fabia", 419_900, "\u{1F697}"),
            ("scala", "Scala", 519_900, "\u{1F699}"),
            ("octavia", "Octavia", 689_900, "\u{1F698}"),
            ("superb", "Superb", 949_900, "\u{1F696}"),
            ("kamiq", "Kamiq", 569_900, "\u{1F690}"),
            ("karoq", "Karoq", 749_900, "\u{1F699}"),
            ("kodiaq", "Kodiaq", 979_900, "\u{1F690}"),
            ("enyaq", "Enyaq iV", 1_149_900, "\u{26A1}"),
        ]
        .into_iter()
        .map(|(id, name, base_price, image)| Model {
            id: id.to_string(),
            name: name.to_string(),
            base_price,
            image: image.to_string(),
        })
        .collect();

        let extras = [
            ("nav", "Navigace Columbus", 35_000),
            ("leather", "Kožené sedačky", 65_000),
            ("sunroof", "Panoramatická střecha", 45_000),
            ("sound", "Canton Sound System", 28_000),
            ("assist", "Travel Assist", 32_000),
            ("matrix", "Matrix LED světla", 25_000),
        ]
        .into_iter()
        .map(|(id, name, price)| Extra {
            id: id.to_string(),
            name: name.to_string(),
            price,
        })
        .collect();

        Self { models, extras }
    }

    /// Looks up a model by id.
    pub fn find_model(&self, id: &str) -> Option<&Model> {
        self.models.iter().find(|m| m.id == id)
    }

    /// Looks up an extra by id.
    pub fn find_extra(&self, id: &str) -> Option<&Extra> {
        self.extras.iter().find(|e| e.id == id)
    }

    pub fn models(&self) -> &[Model] {
        &self.models
    }

    pub fn extras(&self) -> &[Extra] {
        &self.extras
    }
}
