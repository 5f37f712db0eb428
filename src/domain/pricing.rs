//! Pure price calculation over the catalog.

use crate::domain::catalog::Catalog;

/// A computed price quote for one model plus selected extras.
///
/// `discount` is always zero and `final_price == total`; both fields exist
/// because the response contract exposes them separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub model_name: String,
    pub base_price: u32,
    pub extras_total: u32,
    pub total: u32,
    pub discount: u32,
    pub final_price: u32,
}

/// Computes a quote for `model_id` with the requested extras.
///
/// Returns `None` when the model is unknown. Extras are summed by iterating
/// the catalog table, so unknown ids contribute nothing and a duplicated id
/// in the request cannot be counted twice.
pub fn quote(catalog: &Catalog, model_id: &str, extras: &[String]) -> Option<Quote> {
    let model = catalog.find_model(model_id)?;

    let extras_total: u32 = catalog
        .extras()
        .iter()
        .filter(|e| extras.iter().any(|id| id == &e.id))
        .map(|e| e.price)
        .sum();

    let total = model.base_price + extras_total;

    Some(Quote {
        model_name: model.name.clone(),
        base_price: model.base_price,
        extras_total,
        total,
        discount: 0,
        final_price: total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_octavia_with_nav_and_leather() {
        let catalog = Catalog::builtin();

        let quote = quote(&catalog, "octavia", &ids(&["nav", "leather"])).unwrap();

        assert_eq!(quote.model_name, "Octavia");
        assert_eq!(quote.base_price, 689_900);
        assert_eq!(quote.extras_total, 100_000);
        assert_eq!(quote.total, 789_900);
        assert_eq!(quote.discount, 0);
        assert_eq!(quote.final_price, 789_900);
    }

    #[test]
    fn test_fabia_without_extras() {
        let catalog = Catalog::builtin();

        let quote = quote(&catalog, "fabia", &[]).unwrap();

        assert_eq!(quote.base_price, 419_900);
        assert_eq!(quote.extras_total, 0);
        assert_eq!(quote.final_price, 419_900);
    }

    #[test]
    fn test_unknown_extras_are_ignored() {
        let catalog = Catalog::builtin();

        let with_unknown = quote(&catalog, "octavia", &ids(&["nav", "doesnotexist"])).unwrap();
        let without = quote(&catalog, "octavia", &ids(&["nav"])).unwrap();

        assert_eq!(with_unknown, without);
    }

    #[test]
    fn test_duplicate_extras_counted_once() {
        let catalog = Catalog::builtin();

        let duplicated = quote(&catalog, "fabia", &ids(&["nav", "nav", "nav"])).unwrap();

        assert_eq!(duplicated.extras_total, 35_000);
    }

    #[test]
    fn test_unknown_model() {
        let catalog = Catalog::builtin();

        assert!(quote(&catalog, "trabant", &ids(&["nav"])).is_none());
        assert!(quote(&catalog, "", &[]).is_none());
    }

    #[test]
    fn test_all_extras_sum() {
        let catalog = Catalog::builtin();
        let all: Vec<String> = catalog.extras().iter().map(|e| e.id.clone()).collect();

        let quote = quote(&catalog, "enyaq", &all).unwrap();

        assert_eq!(quote.extras_total, 230_000);
        assert_eq!(quote.final_price, 1_149_900 + 230_000);
    }
}
