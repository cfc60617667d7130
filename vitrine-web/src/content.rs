//! Embedded content catalog.
//!
//! All copy text shown by the showcase lives in one JSON document compiled
//! into the binary; the core crates never hardcode presentation copy.

use std::sync::OnceLock;

use vitrine_common::catalog::Catalog;

const CATALOG_JSON: &str = include_str!("../content/catalog.json");

static CATALOG: OnceLock<Catalog> = OnceLock::new();

/// The showcase copy text, parsed and validated once on first access
pub fn catalog() -> &'static Catalog {
    CATALOG.get_or_init(|| Catalog::from_json(CATALOG_JSON).expect("embedded catalog is valid"))
}

#[cfg(test)]
mod tests {
    use vitrine_common::Platform;

    use super::*;

    #[test]
    fn embedded_catalog_parses_and_validates() {
        catalog().validate().unwrap();
    }

    #[test]
    fn screen_inventory_is_stable() {
        let catalog = catalog();
        assert_eq!(catalog.screens(Platform::Ios), ["home", "shop", "profile"]);
        assert_eq!(
            catalog.screens(Platform::Android),
            ["home", "products", "settings"]
        );
        assert_eq!(catalog.screens(Platform::Web), ["dashboard", "features"]);
    }

    #[test]
    fn feature_table_matches_the_ios_mockup() {
        let catalog = catalog();
        for label in ["Shop", "Favorites", "Profile", "Settings"] {
            let detail = catalog.feature_detail(label).unwrap();
            assert!(!detail.trim().is_empty());
        }
        assert_eq!(catalog.features.len(), 4);
    }

    #[test]
    fn marketing_copy_is_populated() {
        let catalog = catalog();
        assert!(!catalog.products.is_empty());
        assert!(!catalog.cards.is_empty());
        assert!(!catalog.tech.is_empty());

        for product in &catalog.products {
            assert!(!product.name.is_empty());
            assert!(product.price.starts_with('$'));
        }
        for card in &catalog.cards {
            assert!(!card.icon.is_empty());
            assert!(!card.title.is_empty());
        }
        for layer in &catalog.tech {
            assert!(!layer.items.is_empty());
        }
    }

    #[test]
    fn every_button_has_an_action_script() {
        let catalog = catalog();
        for id in ["welcome", "demo", "download", "pwa", "schedule"] {
            let script = catalog.action(id).unwrap();
            assert!(!script.is_empty(), "empty script for {id}");
            for step in script {
                assert!(!step.message.trim().is_empty());
                assert!(step.delay_ms <= 5_000);
            }
        }
    }
}
