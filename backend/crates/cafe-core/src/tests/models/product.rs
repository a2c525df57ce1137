use crate::{Language, Product, RoastLevel};

use std::str::FromStr;

#[test]
fn test_product_new_defaults() {
    let product = Product::new(
        "origen-250g".to_string(),
        "Café de Origen".to_string(),
        "Single Origin Coffee".to_string(),
        3500,
    );

    assert!(product.active);
    assert_eq!(product.roast_level, RoastLevel::Medium);
    assert_eq!(product.version, 1);
    assert_eq!(product.name(Language::Es), "Café de Origen");
    assert_eq!(product.name(Language::En), "Single Origin Coffee");
    assert_eq!(product.description(Language::En), None);
}

#[test]
fn test_product_slug_validation() {
    assert!(Product::is_valid_slug("origen-250g"));
    assert!(!Product::is_valid_slug("Origen"));
    assert!(!Product::is_valid_slug("origen 250g"));
    assert!(!Product::is_valid_slug(""));
}

#[test]
fn test_roast_level_round_trips_through_str() {
    for level in [RoastLevel::Light, RoastLevel::Medium, RoastLevel::Dark] {
        assert_eq!(RoastLevel::from_str(level.as_str()).unwrap(), level);
    }
    assert!(RoastLevel::from_str("espresso").is_err());
}
