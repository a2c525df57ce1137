use crate::{Farmer, Language};

use chrono::Utc;

#[test]
fn test_farmer_new() {
    let farmer = Farmer::new("JUAN".to_string(), "Juan Valdez".to_string());

    assert_eq!(farmer.code, "JUAN");
    assert_eq!(farmer.name, "Juan Valdez");
    assert_eq!(farmer.version, 1);
    assert!(!farmer.is_deleted());
}

#[test]
fn test_farmer_is_deleted() {
    let mut farmer = Farmer::new("JUAN".to_string(), "Juan".to_string());
    farmer.deleted_at = Some(Utc::now());
    assert!(farmer.is_deleted());
}

#[test]
fn test_farmer_bio_by_language() {
    let mut farmer = Farmer::new("ANA".to_string(), "Ana".to_string());
    farmer.bio_es = Some("Caficultora de tercera generación".to_string());

    assert_eq!(
        farmer.bio(Language::En),
        Some("Caficultora de tercera generación")
    );

    farmer.bio_en = Some("Third-generation grower".to_string());
    assert_eq!(farmer.bio(Language::En), Some("Third-generation grower"));
}

#[test]
fn test_farmer_code_validation() {
    assert!(Farmer::is_valid_code("JUAN"));
    assert!(Farmer::is_valid_code("FINCA-2"));
    assert!(!Farmer::is_valid_code("juan"));
    assert!(!Farmer::is_valid_code(""));
    assert!(!Farmer::is_valid_code("JUAN 1"));
}
