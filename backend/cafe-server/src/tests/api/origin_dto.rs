use crate::OriginDto;

use cafe_core::{Batch, Farm, Farmer, Language, Product};

fn fixtures() -> (Batch, Farmer, Farm, Product) {
    let mut farmer = Farmer::new("JUAN".to_string(), "Juan Pérez".to_string());
    farmer.region = Some("Huila".to_string());
    farmer.bio_es = Some("Caficultor de tercera generación".to_string());
    farmer.bio_en = Some("Third-generation grower".to_string());

    let mut farm = Farm::new(farmer.id, "La Esperanza".to_string());
    farm.altitude_masl = Some(1750);

    let product = Product::new(
        "origen-huila".to_string(),
        "Origen Huila".to_string(),
        "Huila Origin".to_string(),
        42000,
    );

    let mut batch = Batch::new("JUAN-001".to_string(), farmer.id);
    batch.farm_id = Some(farm.id);
    batch.product_id = Some(product.id);
    batch.variety = Some("Caturra".to_string());

    (batch, farmer, farm, product)
}

#[test]
fn test_origin_localizes_bio_and_product_name() {
    let (batch, farmer, farm, product) = fixtures();

    let es = OriginDto::build(&batch, Some(&farmer), Some(&farm), Some(&product), Language::Es);
    let en = OriginDto::build(&batch, Some(&farmer), Some(&farm), Some(&product), Language::En);

    assert_eq!(es.farmer_bio.as_deref(), Some("Caficultor de tercera generación"));
    assert_eq!(en.farmer_bio.as_deref(), Some("Third-generation grower"));
    assert_eq!(es.product_name.as_deref(), Some("Origen Huila"));
    assert_eq!(en.product_name.as_deref(), Some("Huila Origin"));
    assert_eq!(en.farm_name.as_deref(), Some("La Esperanza"));
    assert_eq!(en.variety.as_deref(), Some("Caturra"));
}

#[test]
fn test_origin_altitude_prefers_batch_over_farm() {
    let (mut batch, farmer, farm, product) = fixtures();

    let from_farm = OriginDto::build(&batch, Some(&farmer), Some(&farm), Some(&product), Language::Es);
    batch.altitude_masl = Some(1900);
    let from_batch = OriginDto::build(&batch, Some(&farmer), Some(&farm), Some(&product), Language::Es);

    assert_eq!(from_farm.altitude_masl, Some(1750));
    assert_eq!(from_batch.altitude_masl, Some(1900));
}

#[test]
fn test_origin_without_references_is_mostly_empty() {
    let (batch, ..) = fixtures();

    let origin = OriginDto::build(&batch, None, None, None, Language::Es);

    assert_eq!(origin.farmer_name, None);
    assert_eq!(origin.farm_name, None);
    assert_eq!(origin.product_slug, None);
    assert_eq!(origin.variety.as_deref(), Some("Caturra"));
}
