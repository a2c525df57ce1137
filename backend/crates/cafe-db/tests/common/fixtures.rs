#![allow(dead_code)]

use cafe_core::{Batch, Farm, Farmer, Product, RoastLevel};

use chrono::NaiveDate;
use uuid::Uuid;

pub fn create_test_farmer(code: &str) -> Farmer {
    let mut farmer = Farmer::new(code.to_string(), format!("Farmer {}", code));
    farmer.region = Some("Huila".to_string());
    farmer.bio_es = Some("Caficultor de tercera generación".to_string());
    farmer.bio_en = Some("Third-generation coffee grower".to_string());
    farmer
}

pub fn create_test_farm(farmer_id: Uuid, name: &str) -> Farm {
    let mut farm = Farm::new(farmer_id, name.to_string());
    farm.altitude_masl = Some(1750);
    farm.area_hectares = Some(4.5);
    farm.varieties = Some("Caturra, Castillo".to_string());
    farm
}

pub fn create_test_product(slug: &str) -> Product {
    let mut product = Product::new(
        slug.to_string(),
        "Café de Origen".to_string(),
        "Single Origin Coffee".to_string(),
        3200,
    );
    product.roast_level = RoastLevel::Light;
    product.weight_grams = Some(250);
    product
}

pub fn create_test_batch(farmer_id: Uuid, code: &str) -> Batch {
    let mut batch = Batch::new(code.to_string(), farmer_id);
    batch.harvest_date = NaiveDate::from_ymd_opt(2025, 1, 15);
    batch.roast_date = NaiveDate::from_ymd_opt(2025, 3, 2);
    batch.processing_method = Some("Lavado".to_string());
    batch.quantity_kg = Some(120.5);
    batch
}
