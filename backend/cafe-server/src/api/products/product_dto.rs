use cafe_core::Product;

use serde::Serialize;

/// Product DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct ProductDto {
    pub id: String,
    pub slug: String,
    pub name_es: String,
    pub name_en: String,
    pub description_es: Option<String>,
    pub description_en: Option<String>,
    pub roast_level: String,
    pub price_cents: i64,
    pub weight_grams: Option<i32>,
    pub image_url: Option<String>,
    pub active: bool,
    pub version: i32,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Product> for ProductDto {
    fn from(p: Product) -> Self {
        Self {
            id: p.id.to_string(),
            slug: p.slug,
            name_es: p.name_es,
            name_en: p.name_en,
            description_es: p.description_es,
            description_en: p.description_en,
            roast_level: p.roast_level.as_str().to_string(),
            price_cents: p.price_cents,
            weight_grams: p.weight_grams,
            image_url: p.image_url,
            active: p.active,
            version: p.version,
            created_at: p.created_at.timestamp(),
            updated_at: p.updated_at.timestamp(),
        }
    }
}
