use cafe_core::Farmer;

use serde::Serialize;

/// Farmer DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct FarmerDto {
    pub id: String,
    pub code: String,
    pub name: String,
    pub region: Option<String>,
    pub bio_es: Option<String>,
    pub bio_en: Option<String>,
    pub photo_url: Option<String>,
    pub version: i32,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Farmer> for FarmerDto {
    fn from(f: Farmer) -> Self {
        Self {
            id: f.id.to_string(),
            code: f.code,
            name: f.name,
            region: f.region,
            bio_es: f.bio_es,
            bio_en: f.bio_en,
            photo_url: f.photo_url,
            version: f.version,
            created_at: f.created_at.timestamp(),
            updated_at: f.updated_at.timestamp(),
        }
    }
}
