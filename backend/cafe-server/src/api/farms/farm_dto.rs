use cafe_core::Farm;

use serde::Serialize;

/// Farm DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct FarmDto {
    pub id: String,
    pub farmer_id: String,
    pub name: String,
    pub region: Option<String>,
    pub altitude_masl: Option<i32>,
    pub area_hectares: Option<f64>,
    pub varieties: Option<String>,
    pub version: i32,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Farm> for FarmDto {
    fn from(f: Farm) -> Self {
        Self {
            id: f.id.to_string(),
            farmer_id: f.farmer_id.to_string(),
            name: f.name,
            region: f.region,
            altitude_masl: f.altitude_masl,
            area_hectares: f.area_hectares,
            varieties: f.varieties,
            version: f.version,
            created_at: f.created_at.timestamp(),
            updated_at: f.updated_at.timestamp(),
        }
    }
}
