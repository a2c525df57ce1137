use cafe_core::Batch;

use chrono::NaiveDate;
use serde::Serialize;

/// Batch DTO for JSON serialization. Milestone dates are `YYYY-MM-DD` or null.
#[derive(Debug, Serialize)]
pub struct BatchDto {
    pub id: String,
    pub batch_code: String,
    pub farmer_id: String,
    pub farm_id: Option<String>,
    pub product_id: Option<String>,
    pub variety: Option<String>,
    pub altitude_masl: Option<i32>,
    pub quantity_kg: Option<f64>,
    pub harvest_date: Option<NaiveDate>,
    pub roast_date: Option<NaiveDate>,
    pub pack_date: Option<NaiveDate>,
    pub distribution_date: Option<NaiveDate>,
    pub retail_date: Option<NaiveDate>,
    pub processing_method: Option<String>,
    pub drying_method: Option<String>,
    pub transport_mode: Option<String>,
    pub status: String,
    pub notes: Option<String>,
    pub version: i32,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Batch> for BatchDto {
    fn from(b: Batch) -> Self {
        Self {
            id: b.id.to_string(),
            batch_code: b.batch_code,
            farmer_id: b.farmer_id.to_string(),
            farm_id: b.farm_id.map(|id| id.to_string()),
            product_id: b.product_id.map(|id| id.to_string()),
            variety: b.variety,
            altitude_masl: b.altitude_masl,
            quantity_kg: b.quantity_kg,
            harvest_date: b.harvest_date,
            roast_date: b.roast_date,
            pack_date: b.pack_date,
            distribution_date: b.distribution_date,
            retail_date: b.retail_date,
            processing_method: b.processing_method,
            drying_method: b.drying_method,
            transport_mode: b.transport_mode,
            status: b.status.as_str().to_string(),
            notes: b.notes,
            version: b.version,
            created_at: b.created_at.timestamp(),
            updated_at: b.updated_at.timestamp(),
        }
    }
}
