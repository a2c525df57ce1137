use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Farm {
    pub id: Uuid,
    pub farmer_id: Uuid,
    pub name: String,
    pub region: Option<String>,
    /// Meters above sea level
    pub altitude_masl: Option<i32>,
    pub area_hectares: Option<f64>,
    /// Free text, e.g. "Caturra, Castillo"
    pub varieties: Option<String>,
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Farm {
    pub fn new(farmer_id: Uuid, name: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            farmer_id,
            name,
            region: None,
            altitude_masl: None,
            area_hectares: None,
            varieties: None,
            version: 1,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
