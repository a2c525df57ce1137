use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateBatchRequest {
    /// Suggested from the farmer code when omitted, e.g. "JUAN-004"
    #[serde(default)]
    pub batch_code: Option<String>,

    pub farmer_id: String,

    #[serde(default)]
    pub farm_id: Option<String>,

    #[serde(default)]
    pub product_id: Option<String>,

    #[serde(default)]
    pub variety: Option<String>,

    #[serde(default)]
    pub altitude_masl: Option<i32>,

    #[serde(default)]
    pub quantity_kg: Option<f64>,

    // Milestones, YYYY-MM-DD
    #[serde(default)]
    pub harvest_date: Option<String>,

    #[serde(default)]
    pub roast_date: Option<String>,

    #[serde(default)]
    pub pack_date: Option<String>,

    #[serde(default)]
    pub distribution_date: Option<String>,

    #[serde(default)]
    pub retail_date: Option<String>,

    #[serde(default)]
    pub processing_method: Option<String>,

    #[serde(default)]
    pub drying_method: Option<String>,

    #[serde(default)]
    pub transport_mode: Option<String>,

    /// "active" (default), "sold" or "expired"
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub notes: Option<String>,
}
