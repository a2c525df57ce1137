use serde::Deserialize;

/// Query parameters for listing batches
#[derive(Debug, Deserialize)]
pub struct ListBatchesQuery {
    pub farmer_id: Option<String>,
    /// "active", "sold" or "expired"
    pub status: Option<String>,
}
