use crate::api::nullable;

use serde::Deserialize;

/// Absent fields are left alone; `null` clears a nullable field.
#[derive(Debug, Deserialize)]
pub struct UpdateBatchRequest {
    #[serde(default)]
    pub batch_code: Option<String>,

    #[serde(default)]
    pub farmer_id: Option<String>,

    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub farm_id: Option<Option<String>>,

    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub product_id: Option<Option<String>>,

    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub variety: Option<Option<String>>,

    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub altitude_masl: Option<Option<i32>>,

    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub quantity_kg: Option<Option<f64>>,

    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub harvest_date: Option<Option<String>>,

    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub roast_date: Option<Option<String>>,

    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub pack_date: Option<Option<String>>,

    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub distribution_date: Option<Option<String>>,

    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub retail_date: Option<Option<String>>,

    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub processing_method: Option<Option<String>>,

    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub drying_method: Option<Option<String>>,

    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub transport_mode: Option<Option<String>>,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub notes: Option<Option<String>>,

    /// Required for optimistic locking
    pub expected_version: i32,
}
