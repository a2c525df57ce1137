use crate::api::nullable;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UpdateFarmRequest {
    /// Move the farm to another farmer
    #[serde(default)]
    pub farmer_id: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub region: Option<Option<String>>,

    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub altitude_masl: Option<Option<i32>>,

    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub area_hectares: Option<Option<f64>>,

    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub varieties: Option<Option<String>>,

    /// Required for optimistic locking
    pub expected_version: i32,
}
