use crate::api::nullable;

use serde::Deserialize;

/// Absent fields are left alone; `null` clears a nullable field.
#[derive(Debug, Deserialize)]
pub struct UpdateFarmerRequest {
    #[serde(default)]
    pub code: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub region: Option<Option<String>>,

    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub bio_es: Option<Option<String>>,

    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub bio_en: Option<Option<String>>,

    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub photo_url: Option<Option<String>>,

    /// Required for optimistic locking
    pub expected_version: i32,
}
