use crate::api::nullable;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    #[serde(default)]
    pub slug: Option<String>,

    #[serde(default)]
    pub name_es: Option<String>,

    #[serde(default)]
    pub name_en: Option<String>,

    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub description_es: Option<Option<String>>,

    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub description_en: Option<Option<String>>,

    #[serde(default)]
    pub roast_level: Option<String>,

    #[serde(default)]
    pub price_cents: Option<i64>,

    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub weight_grams: Option<Option<i32>>,

    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub image_url: Option<Option<String>>,

    #[serde(default)]
    pub active: Option<bool>,

    /// Required for optimistic locking
    pub expected_version: i32,
}
