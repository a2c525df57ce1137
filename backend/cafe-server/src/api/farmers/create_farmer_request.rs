use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateFarmerRequest {
    /// Unique batch code prefix, e.g. "JUAN" (required, uppercased)
    pub code: String,

    pub name: String,

    #[serde(default)]
    pub region: Option<String>,

    #[serde(default)]
    pub bio_es: Option<String>,

    #[serde(default)]
    pub bio_en: Option<String>,

    #[serde(default)]
    pub photo_url: Option<String>,
}
