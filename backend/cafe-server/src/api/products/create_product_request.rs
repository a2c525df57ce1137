use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    /// Unique URL slug, e.g. "huila-250g"
    pub slug: String,

    pub name_es: String,

    pub name_en: String,

    #[serde(default)]
    pub description_es: Option<String>,

    #[serde(default)]
    pub description_en: Option<String>,

    /// "light", "medium" (default) or "dark"
    #[serde(default)]
    pub roast_level: Option<String>,

    pub price_cents: i64,

    #[serde(default)]
    pub weight_grams: Option<i32>,

    #[serde(default)]
    pub image_url: Option<String>,

    #[serde(default)]
    pub active: Option<bool>,
}
