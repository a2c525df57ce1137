use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateFarmRequest {
    pub farmer_id: String,

    pub name: String,

    #[serde(default)]
    pub region: Option<String>,

    #[serde(default)]
    pub altitude_masl: Option<i32>,

    #[serde(default)]
    pub area_hectares: Option<f64>,

    #[serde(default)]
    pub varieties: Option<String>,
}
