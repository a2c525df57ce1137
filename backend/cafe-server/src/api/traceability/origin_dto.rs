use cafe_core::{Batch, Farm, Farmer, Language, Product};

use serde::Serialize;

/// Where a batch came from, localized for the public trace page.
#[derive(Debug, Serialize)]
pub struct OriginDto {
    pub farmer_name: Option<String>,
    pub farmer_region: Option<String>,
    pub farmer_bio: Option<String>,
    pub farmer_photo_url: Option<String>,
    pub farm_name: Option<String>,
    pub altitude_masl: Option<i32>,
    pub variety: Option<String>,
    pub product_name: Option<String>,
    pub product_slug: Option<String>,
}

impl OriginDto {
    /// Batch-level altitude wins over the farm's.
    pub fn build(
        batch: &Batch,
        farmer: Option<&Farmer>,
        farm: Option<&Farm>,
        product: Option<&Product>,
        language: Language,
    ) -> Self {
        Self {
            farmer_name: farmer.map(|f| f.name.clone()),
            farmer_region: farmer
                .and_then(|f| f.region.clone())
                .or_else(|| farm.and_then(|f| f.region.clone())),
            farmer_bio: farmer.and_then(|f| f.bio(language)).map(str::to_string),
            farmer_photo_url: farmer.and_then(|f| f.photo_url.clone()),
            farm_name: farm.map(|f| f.name.clone()),
            altitude_masl: batch
                .altitude_masl
                .or_else(|| farm.and_then(|f| f.altitude_masl)),
            variety: batch.variety.clone(),
            product_name: product.map(|p| p.name(language).to_string()),
            product_slug: product.map(|p| p.slug.clone()),
        }
    }
}
