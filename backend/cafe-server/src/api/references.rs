//! Resolution of ids that request bodies point at.
//!
//! A dangling reference in a body is a validation error on that field,
//! not a 404 for the request.

use crate::{ApiError, ApiResult, AppState};

use cafe_core::{Farm, Farmer, Product};
use cafe_db::{FarmRepository, FarmerRepository, ProductRepository};

use uuid::Uuid;

fn parse_reference(raw: &str, field: &str) -> ApiResult<Uuid> {
    Uuid::parse_str(raw.trim())
        .map_err(|e| ApiError::validation(field, format!("Invalid UUID format: {}", e)))
}

pub async fn require_farmer(state: &AppState, raw: &str) -> ApiResult<Farmer> {
    let id = parse_reference(raw, "farmer_id")?;

    FarmerRepository::new(state.pool.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::validation("farmer_id", format!("Farmer {} not found", id)))
}

pub async fn require_farm(state: &AppState, raw: &str) -> ApiResult<Farm> {
    let id = parse_reference(raw, "farm_id")?;

    FarmRepository::new(state.pool.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::validation("farm_id", format!("Farm {} not found", id)))
}

pub async fn require_product(state: &AppState, raw: &str) -> ApiResult<Product> {
    let id = parse_reference(raw, "product_id")?;

    ProductRepository::new(state.pool.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::validation("product_id", format!("Product {} not found", id)))
}
