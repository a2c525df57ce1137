//! Farmer REST API handlers

use crate::api::validation::{
    validate_description, validate_farmer_code, validate_name, validate_optional_name,
};
use crate::{
    ApiError, ApiResult, AppState, CreateFarmerRequest, DeleteResponse, FarmDto, FarmListResponse,
    FarmerDto, FarmerListResponse, FarmerResponse, UpdateFarmerRequest,
};

use cafe_core::Farmer;
use cafe_db::{FarmRepository, FarmerRepository};

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;
use uuid::Uuid;

const ENTITY: &str = "farmer";

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/v1/farmers
pub async fn list_farmers(State(state): State<AppState>) -> ApiResult<Json<FarmerListResponse>> {
    let repo = FarmerRepository::new(state.pool.clone());
    let farmers = repo.find_all().await?;

    Ok(Json(FarmerListResponse {
        farmers: farmers.into_iter().map(FarmerDto::from).collect(),
    }))
}

/// GET /api/v1/farmers/{id}
pub async fn get_farmer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<FarmerResponse>> {
    let farmer = load_farmer(&state, &id).await?;

    Ok(Json(FarmerResponse {
        farmer: farmer.into(),
    }))
}

/// GET /api/v1/farmers/{id}/farms
pub async fn list_farmer_farms(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<FarmListResponse>> {
    let farmer = load_farmer(&state, &id).await?;

    let farms = FarmRepository::new(state.pool.clone())
        .find_by_farmer(farmer.id)
        .await?;

    Ok(Json(FarmListResponse {
        farms: farms.into_iter().map(FarmDto::from).collect(),
    }))
}

/// POST /api/v1/farmers
pub async fn create_farmer(
    State(state): State<AppState>,
    Json(req): Json<CreateFarmerRequest>,
) -> ApiResult<Json<FarmerResponse>> {
    let limits = &state.validation;

    let code = validate_farmer_code(&req.code, limits)?;
    let name = validate_name(&req.name, "name", limits)?;

    let mut farmer = Farmer::new(code, name);
    farmer.region = validate_optional_name(req.region.as_deref(), "region", limits)?;
    farmer.bio_es = validate_description(req.bio_es.as_deref(), "bio_es", limits)?;
    farmer.bio_en = validate_description(req.bio_en.as_deref(), "bio_en", limits)?;
    farmer.photo_url = validate_optional_name(req.photo_url.as_deref(), "photo_url", limits)?;

    FarmerRepository::new(state.pool.clone())
        .create(&farmer)
        .await?;

    state.metrics.entity_created(ENTITY);
    log::info!("Created farmer {} ({}) via REST API", farmer.id, farmer.code);

    Ok(Json(FarmerResponse {
        farmer: farmer.into(),
    }))
}

/// PUT /api/v1/farmers/{id}
///
/// Uses optimistic locking via expected_version.
pub async fn update_farmer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateFarmerRequest>,
) -> ApiResult<Json<FarmerResponse>> {
    let limits = &state.validation;

    // 1. Fetch existing farmer
    let mut farmer = load_farmer(&state, &id).await?;

    // 2. Check version (optimistic locking)
    if farmer.version != req.expected_version {
        state.metrics.conflict(ENTITY);
        return Err(ApiError::version_conflict(farmer.version));
    }

    // 3. Apply updates with validation
    if let Some(ref code) = req.code {
        farmer.code = validate_farmer_code(code, limits)?;
    }
    if let Some(ref name) = req.name {
        farmer.name = validate_name(name, "name", limits)?;
    }
    if let Some(ref region) = req.region {
        farmer.region = validate_optional_name(region.as_deref(), "region", limits)?;
    }
    if let Some(ref bio_es) = req.bio_es {
        farmer.bio_es = validate_description(bio_es.as_deref(), "bio_es", limits)?;
    }
    if let Some(ref bio_en) = req.bio_en {
        farmer.bio_en = validate_description(bio_en.as_deref(), "bio_en", limits)?;
    }
    if let Some(ref photo_url) = req.photo_url {
        farmer.photo_url = validate_optional_name(photo_url.as_deref(), "photo_url", limits)?;
    }

    // 4. Update metadata
    farmer.updated_at = Utc::now();
    farmer.version += 1;

    FarmerRepository::new(state.pool.clone())
        .update(&farmer)
        .await?;

    state.metrics.entity_updated(ENTITY);
    log::info!(
        "Updated farmer {} to version {} via REST API",
        farmer.id,
        farmer.version
    );

    Ok(Json(FarmerResponse {
        farmer: farmer.into(),
    }))
}

/// DELETE /api/v1/farmers/{id}
///
/// Soft delete. Farms and batches keep pointing at the farmer row.
pub async fn delete_farmer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let farmer = load_farmer(&state, &id).await?;

    FarmerRepository::new(state.pool.clone())
        .delete(farmer.id, Utc::now().timestamp())
        .await?;

    state.metrics.entity_deleted(ENTITY);
    log::info!("Deleted farmer {} ({}) via REST API", farmer.id, farmer.code);

    Ok(Json(DeleteResponse {
        deleted_id: farmer.id.to_string(),
    }))
}

async fn load_farmer(state: &AppState, id: &str) -> ApiResult<Farmer> {
    let farmer_id = Uuid::parse_str(id)?;

    FarmerRepository::new(state.pool.clone())
        .find_by_id(farmer_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Farmer {} not found", id)))
}
