//! Farm REST API handlers

use crate::api::references::require_farmer;
use crate::api::validation::{validate_name, validate_non_negative, validate_optional_name};
use crate::{
    ApiError, ApiResult, AppState, CreateFarmRequest, DeleteResponse, FarmDto, FarmListResponse,
    FarmResponse, UpdateFarmRequest,
};

use cafe_core::Farm;
use cafe_db::FarmRepository;

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;
use uuid::Uuid;

const ENTITY: &str = "farm";

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/v1/farms
pub async fn list_farms(State(state): State<AppState>) -> ApiResult<Json<FarmListResponse>> {
    let farms = FarmRepository::new(state.pool.clone()).find_all().await?;

    Ok(Json(FarmListResponse {
        farms: farms.into_iter().map(FarmDto::from).collect(),
    }))
}

/// GET /api/v1/farms/{id}
pub async fn get_farm(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<FarmResponse>> {
    let farm = load_farm(&state, &id).await?;

    Ok(Json(FarmResponse { farm: farm.into() }))
}

/// POST /api/v1/farms
pub async fn create_farm(
    State(state): State<AppState>,
    Json(req): Json<CreateFarmRequest>,
) -> ApiResult<Json<FarmResponse>> {
    let limits = &state.validation;

    let farmer = require_farmer(&state, &req.farmer_id).await?;
    let name = validate_name(&req.name, "name", limits)?;

    let mut farm = Farm::new(farmer.id, name);
    farm.region = validate_optional_name(req.region.as_deref(), "region", limits)?;
    farm.altitude_masl = validate_non_negative(req.altitude_masl, "altitude_masl")?;
    farm.area_hectares = validate_non_negative(req.area_hectares, "area_hectares")?;
    farm.varieties = validate_optional_name(req.varieties.as_deref(), "varieties", limits)?;

    FarmRepository::new(state.pool.clone()).create(&farm).await?;

    state.metrics.entity_created(ENTITY);
    log::info!("Created farm {} ({}) via REST API", farm.id, farm.name);

    Ok(Json(FarmResponse { farm: farm.into() }))
}

/// PUT /api/v1/farms/{id}
///
/// Uses optimistic locking via expected_version.
pub async fn update_farm(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateFarmRequest>,
) -> ApiResult<Json<FarmResponse>> {
    let limits = &state.validation;

    let mut farm = load_farm(&state, &id).await?;

    if farm.version != req.expected_version {
        state.metrics.conflict(ENTITY);
        return Err(ApiError::version_conflict(farm.version));
    }

    if let Some(ref farmer_id) = req.farmer_id {
        farm.farmer_id = require_farmer(&state, farmer_id).await?.id;
    }
    if let Some(ref name) = req.name {
        farm.name = validate_name(name, "name", limits)?;
    }
    if let Some(ref region) = req.region {
        farm.region = validate_optional_name(region.as_deref(), "region", limits)?;
    }
    if let Some(altitude) = req.altitude_masl {
        farm.altitude_masl = validate_non_negative(altitude, "altitude_masl")?;
    }
    if let Some(area) = req.area_hectares {
        farm.area_hectares = validate_non_negative(area, "area_hectares")?;
    }
    if let Some(ref varieties) = req.varieties {
        farm.varieties = validate_optional_name(varieties.as_deref(), "varieties", limits)?;
    }

    farm.updated_at = Utc::now();
    farm.version += 1;

    FarmRepository::new(state.pool.clone()).update(&farm).await?;

    state.metrics.entity_updated(ENTITY);
    log::info!(
        "Updated farm {} to version {} via REST API",
        farm.id,
        farm.version
    );

    Ok(Json(FarmResponse { farm: farm.into() }))
}

/// DELETE /api/v1/farms/{id}
pub async fn delete_farm(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let farm = load_farm(&state, &id).await?;

    FarmRepository::new(state.pool.clone())
        .delete(farm.id, Utc::now().timestamp())
        .await?;

    state.metrics.entity_deleted(ENTITY);
    log::info!("Deleted farm {} via REST API", farm.id);

    Ok(Json(DeleteResponse {
        deleted_id: farm.id.to_string(),
    }))
}

async fn load_farm(state: &AppState, id: &str) -> ApiResult<Farm> {
    let farm_id = Uuid::parse_str(id)?;

    FarmRepository::new(state.pool.clone())
        .find_by_id(farm_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Farm {} not found", id)))
}
