//! Batch REST API handlers
//!
//! Batches are the CMS side of traceability: editors record milestone dates
//! here and the public timeline is derived from them on read.

use crate::api::references::{require_farm, require_farmer, require_product};
use crate::api::validation::{
    parse_date, sanitize_optional, validate_batch_code, validate_description,
    validate_non_negative, validate_optional_name,
};
use crate::{
    ApiError, ApiResult, AppState, BatchDto, BatchListResponse, BatchResponse, CreateBatchRequest,
    DeleteResponse, ListBatchesQuery, UpdateBatchRequest,
};

use cafe_core::{Batch, BatchStatus, Farmer};
use cafe_db::{BatchFilter, BatchRepository};

use std::str::FromStr;

use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::Utc;
use uuid::Uuid;

const ENTITY: &str = "batch";

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/v1/batches
///
/// Optional `?farmer_id=` and `?status=` filters.
pub async fn list_batches(
    State(state): State<AppState>,
    Query(query): Query<ListBatchesQuery>,
) -> ApiResult<Json<BatchListResponse>> {
    let farmer_id = sanitize_optional(query.farmer_id.as_deref())
        .map(|id| Uuid::parse_str(&id))
        .transpose()
        .map_err(|e| ApiError::validation("farmer_id", format!("Invalid UUID format: {}", e)))?;
    let status = sanitize_optional(query.status.as_deref())
        .map(|s| BatchStatus::from_str(&s))
        .transpose()?;

    let batches = BatchRepository::new(state.pool.clone())
        .find_filtered(&BatchFilter { farmer_id, status })
        .await?;

    Ok(Json(BatchListResponse {
        batches: batches.into_iter().map(BatchDto::from).collect(),
    }))
}

/// GET /api/v1/batches/{id}
pub async fn get_batch(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<BatchResponse>> {
    let batch = load_batch(&state, &id).await?;

    Ok(Json(BatchResponse {
        batch: batch.into(),
    }))
}

/// GET /api/v1/batches/by-code/{batch_code}
pub async fn get_batch_by_code(
    State(state): State<AppState>,
    Path(batch_code): Path<String>,
) -> ApiResult<Json<BatchResponse>> {
    let batch = load_batch_by_code(&state, &batch_code).await?;

    Ok(Json(BatchResponse {
        batch: batch.into(),
    }))
}

/// POST /api/v1/batches
pub async fn create_batch(
    State(state): State<AppState>,
    Json(req): Json<CreateBatchRequest>,
) -> ApiResult<Json<BatchResponse>> {
    let limits = &state.validation;

    // 1. Resolve references
    let farmer = require_farmer(&state, &req.farmer_id).await?;
    let farm_id = match sanitize_optional(req.farm_id.as_deref()) {
        Some(raw) => Some(require_farm_of(&state, &raw, farmer.id).await?),
        None => None,
    };
    let product_id = match sanitize_optional(req.product_id.as_deref()) {
        Some(raw) => Some(require_product(&state, &raw).await?.id),
        None => None,
    };

    // 2. Batch code: given, or the next one for this farmer
    let batch_code = match req.batch_code.as_deref() {
        Some(code) if !code.trim().is_empty() => validate_batch_code(code, limits)?,
        _ => suggest_batch_code(&state, &farmer).await?,
    };

    // 3. Build batch
    let mut batch = Batch::new(batch_code, farmer.id);
    batch.farm_id = farm_id;
    batch.product_id = product_id;
    batch.variety = validate_optional_name(req.variety.as_deref(), "variety", limits)?;
    batch.altitude_masl = validate_non_negative(req.altitude_masl, "altitude_masl")?;
    batch.quantity_kg = validate_non_negative(req.quantity_kg, "quantity_kg")?;

    batch.harvest_date = parse_date(req.harvest_date.as_deref(), "harvest_date")?;
    batch.roast_date = parse_date(req.roast_date.as_deref(), "roast_date")?;
    batch.pack_date = parse_date(req.pack_date.as_deref(), "pack_date")?;
    batch.distribution_date = parse_date(req.distribution_date.as_deref(), "distribution_date")?;
    batch.retail_date = parse_date(req.retail_date.as_deref(), "retail_date")?;

    batch.processing_method =
        validate_optional_name(req.processing_method.as_deref(), "processing_method", limits)?;
    batch.drying_method =
        validate_optional_name(req.drying_method.as_deref(), "drying_method", limits)?;
    batch.transport_mode =
        validate_optional_name(req.transport_mode.as_deref(), "transport_mode", limits)?;

    if let Some(ref status) = req.status {
        batch.status = BatchStatus::from_str(status)?;
    }
    batch.notes = validate_description(req.notes.as_deref(), "notes", limits)?;

    // 4. Persist
    BatchRepository::new(state.pool.clone())
        .create(&batch)
        .await?;

    state.metrics.entity_created(ENTITY);
    log::info!(
        "Created batch {} ({}) via REST API",
        batch.id,
        batch.batch_code
    );

    Ok(Json(BatchResponse {
        batch: batch.into(),
    }))
}

/// PUT /api/v1/batches/{id}
///
/// Uses optimistic locking via expected_version.
pub async fn update_batch(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateBatchRequest>,
) -> ApiResult<Json<BatchResponse>> {
    let limits = &state.validation;

    // 1. Fetch existing batch
    let mut batch = load_batch(&state, &id).await?;

    // 2. Check version (optimistic locking)
    if batch.version != req.expected_version {
        state.metrics.conflict(ENTITY);
        return Err(ApiError::version_conflict(batch.version));
    }

    // 3. Apply updates with validation
    if let Some(ref code) = req.batch_code {
        batch.batch_code = validate_batch_code(code, limits)?;
    }
    if let Some(ref raw) = req.farmer_id {
        batch.farmer_id = require_farmer(&state, raw).await?.id;
    }

    if let Some(ref farm_id) = req.farm_id {
        batch.farm_id = match sanitize_optional(farm_id.as_deref()) {
            Some(raw) => Some(require_farm_of(&state, &raw, batch.farmer_id).await?),
            None => None,
        };
    } else if req.farmer_id.is_some()
        && let Some(current) = batch.farm_id
    {
        // A farmer change must not leave the batch on someone else's farm
        require_farm_of(&state, &current.to_string(), batch.farmer_id).await?;
    }
    if let Some(ref product_id) = req.product_id {
        batch.product_id = match sanitize_optional(product_id.as_deref()) {
            Some(raw) => Some(require_product(&state, &raw).await?.id),
            None => None,
        };
    }

    if let Some(ref variety) = req.variety {
        batch.variety = validate_optional_name(variety.as_deref(), "variety", limits)?;
    }
    if let Some(altitude) = req.altitude_masl {
        batch.altitude_masl = validate_non_negative(altitude, "altitude_masl")?;
    }
    if let Some(quantity) = req.quantity_kg {
        batch.quantity_kg = validate_non_negative(quantity, "quantity_kg")?;
    }

    if let Some(ref date) = req.harvest_date {
        batch.harvest_date = parse_date(date.as_deref(), "harvest_date")?;
    }
    if let Some(ref date) = req.roast_date {
        batch.roast_date = parse_date(date.as_deref(), "roast_date")?;
    }
    if let Some(ref date) = req.pack_date {
        batch.pack_date = parse_date(date.as_deref(), "pack_date")?;
    }
    if let Some(ref date) = req.distribution_date {
        batch.distribution_date = parse_date(date.as_deref(), "distribution_date")?;
    }
    if let Some(ref date) = req.retail_date {
        batch.retail_date = parse_date(date.as_deref(), "retail_date")?;
    }

    if let Some(ref method) = req.processing_method {
        batch.processing_method =
            validate_optional_name(method.as_deref(), "processing_method", limits)?;
    }
    if let Some(ref method) = req.drying_method {
        batch.drying_method = validate_optional_name(method.as_deref(), "drying_method", limits)?;
    }
    if let Some(ref mode) = req.transport_mode {
        batch.transport_mode = validate_optional_name(mode.as_deref(), "transport_mode", limits)?;
    }

    if let Some(ref status) = req.status {
        batch.status = BatchStatus::from_str(status)?;
    }
    if let Some(ref notes) = req.notes {
        batch.notes = validate_description(notes.as_deref(), "notes", limits)?;
    }

    // 4. Update metadata
    batch.updated_at = Utc::now();
    batch.version += 1;

    BatchRepository::new(state.pool.clone())
        .update(&batch)
        .await?;

    state.metrics.entity_updated(ENTITY);
    log::info!(
        "Updated batch {} to version {} via REST API",
        batch.id,
        batch.version
    );

    Ok(Json(BatchResponse {
        batch: batch.into(),
    }))
}

/// DELETE /api/v1/batches/{id}
pub async fn delete_batch(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let batch = load_batch(&state, &id).await?;

    BatchRepository::new(state.pool.clone())
        .delete(batch.id, Utc::now().timestamp())
        .await?;

    state.metrics.entity_deleted(ENTITY);
    log::info!(
        "Deleted batch {} ({}) via REST API",
        batch.id,
        batch.batch_code
    );

    Ok(Json(DeleteResponse {
        deleted_id: batch.id.to_string(),
    }))
}

// =============================================================================
// Helpers
// =============================================================================

pub(crate) async fn load_batch(state: &AppState, id: &str) -> ApiResult<Batch> {
    let batch_id = Uuid::parse_str(id)?;

    BatchRepository::new(state.pool.clone())
        .find_by_id(batch_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Batch {} not found", id)))
}

pub(crate) async fn load_batch_by_code(state: &AppState, batch_code: &str) -> ApiResult<Batch> {
    BatchRepository::new(state.pool.clone())
        .find_by_batch_code(&batch_code.trim().to_ascii_uppercase())
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Batch {} not found", batch_code)))
}

/// The farm must exist and belong to the batch's farmer.
async fn require_farm_of(state: &AppState, raw: &str, farmer_id: Uuid) -> ApiResult<Uuid> {
    let farm = require_farm(state, raw).await?;

    if farm.farmer_id != farmer_id {
        return Err(ApiError::validation(
            "farm_id",
            format!("Farm {} does not belong to farmer {}", farm.id, farmer_id),
        ));
    }

    Ok(farm.id)
}

async fn suggest_batch_code(state: &AppState, farmer: &Farmer) -> ApiResult<String> {
    let count = BatchRepository::new(state.pool.clone())
        .count_by_farmer(farmer.id)
        .await?;
    let sequence = u32::try_from(count + 1).unwrap_or(u32::MAX);

    Ok(Batch::suggest_code(&farmer.code, sequence))
}
