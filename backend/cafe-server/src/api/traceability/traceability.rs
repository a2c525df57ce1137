//! Traceability handlers
//!
//! Both endpoints derive the stage timeline on read. Nothing derived is
//! stored; the clock is read once per request and handed to the classifier.

use crate::api::batches::batches::{load_batch, load_batch_by_code};
use crate::{ApiError, ApiResult, AppState, OriginDto, TimelineQuery, TraceResponse};

use cafe_core::{Batch, Language, Timeline};
use cafe_db::{FarmRepository, FarmerRepository, ProductRepository};

use std::str::FromStr;

use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::{DateTime, Utc};

/// GET /api/v1/batches/{id}/timeline
pub async fn get_batch_timeline(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<TimelineQuery>,
) -> ApiResult<Json<Timeline>> {
    let (language, now) = resolve_query(&state, &query)?;
    let batch = load_batch(&state, &id).await?;

    let timeline = derive(&state, &batch, now, language, "timeline");

    Ok(Json(timeline))
}

/// GET /api/v1/trace/{batch_code}
pub async fn trace_batch(
    State(state): State<AppState>,
    Path(batch_code): Path<String>,
    Query(query): Query<TimelineQuery>,
) -> ApiResult<Json<TraceResponse>> {
    let (language, now) = resolve_query(&state, &query)?;
    let batch = load_batch_by_code(&state, &batch_code).await?;

    // Soft-deleted references are still shown; the batch already happened
    let farmer = FarmerRepository::new(state.pool.clone())
        .find_by_id_including_deleted(batch.farmer_id)
        .await?;
    let farm = match batch.farm_id {
        Some(farm_id) => {
            FarmRepository::new(state.pool.clone())
                .find_by_id_including_deleted(farm_id)
                .await?
        }
        None => None,
    };
    let product = match batch.product_id {
        Some(product_id) => {
            ProductRepository::new(state.pool.clone())
                .find_by_id_including_deleted(product_id)
                .await?
        }
        None => None,
    };

    let origin = OriginDto::build(
        &batch,
        farmer.as_ref(),
        farm.as_ref(),
        product.as_ref(),
        language,
    );
    let timeline = derive(&state, &batch, now, language, "trace");

    Ok(Json(TraceResponse { timeline, origin }))
}

// =============================================================================
// Helpers
// =============================================================================

fn resolve_query(state: &AppState, query: &TimelineQuery) -> ApiResult<(Language, DateTime<Utc>)> {
    let language = match query.lang.as_deref().map(str::trim) {
        Some(lang) if !lang.is_empty() => Language::from_str(lang)?,
        _ => state.default_language,
    };

    let now = match query.now.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| ApiError::bad_request(format!("Invalid now '{}': {}", raw, e)))?,
        _ => Utc::now(),
    };

    Ok((language, now))
}

fn derive(
    state: &AppState,
    batch: &Batch,
    now: DateTime<Utc>,
    language: Language,
    endpoint: &'static str,
) -> Timeline {
    let timeline = Timeline::derive(&batch.record(), now, language);

    state.metrics.timeline_derived(endpoint);
    log::debug!(
        "Derived timeline for batch {} at {}: {}/{} completed ({}%), current {:?}",
        batch.batch_code,
        now.to_rfc3339(),
        timeline.progress.completed_count,
        timeline.progress.total_stages,
        timeline.progress.rounded_percentage(),
        timeline.current_stage
    );

    timeline
}
