//! Product REST API handlers

use crate::api::validation::{
    validate_description, validate_name, validate_non_negative, validate_optional_name,
    validate_slug,
};
use crate::{
    ApiError, ApiResult, AppState, CreateProductRequest, DeleteResponse, ListProductsQuery,
    ProductDto, ProductListResponse, ProductResponse, UpdateProductRequest,
};

use cafe_core::{Product, RoastLevel};
use cafe_db::ProductRepository;

use std::str::FromStr;

use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::Utc;
use uuid::Uuid;

const ENTITY: &str = "product";

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/v1/products
///
/// `?active_only=true` hides products no longer offered.
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ListProductsQuery>,
) -> ApiResult<Json<ProductListResponse>> {
    let repo = ProductRepository::new(state.pool.clone());
    let products = if query.active_only {
        repo.find_active().await?
    } else {
        repo.find_all().await?
    };

    Ok(Json(ProductListResponse {
        products: products.into_iter().map(ProductDto::from).collect(),
    }))
}

/// GET /api/v1/products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ProductResponse>> {
    let product = load_product(&state, &id).await?;

    Ok(Json(ProductResponse {
        product: product.into(),
    }))
}

/// POST /api/v1/products
pub async fn create_product(
    State(state): State<AppState>,
    Json(req): Json<CreateProductRequest>,
) -> ApiResult<Json<ProductResponse>> {
    let limits = &state.validation;

    let slug = validate_slug(&req.slug, limits)?;
    let name_es = validate_name(&req.name_es, "name_es", limits)?;
    let name_en = validate_name(&req.name_en, "name_en", limits)?;
    let price_cents = validate_price(req.price_cents)?;

    let mut product = Product::new(slug, name_es, name_en, price_cents);
    product.description_es =
        validate_description(req.description_es.as_deref(), "description_es", limits)?;
    product.description_en =
        validate_description(req.description_en.as_deref(), "description_en", limits)?;
    if let Some(ref roast_level) = req.roast_level {
        product.roast_level = RoastLevel::from_str(roast_level)?;
    }
    product.weight_grams = validate_non_negative(req.weight_grams, "weight_grams")?;
    product.image_url = validate_optional_name(req.image_url.as_deref(), "image_url", limits)?;
    product.active = req.active.unwrap_or(true);

    ProductRepository::new(state.pool.clone())
        .create(&product)
        .await?;

    state.metrics.entity_created(ENTITY);
    log::info!(
        "Created product {} ({}) via REST API",
        product.id,
        product.slug
    );

    Ok(Json(ProductResponse {
        product: product.into(),
    }))
}

/// PUT /api/v1/products/{id}
///
/// Uses optimistic locking via expected_version.
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateProductRequest>,
) -> ApiResult<Json<ProductResponse>> {
    let limits = &state.validation;

    let mut product = load_product(&state, &id).await?;

    if product.version != req.expected_version {
        state.metrics.conflict(ENTITY);
        return Err(ApiError::version_conflict(product.version));
    }

    if let Some(ref slug) = req.slug {
        product.slug = validate_slug(slug, limits)?;
    }
    if let Some(ref name_es) = req.name_es {
        product.name_es = validate_name(name_es, "name_es", limits)?;
    }
    if let Some(ref name_en) = req.name_en {
        product.name_en = validate_name(name_en, "name_en", limits)?;
    }
    if let Some(ref description_es) = req.description_es {
        product.description_es =
            validate_description(description_es.as_deref(), "description_es", limits)?;
    }
    if let Some(ref description_en) = req.description_en {
        product.description_en =
            validate_description(description_en.as_deref(), "description_en", limits)?;
    }
    if let Some(ref roast_level) = req.roast_level {
        product.roast_level = RoastLevel::from_str(roast_level)?;
    }
    if let Some(price_cents) = req.price_cents {
        product.price_cents = validate_price(price_cents)?;
    }
    if let Some(weight_grams) = req.weight_grams {
        product.weight_grams = validate_non_negative(weight_grams, "weight_grams")?;
    }
    if let Some(ref image_url) = req.image_url {
        product.image_url = validate_optional_name(image_url.as_deref(), "image_url", limits)?;
    }
    if let Some(active) = req.active {
        product.active = active;
    }

    product.updated_at = Utc::now();
    product.version += 1;

    ProductRepository::new(state.pool.clone())
        .update(&product)
        .await?;

    state.metrics.entity_updated(ENTITY);
    log::info!(
        "Updated product {} to version {} via REST API",
        product.id,
        product.version
    );

    Ok(Json(ProductResponse {
        product: product.into(),
    }))
}

/// DELETE /api/v1/products/{id}
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let product = load_product(&state, &id).await?;

    ProductRepository::new(state.pool.clone())
        .delete(product.id, Utc::now().timestamp())
        .await?;

    state.metrics.entity_deleted(ENTITY);
    log::info!("Deleted product {} via REST API", product.id);

    Ok(Json(DeleteResponse {
        deleted_id: product.id.to_string(),
    }))
}

async fn load_product(state: &AppState, id: &str) -> ApiResult<Product> {
    let product_id = Uuid::parse_str(id)?;

    ProductRepository::new(state.pool.clone())
        .find_by_id(product_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Product {} not found", id)))
}

fn validate_price(price_cents: i64) -> ApiResult<i64> {
    validate_non_negative(Some(price_cents), "price_cents").map(|p| p.unwrap_or(price_cents))
}
