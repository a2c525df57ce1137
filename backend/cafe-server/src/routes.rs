use crate::{
    AppState, admin, create_batch, create_farm, create_farmer, create_product, delete_batch,
    delete_farm, delete_farmer, delete_product, get_batch, get_batch_by_code, get_batch_timeline,
    get_farm, get_farmer, get_product, health, list_batches, list_farmer_farms, list_farmers,
    list_farms, list_products, trace_batch, update_batch, update_farm, update_farmer,
    update_product,
};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        // Farmers
        .route("/farmers", get(list_farmers).post(create_farmer))
        .route(
            "/farmers/{id}",
            get(get_farmer).put(update_farmer).delete(delete_farmer),
        )
        .route("/farmers/{id}/farms", get(list_farmer_farms))
        // Farms
        .route("/farms", get(list_farms).post(create_farm))
        .route(
            "/farms/{id}",
            get(get_farm).put(update_farm).delete(delete_farm),
        )
        // Batches
        .route("/batches", get(list_batches).post(create_batch))
        .route("/batches/by-code/{batch_code}", get(get_batch_by_code))
        .route(
            "/batches/{id}",
            get(get_batch).put(update_batch).delete(delete_batch),
        )
        .route("/batches/{id}/timeline", get(get_batch_timeline))
        // Public traceability page
        .route("/trace/{batch_code}", get(trace_batch))
        // Products
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        );

    Router::new()
        .nest("/api/v1", api)
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .route("/metrics", get(health::metrics_handler))
        // Admin endpoints
        .route("/admin/checkpoint", post(admin::checkpoint_handler))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
