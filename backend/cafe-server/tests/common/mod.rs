#![allow(dead_code)]

//! Test infrastructure for cafe-server API tests

use cafe_core::{Batch, Farm, Farmer, Product};
use cafe_db::{BatchRepository, FarmRepository, FarmerRepository, ProductRepository};
use cafe_server::{AppState, build_router};

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use chrono::NaiveDate;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;
use uuid::Uuid;

/// Create AppState over a fresh in-memory database
pub async fn create_test_app_state() -> AppState {
    let pool = cafe_db::connect_in_memory()
        .await
        .expect("Failed to create test database");

    AppState::new(pool)
}

/// Send one request through a fresh router and decode the JSON body
pub async fn send(
    state: &AppState,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let app = build_router(state.clone());

    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
    };

    (status, json)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub async fn create_test_farmer(pool: &SqlitePool, code: &str) -> Farmer {
    let mut farmer = Farmer::new(code.to_string(), format!("Farmer {}", code));
    farmer.region = Some("Huila".to_string());
    farmer.bio_es = Some("Caficultor".to_string());
    farmer.bio_en = Some("Coffee grower".to_string());

    FarmerRepository::new(pool.clone())
        .create(&farmer)
        .await
        .expect("Failed to create test farmer");
    farmer
}

pub async fn create_test_farm(pool: &SqlitePool, farmer_id: Uuid, name: &str) -> Farm {
    let mut farm = Farm::new(farmer_id, name.to_string());
    farm.altitude_masl = Some(1750);

    FarmRepository::new(pool.clone())
        .create(&farm)
        .await
        .expect("Failed to create test farm");
    farm
}

pub async fn create_test_product(pool: &SqlitePool, slug: &str) -> Product {
    let product = Product::new(
        slug.to_string(),
        "Origen Huila".to_string(),
        "Huila Origin".to_string(),
        42000,
    );

    ProductRepository::new(pool.clone())
        .create(&product)
        .await
        .expect("Failed to create test product");
    product
}

/// A batch harvested on 2025-01-15 and roasted on 2025-03-02
pub async fn create_test_batch(pool: &SqlitePool, farmer_id: Uuid, code: &str) -> Batch {
    let mut batch = Batch::new(code.to_string(), farmer_id);
    batch.harvest_date = Some(date(2025, 1, 15));
    batch.roast_date = Some(date(2025, 3, 2));
    batch.processing_method = Some("Lavado".to_string());

    BatchRepository::new(pool.clone())
        .create(&batch)
        .await
        .expect("Failed to create test batch");
    batch
}
