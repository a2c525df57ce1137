use cafe_core::{Farmer, Product};
use cafe_db::{FarmerRepository, ProductRepository, connect_in_memory};

use sqlx::SqlitePool;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    connect_in_memory()
        .await
        .expect("Failed to create test pool")
}

/// Inserts a farmer so batches and farms have a valid owner
pub async fn seed_farmer(pool: &SqlitePool, code: &str) -> Farmer {
    let farmer = super::create_test_farmer(code);
    FarmerRepository::new(pool.clone())
        .create(&farmer)
        .await
        .expect("Failed to seed farmer");
    farmer
}

pub async fn seed_product(pool: &SqlitePool, slug: &str) -> Product {
    let product = super::create_test_product(slug);
    ProductRepository::new(pool.clone())
        .create(&product)
        .await
        .expect("Failed to seed product");
    product
}
