use crate::{BatchRepository, DbError, FarmerRepository, connect_in_memory};

use cafe_core::{Batch, Farmer};

use chrono::NaiveDate;
use sqlx::SqlitePool;

async fn setup_db() -> (SqlitePool, Farmer) {
    let pool = connect_in_memory()
        .await
        .expect("Failed to create test database");

    let farmer = Farmer::new("JUAN".to_string(), "Juan".to_string());
    FarmerRepository::new(pool.clone())
        .create(&farmer)
        .await
        .expect("Failed to seed farmer");

    (pool, farmer)
}

#[tokio::test]
async fn given_foreign_date_formats_in_row_when_read_then_parsable_kept_and_garbage_dropped() {
    let (pool, farmer) = setup_db().await;
    let batch = Batch::new("JUAN-001".to_string(), farmer.id);
    let repo = BatchRepository::new(pool.clone());
    repo.create(&batch).await.unwrap();

    // Rows written by older tooling
    sqlx::query(
        "UPDATE batches SET harvest_date = ?, roast_date = ?, pack_date = ? WHERE id = ?",
    )
    .bind("2025-01-10T00:00:00.000Z")
    .bind("next week")
    .bind("")
    .bind(batch.id.to_string())
    .execute(&pool)
    .await
    .unwrap();

    let found = repo.find_by_id(batch.id).await.unwrap().unwrap();

    assert_eq!(found.harvest_date, NaiveDate::from_ymd_opt(2025, 1, 10));
    assert_eq!(found.roast_date, None);
    assert_eq!(found.pack_date, None);
}

#[tokio::test]
async fn given_corrupt_uuid_in_row_when_read_then_invalid_row_error() {
    let (pool, farmer) = setup_db().await;
    let batch = Batch::new("JUAN-002".to_string(), farmer.id);
    let repo = BatchRepository::new(pool.clone());
    repo.create(&batch).await.unwrap();

    sqlx::query("PRAGMA foreign_keys = OFF")
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query("UPDATE batches SET product_id = 'not-a-uuid' WHERE id = ?")
        .bind(batch.id.to_string())
        .execute(&pool)
        .await
        .unwrap();

    let result = repo.find_by_batch_code("JUAN-002").await;

    assert!(matches!(result, Err(DbError::InvalidRow { .. })));
}

#[tokio::test]
async fn given_duplicate_batch_code_when_created_then_unique_violation() {
    let (pool, farmer) = setup_db().await;
    let repo = BatchRepository::new(pool);
    repo.create(&Batch::new("JUAN-003".to_string(), farmer.id))
        .await
        .unwrap();

    let result = repo
        .create(&Batch::new("JUAN-003".to_string(), farmer.id))
        .await;

    assert!(matches!(result, Err(DbError::UniqueViolation { .. })));
}
