//! Batch repository for CRUD operations on traceable coffee batches.
//!
//! Milestone dates are stored as `YYYY-MM-DD` text. Rows written by other
//! tools may carry timestamps or garbage in those columns; reads accept
//! anything `parse_milestone_date` understands and treat the rest as missing
//! so a single bad cell never hides the whole batch.

use crate::Result as DbErrorResult;
use crate::repositories::row;

use cafe_core::{Batch, BatchStatus, DateSource, parse_milestone_date};

use chrono::NaiveDate;
use log::warn;
use sqlx::Row;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

const BATCH_COLUMNS: &str = r#"
    id, batch_code, farmer_id, farm_id, product_id, variety, altitude_masl,
    quantity_kg, harvest_date, roast_date, pack_date, distribution_date,
    retail_date, processing_method, drying_method, transport_mode, status,
    notes, version, created_at, updated_at, deleted_at
"#;

/// Optional narrowing for batch listings. Unset fields match everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchFilter {
    pub farmer_id: Option<Uuid>,
    pub status: Option<BatchStatus>,
}

pub struct BatchRepository {
    pool: SqlitePool,
}

impl BatchRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, batch: &Batch) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO batches (
                    id, batch_code, farmer_id, farm_id, product_id, variety,
                    altitude_masl, quantity_kg, harvest_date, roast_date,
                    pack_date, distribution_date, retail_date,
                    processing_method, drying_method, transport_mode, status,
                    notes, version, created_at, updated_at, deleted_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(batch.id.to_string())
        .bind(&batch.batch_code)
        .bind(batch.farmer_id.to_string())
        .bind(batch.farm_id.map(|id| id.to_string()))
        .bind(batch.product_id.map(|id| id.to_string()))
        .bind(&batch.variety)
        .bind(batch.altitude_masl)
        .bind(batch.quantity_kg)
        .bind(date_text(batch.harvest_date))
        .bind(date_text(batch.roast_date))
        .bind(date_text(batch.pack_date))
        .bind(date_text(batch.distribution_date))
        .bind(date_text(batch.retail_date))
        .bind(&batch.processing_method)
        .bind(&batch.drying_method)
        .bind(&batch.transport_mode)
        .bind(batch.status.as_str())
        .bind(&batch.notes)
        .bind(batch.version)
        .bind(batch.created_at.timestamp())
        .bind(batch.updated_at.timestamp())
        .bind(batch.deleted_at.map(|dt| dt.timestamp()))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Batch>> {
        let sql = format!(
            "SELECT {} FROM batches WHERE id = ? AND deleted_at IS NULL",
            BATCH_COLUMNS
        );

        let row = sqlx::query(&sql)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(batch_from_row).transpose()
    }

    /// Public lookup used by the trace page; codes are matched exactly.
    pub async fn find_by_batch_code(&self, batch_code: &str) -> DbErrorResult<Option<Batch>> {
        let sql = format!(
            "SELECT {} FROM batches WHERE batch_code = ? AND deleted_at IS NULL",
            BATCH_COLUMNS
        );

        let row = sqlx::query(&sql)
            .bind(batch_code)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(batch_from_row).transpose()
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<Batch>> {
        self.find_filtered(&BatchFilter::default()).await
    }

    pub async fn find_by_farmer(&self, farmer_id: Uuid) -> DbErrorResult<Vec<Batch>> {
        self.find_filtered(&BatchFilter {
            farmer_id: Some(farmer_id),
            status: None,
        })
        .await
    }

    /// Newest batches first.
    pub async fn find_filtered(&self, filter: &BatchFilter) -> DbErrorResult<Vec<Batch>> {
        let sql = format!(
            r#"
                SELECT {} FROM batches
                WHERE deleted_at IS NULL
                  AND (? IS NULL OR farmer_id = ?)
                  AND (? IS NULL OR status = ?)
                ORDER BY created_at DESC, batch_code ASC
            "#,
            BATCH_COLUMNS
        );
        let farmer_id = filter.farmer_id.map(|id| id.to_string());
        let status = filter.status.map(|s| s.as_str());

        let rows = sqlx::query(&sql)
            .bind(&farmer_id)
            .bind(&farmer_id)
            .bind(status)
            .bind(status)
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(batch_from_row).collect()
    }

    /// Number of batches ever created for a farmer, soft-deleted ones included,
    /// so a suggested code is never reused.
    pub async fn count_by_farmer(&self, farmer_id: Uuid) -> DbErrorResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM batches WHERE farmer_id = ?")
            .bind(farmer_id.to_string())
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    pub async fn update(&self, batch: &Batch) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                UPDATE batches
                SET batch_code = ?, farmer_id = ?, farm_id = ?, product_id = ?,
                    variety = ?, altitude_masl = ?, quantity_kg = ?,
                    harvest_date = ?, roast_date = ?, pack_date = ?,
                    distribution_date = ?, retail_date = ?,
                    processing_method = ?, drying_method = ?, transport_mode = ?,
                    status = ?, notes = ?, version = ?, updated_at = ?
                WHERE id = ? AND deleted_at IS NULL
            "#,
        )
        .bind(&batch.batch_code)
        .bind(batch.farmer_id.to_string())
        .bind(batch.farm_id.map(|id| id.to_string()))
        .bind(batch.product_id.map(|id| id.to_string()))
        .bind(&batch.variety)
        .bind(batch.altitude_masl)
        .bind(batch.quantity_kg)
        .bind(date_text(batch.harvest_date))
        .bind(date_text(batch.roast_date))
        .bind(date_text(batch.pack_date))
        .bind(date_text(batch.distribution_date))
        .bind(date_text(batch.retail_date))
        .bind(&batch.processing_method)
        .bind(&batch.drying_method)
        .bind(&batch.transport_mode)
        .bind(batch.status.as_str())
        .bind(&batch.notes)
        .bind(batch.version)
        .bind(batch.updated_at.timestamp())
        .bind(batch.id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn delete(&self, id: Uuid, deleted_at: i64) -> DbErrorResult<()> {
        sqlx::query("UPDATE batches SET deleted_at = ? WHERE id = ? AND deleted_at IS NULL")
            .bind(deleted_at)
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

fn date_text(date: Option<NaiveDate>) -> Option<String> {
    date.map(|d| d.format("%Y-%m-%d").to_string())
}

fn milestone(r: &SqliteRow, source: DateSource) -> DbErrorResult<Option<NaiveDate>> {
    let column = source.field_name();
    let raw: Option<String> = r.try_get(column)?;
    Ok(raw.and_then(|value| {
        let parsed = parse_milestone_date(&value);
        if parsed.is_none() && !value.trim().is_empty() {
            warn!("Ignoring unparseable {} value {:?}", column, value);
        }
        parsed
    }))
}

fn batch_from_row(r: &SqliteRow) -> DbErrorResult<Batch> {
    Ok(Batch {
        id: row::uuid(r, "id")?,
        batch_code: r.try_get("batch_code")?,
        farmer_id: row::uuid(r, "farmer_id")?,
        farm_id: row::optional_uuid(r, "farm_id")?,
        product_id: row::optional_uuid(r, "product_id")?,
        variety: r.try_get("variety")?,
        altitude_masl: r.try_get("altitude_masl")?,
        quantity_kg: r.try_get("quantity_kg")?,
        harvest_date: milestone(r, DateSource::Harvest)?,
        roast_date: milestone(r, DateSource::Roast)?,
        pack_date: milestone(r, DateSource::Pack)?,
        distribution_date: milestone(r, DateSource::Distribution)?,
        retail_date: milestone(r, DateSource::Retail)?,
        processing_method: r.try_get("processing_method")?,
        drying_method: r.try_get("drying_method")?,
        transport_mode: r.try_get("transport_mode")?,
        status: row::parsed(r, "status")?,
        notes: r.try_get("notes")?,
        version: r.try_get("version")?,
        created_at: row::timestamp(r, "created_at")?,
        updated_at: row::timestamp(r, "updated_at")?,
        deleted_at: row::optional_timestamp(r, "deleted_at")?,
    })
}
