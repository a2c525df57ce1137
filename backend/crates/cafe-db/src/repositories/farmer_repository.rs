//! Farmer repository for CRUD operations on farmers.

use crate::Result as DbErrorResult;
use crate::repositories::row;

use cafe_core::Farmer;

use sqlx::Row;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

const FARMER_COLUMNS: &str = r#"
    id, code, name, region, bio_es, bio_en, photo_url,
    version, created_at, updated_at, deleted_at
"#;

pub struct FarmerRepository {
    pool: SqlitePool,
}

impl FarmerRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, farmer: &Farmer) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO farmers (
                    id, code, name, region, bio_es, bio_en, photo_url,
                    version, created_at, updated_at, deleted_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(farmer.id.to_string())
        .bind(&farmer.code)
        .bind(&farmer.name)
        .bind(&farmer.region)
        .bind(&farmer.bio_es)
        .bind(&farmer.bio_en)
        .bind(&farmer.photo_url)
        .bind(farmer.version)
        .bind(farmer.created_at.timestamp())
        .bind(farmer.updated_at.timestamp())
        .bind(farmer.deleted_at.map(|dt| dt.timestamp()))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Farmer>> {
        let sql = format!(
            "SELECT {} FROM farmers WHERE id = ? AND deleted_at IS NULL",
            FARMER_COLUMNS
        );

        let row = sqlx::query(&sql)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(farmer_from_row).transpose()
    }

    /// Like `find_by_id`, but also returns soft-deleted rows.
    pub async fn find_by_id_including_deleted(&self, id: Uuid) -> DbErrorResult<Option<Farmer>> {
        let sql = format!("SELECT {} FROM farmers WHERE id = ?", FARMER_COLUMNS);

        let row = sqlx::query(&sql)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(farmer_from_row).transpose()
    }

    pub async fn find_by_code(&self, code: &str) -> DbErrorResult<Option<Farmer>> {
        let sql = format!(
            "SELECT {} FROM farmers WHERE code = ? AND deleted_at IS NULL",
            FARMER_COLUMNS
        );

        let row = sqlx::query(&sql)
            .bind(code)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(farmer_from_row).transpose()
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<Farmer>> {
        let sql = format!(
            "SELECT {} FROM farmers WHERE deleted_at IS NULL ORDER BY name ASC",
            FARMER_COLUMNS
        );

        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;

        rows.iter().map(farmer_from_row).collect()
    }

    pub async fn update(&self, farmer: &Farmer) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                UPDATE farmers
                SET code = ?, name = ?, region = ?, bio_es = ?, bio_en = ?,
                    photo_url = ?, version = ?, updated_at = ?
                WHERE id = ? AND deleted_at IS NULL
            "#,
        )
        .bind(&farmer.code)
        .bind(&farmer.name)
        .bind(&farmer.region)
        .bind(&farmer.bio_es)
        .bind(&farmer.bio_en)
        .bind(&farmer.photo_url)
        .bind(farmer.version)
        .bind(farmer.updated_at.timestamp())
        .bind(farmer.id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn delete(&self, id: Uuid, deleted_at: i64) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                UPDATE farmers
                SET deleted_at = ?
                WHERE id = ? AND deleted_at IS NULL
            "#,
        )
        .bind(deleted_at)
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

fn farmer_from_row(r: &SqliteRow) -> DbErrorResult<Farmer> {
    Ok(Farmer {
        id: row::uuid(r, "id")?,
        code: r.try_get("code")?,
        name: r.try_get("name")?,
        region: r.try_get("region")?,
        bio_es: r.try_get("bio_es")?,
        bio_en: r.try_get("bio_en")?,
        photo_url: r.try_get("photo_url")?,
        version: r.try_get("version")?,
        created_at: row::timestamp(r, "created_at")?,
        updated_at: row::timestamp(r, "updated_at")?,
        deleted_at: row::optional_timestamp(r, "deleted_at")?,
    })
}
