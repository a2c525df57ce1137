use crate::Result as DbErrorResult;
use crate::repositories::row;

use cafe_core::Farm;

use sqlx::Row;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

const FARM_COLUMNS: &str = r#"
    id, farmer_id, name, region, altitude_masl, area_hectares, varieties,
    version, created_at, updated_at, deleted_at
"#;

pub struct FarmRepository {
    pool: SqlitePool,
}

impl FarmRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, farm: &Farm) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO farms (
                    id, farmer_id, name, region, altitude_masl, area_hectares,
                    varieties, version, created_at, updated_at, deleted_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(farm.id.to_string())
        .bind(farm.farmer_id.to_string())
        .bind(&farm.name)
        .bind(&farm.region)
        .bind(farm.altitude_masl)
        .bind(farm.area_hectares)
        .bind(&farm.varieties)
        .bind(farm.version)
        .bind(farm.created_at.timestamp())
        .bind(farm.updated_at.timestamp())
        .bind(farm.deleted_at.map(|dt| dt.timestamp()))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Farm>> {
        let sql = format!(
            "SELECT {} FROM farms WHERE id = ? AND deleted_at IS NULL",
            FARM_COLUMNS
        );

        let row = sqlx::query(&sql)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(farm_from_row).transpose()
    }

    /// Like `find_by_id`, but also returns soft-deleted rows.
    pub async fn find_by_id_including_deleted(&self, id: Uuid) -> DbErrorResult<Option<Farm>> {
        let sql = format!("SELECT {} FROM farms WHERE id = ?", FARM_COLUMNS);

        let row = sqlx::query(&sql)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(farm_from_row).transpose()
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<Farm>> {
        let sql = format!(
            "SELECT {} FROM farms WHERE deleted_at IS NULL ORDER BY name ASC",
            FARM_COLUMNS
        );

        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;

        rows.iter().map(farm_from_row).collect()
    }

    pub async fn find_by_farmer(&self, farmer_id: Uuid) -> DbErrorResult<Vec<Farm>> {
        let sql = format!(
            "SELECT {} FROM farms WHERE farmer_id = ? AND deleted_at IS NULL ORDER BY name ASC",
            FARM_COLUMNS
        );

        let rows = sqlx::query(&sql)
            .bind(farmer_id.to_string())
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(farm_from_row).collect()
    }

    pub async fn update(&self, farm: &Farm) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                UPDATE farms
                SET farmer_id = ?, name = ?, region = ?, altitude_masl = ?,
                    area_hectares = ?, varieties = ?, version = ?, updated_at = ?
                WHERE id = ? AND deleted_at IS NULL
            "#,
        )
        .bind(farm.farmer_id.to_string())
        .bind(&farm.name)
        .bind(&farm.region)
        .bind(farm.altitude_masl)
        .bind(farm.area_hectares)
        .bind(&farm.varieties)
        .bind(farm.version)
        .bind(farm.updated_at.timestamp())
        .bind(farm.id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn delete(&self, id: Uuid, deleted_at: i64) -> DbErrorResult<()> {
        sqlx::query("UPDATE farms SET deleted_at = ? WHERE id = ? AND deleted_at IS NULL")
            .bind(deleted_at)
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

fn farm_from_row(r: &SqliteRow) -> DbErrorResult<Farm> {
    Ok(Farm {
        id: row::uuid(r, "id")?,
        farmer_id: row::uuid(r, "farmer_id")?,
        name: r.try_get("name")?,
        region: r.try_get("region")?,
        altitude_masl: r.try_get("altitude_masl")?,
        area_hectares: r.try_get("area_hectares")?,
        varieties: r.try_get("varieties")?,
        version: r.try_get("version")?,
        created_at: row::timestamp(r, "created_at")?,
        updated_at: row::timestamp(r, "updated_at")?,
        deleted_at: row::optional_timestamp(r, "deleted_at")?,
    })
}
