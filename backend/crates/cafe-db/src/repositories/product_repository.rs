use crate::Result as DbErrorResult;
use crate::repositories::row;

use cafe_core::Product;

use sqlx::Row;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

const PRODUCT_COLUMNS: &str = r#"
    id, slug, name_es, name_en, description_es, description_en, roast_level,
    price_cents, weight_grams, image_url, active,
    version, created_at, updated_at, deleted_at
"#;

pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, product: &Product) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO products (
                    id, slug, name_es, name_en, description_es, description_en,
                    roast_level, price_cents, weight_grams, image_url, active,
                    version, created_at, updated_at, deleted_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(product.id.to_string())
        .bind(&product.slug)
        .bind(&product.name_es)
        .bind(&product.name_en)
        .bind(&product.description_es)
        .bind(&product.description_en)
        .bind(product.roast_level.as_str())
        .bind(product.price_cents)
        .bind(product.weight_grams)
        .bind(&product.image_url)
        .bind(product.active)
        .bind(product.version)
        .bind(product.created_at.timestamp())
        .bind(product.updated_at.timestamp())
        .bind(product.deleted_at.map(|dt| dt.timestamp()))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Product>> {
        let sql = format!(
            "SELECT {} FROM products WHERE id = ? AND deleted_at IS NULL",
            PRODUCT_COLUMNS
        );

        let row = sqlx::query(&sql)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(product_from_row).transpose()
    }

    /// Like `find_by_id`, but also returns soft-deleted rows.
    pub async fn find_by_id_including_deleted(&self, id: Uuid) -> DbErrorResult<Option<Product>> {
        let sql = format!("SELECT {} FROM products WHERE id = ?", PRODUCT_COLUMNS);

        let row = sqlx::query(&sql)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(product_from_row).transpose()
    }

    pub async fn find_by_slug(&self, slug: &str) -> DbErrorResult<Option<Product>> {
        let sql = format!(
            "SELECT {} FROM products WHERE slug = ? AND deleted_at IS NULL",
            PRODUCT_COLUMNS
        );

        let row = sqlx::query(&sql)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(product_from_row).transpose()
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<Product>> {
        let sql = format!(
            "SELECT {} FROM products WHERE deleted_at IS NULL ORDER BY name_es ASC",
            PRODUCT_COLUMNS
        );

        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;

        rows.iter().map(product_from_row).collect()
    }

    /// Products currently offered in the shop.
    pub async fn find_active(&self) -> DbErrorResult<Vec<Product>> {
        let sql = format!(
            "SELECT {} FROM products WHERE active = 1 AND deleted_at IS NULL ORDER BY name_es ASC",
            PRODUCT_COLUMNS
        );

        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;

        rows.iter().map(product_from_row).collect()
    }

    pub async fn update(&self, product: &Product) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                UPDATE products
                SET slug = ?, name_es = ?, name_en = ?, description_es = ?,
                    description_en = ?, roast_level = ?, price_cents = ?,
                    weight_grams = ?, image_url = ?, active = ?,
                    version = ?, updated_at = ?
                WHERE id = ? AND deleted_at IS NULL
            "#,
        )
        .bind(&product.slug)
        .bind(&product.name_es)
        .bind(&product.name_en)
        .bind(&product.description_es)
        .bind(&product.description_en)
        .bind(product.roast_level.as_str())
        .bind(product.price_cents)
        .bind(product.weight_grams)
        .bind(&product.image_url)
        .bind(product.active)
        .bind(product.version)
        .bind(product.updated_at.timestamp())
        .bind(product.id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn delete(&self, id: Uuid, deleted_at: i64) -> DbErrorResult<()> {
        sqlx::query("UPDATE products SET deleted_at = ? WHERE id = ? AND deleted_at IS NULL")
            .bind(deleted_at)
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

fn product_from_row(r: &SqliteRow) -> DbErrorResult<Product> {
    Ok(Product {
        id: row::uuid(r, "id")?,
        slug: r.try_get("slug")?,
        name_es: r.try_get("name_es")?,
        name_en: r.try_get("name_en")?,
        description_es: r.try_get("description_es")?,
        description_en: r.try_get("description_en")?,
        roast_level: row::parsed(r, "roast_level")?,
        price_cents: r.try_get("price_cents")?,
        weight_grams: r.try_get("weight_grams")?,
        image_url: r.try_get("image_url")?,
        active: r.try_get("active")?,
        version: r.try_get("version")?,
        created_at: row::timestamp(r, "created_at")?,
        updated_at: row::timestamp(r, "updated_at")?,
        deleted_at: row::optional_timestamp(r, "deleted_at")?,
    })
}
