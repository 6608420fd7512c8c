use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Category;

pub async fn list(pool: &PgPool, company_id: Uuid) -> Result<Vec<Category>, sqlx::Error> {
    sqlx::query_as::<_, Category>(
        "SELECT * FROM categories WHERE company_id = $1 ORDER BY type",
    )
    .bind(company_id)
    .fetch_all(pool)
    .await
}

pub async fn create(
    pool: &PgPool,
    company_id: Uuid,
    category_type: &str,
    enabled: bool,
    created_by: Uuid,
) -> Result<Category, sqlx::Error> {
    sqlx::query_as::<_, Category>(
        "INSERT INTO categories (company_id, type, enabled, created_by)
         VALUES ($1, $2, $3, $4) RETURNING *",
    )
    .bind(company_id)
    .bind(category_type)
    .bind(enabled)
    .bind(created_by)
    .fetch_one(pool)
    .await
}

pub async fn find_by_id(
    pool: &PgPool,
    id: Uuid,
    company_id: Uuid,
) -> Result<Option<Category>, sqlx::Error> {
    sqlx::query_as::<_, Category>(
        "SELECT * FROM categories WHERE id = $1 AND company_id = $2",
    )
    .bind(id)
    .bind(company_id)
    .fetch_optional(pool)
    .await
}

pub async fn find_by_type(
    pool: &PgPool,
    company_id: Uuid,
    category_type: &str,
) -> Result<Option<Category>, sqlx::Error> {
    sqlx::query_as::<_, Category>(
        "SELECT * FROM categories WHERE company_id = $1 AND type = $2",
    )
    .bind(company_id)
    .bind(category_type)
    .fetch_optional(pool)
    .await
}

pub async fn update(
    pool: &PgPool,
    id: Uuid,
    company_id: Uuid,
    category_type: &str,
    enabled: bool,
) -> Result<Category, sqlx::Error> {
    sqlx::query_as::<_, Category>(
        "UPDATE categories SET type = $3, enabled = $4, updated_at = now()
         WHERE id = $1 AND company_id = $2 RETURNING *",
    )
    .bind(id)
    .bind(company_id)
    .bind(category_type)
    .bind(enabled)
    .fetch_one(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: Uuid, company_id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM categories WHERE id = $1 AND company_id = $2")
        .bind(id)
        .bind(company_id)
        .execute(pool)
        .await?;
    Ok(())
}
