use crate::models::Company;

pub async fn create(
    executor: impl sqlx::PgExecutor<'_>,
    name: &str,
) -> Result<Company, sqlx::Error> {
    sqlx::query_as::<_, Company>("INSERT INTO companies (name) VALUES ($1) RETURNING *")
        .bind(name)
        .fetch_one(executor)
        .await
}
