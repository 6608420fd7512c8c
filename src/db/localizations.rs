use uuid::Uuid;

use crate::models::enums::{DateFormat, NumberFormat, TimeFormat, WeekStart};
use crate::models::Localization;

/// The writable attribute set of a localization row. Creator/modifier ids
/// are stamped separately from the caller's session, never taken from here.
#[derive(Debug, Clone)]
pub struct LocalizationRow<'a> {
    pub language: &'a str,
    pub timezone: &'a str,
    pub date_format: DateFormat,
    pub time_format: TimeFormat,
    pub fiscal_year_end_month: i16,
    pub fiscal_year_end_day: i16,
    pub week_start: WeekStart,
    pub number_format: NumberFormat,
    pub percent_first: bool,
}

pub async fn find_by_company(
    executor: impl sqlx::PgExecutor<'_>,
    company_id: Uuid,
) -> Result<Option<Localization>, sqlx::Error> {
    sqlx::query_as::<_, Localization>("SELECT * FROM localizations WHERE company_id = $1")
        .bind(company_id)
        .fetch_optional(executor)
        .await
}

/// Insert-or-update keyed on the company: the unique index on `company_id`
/// is what enforces the one-row-per-company invariant.
pub async fn upsert(
    executor: impl sqlx::PgExecutor<'_>,
    company_id: Uuid,
    row: &LocalizationRow<'_>,
    user_id: Uuid,
) -> Result<Localization, sqlx::Error> {
    sqlx::query_as::<_, Localization>(
        "INSERT INTO localizations (
             company_id, language, timezone, date_format, time_format,
             fiscal_year_end_month, fiscal_year_end_day, week_start,
             number_format, percent_first, created_by, updated_by
         ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $11)
         ON CONFLICT (company_id) DO UPDATE SET
             language = EXCLUDED.language,
             timezone = EXCLUDED.timezone,
             date_format = EXCLUDED.date_format,
             time_format = EXCLUDED.time_format,
             fiscal_year_end_month = EXCLUDED.fiscal_year_end_month,
             fiscal_year_end_day = EXCLUDED.fiscal_year_end_day,
             week_start = EXCLUDED.week_start,
             number_format = EXCLUDED.number_format,
             percent_first = EXCLUDED.percent_first,
             updated_by = EXCLUDED.updated_by,
             updated_at = now()
         RETURNING *",
    )
    .bind(company_id)
    .bind(row.language)
    .bind(row.timezone)
    .bind(row.date_format)
    .bind(row.time_format)
    .bind(row.fiscal_year_end_month)
    .bind(row.fiscal_year_end_day)
    .bind(row.week_start)
    .bind(row.number_format)
    .bind(row.percent_first)
    .bind(user_id)
    .fetch_one(executor)
    .await
}
