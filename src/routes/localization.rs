use axum::extract::State;
use axum::Json;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::extractor::AuthUser;
use crate::db;
use crate::db::localizations::LocalizationRow;
use crate::error::AppError;
use crate::locale;
use crate::middleware::audit;
use crate::models::enums::{DateFormat, NumberFormat, TimeFormat, WeekStart};
use crate::models::localization::valid_fiscal_month_day;
use crate::models::Localization;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct UpdateLocalization {
    pub language: String,
    /// Used only to resolve the locale for derivations; not stored.
    pub country_code: String,
    pub timezone: String,
    pub date_format: DateFormat,
    pub time_format: TimeFormat,
    pub fiscal_year_end_month: i16,
    pub fiscal_year_end_day: i16,
    /// Derived from the locale when omitted.
    pub week_start: Option<WeekStart>,
    pub number_format: NumberFormat,
    /// Derived from the locale when omitted.
    pub percent_first: Option<bool>,
}

#[derive(Serialize)]
pub struct FiscalYear {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// The stored row plus the derived combined display format.
fn localization_body(localization: &Localization) -> Result<serde_json::Value, AppError> {
    let mut body =
        serde_json::to_value(localization).map_err(|e| AppError::Internal(e.to_string()))?;
    body["date_time_format"] = serde_json::Value::String(localization.date_time_format());
    Ok(body)
}

pub async fn get(
    auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<Json<serde_json::Value>, AppError> {
    let localization = db::localizations::find_by_company(&state.pool, auth.company_id())
        .await?
        .ok_or_else(|| AppError::NotFound("Localization settings not found".to_string()))?;
    Ok(Json(localization_body(&localization)?))
}

pub async fn update(
    auth: AuthUser,
    State(state): State<SharedState>,
    Json(req): Json<UpdateLocalization>,
) -> Result<Json<serde_json::Value>, AppError> {
    if req.language.is_empty() {
        return Err(AppError::BadRequest("A language is required".to_string()));
    }
    if req.timezone.is_empty() {
        return Err(AppError::BadRequest("A timezone is required".to_string()));
    }
    if !valid_fiscal_month_day(req.fiscal_year_end_month, req.fiscal_year_end_day) {
        return Err(AppError::BadRequest(
            "Fiscal year end must be a valid month and day".to_string(),
        ));
    }

    let source = state.locales.as_ref();
    let resolved = locale::resolve_locale(source, &req.language, &req.country_code);
    let week_start = req
        .week_start
        .unwrap_or_else(|| locale::resolve_week_start(source, &resolved));
    let percent_first = req
        .percent_first
        .unwrap_or_else(|| locale::is_percent_first(source, &req.language, &req.country_code));

    let row = LocalizationRow {
        language: &req.language,
        timezone: &req.timezone,
        date_format: req.date_format,
        time_format: req.time_format,
        fiscal_year_end_month: req.fiscal_year_end_month,
        fiscal_year_end_day: req.fiscal_year_end_day,
        week_start,
        number_format: req.number_format,
        percent_first,
    };

    let localization =
        db::localizations::upsert(&state.pool, auth.company_id(), &row, auth.user_id).await?;

    audit::log_event(
        &state.pool,
        auth.company_id(),
        Some(auth.user_id),
        "localization.updated",
        "localization",
        Some(localization.id),
        None,
    )
    .await;

    Ok(Json(localization_body(&localization)?))
}

/// Fiscal period boundaries for the company, computed from today on every
/// request, never persisted.
pub async fn fiscal_year(
    auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<Json<FiscalYear>, AppError> {
    let localization = db::localizations::find_by_company(&state.pool, auth.company_id())
        .await?
        .ok_or_else(|| AppError::NotFound("Localization settings not found".to_string()))?;

    let today = Utc::now().date_naive();
    Ok(Json(FiscalYear {
        start_date: localization.fiscal_year_start_date(today),
        end_date: localization.fiscal_year_end_date(today),
    }))
}
