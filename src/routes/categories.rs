use axum::extract::{Path, State};
use axum::http::{header, HeaderMap};
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::auth::extractor::AuthUser;
use crate::db;
use crate::error::AppError;
use crate::middleware::audit;
use crate::models::Category;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct CreateCategory {
    #[serde(rename = "type")]
    pub category_type: String,
    /// Accepts any JSON representation; coerced through truthiness.
    #[serde(default)]
    pub enabled: Value,
}

#[derive(Deserialize)]
pub struct UpdateCategory {
    #[serde(rename = "type")]
    pub category_type: String,
    #[serde(default)]
    pub enabled: Value,
}

/// Coerce a raw `enabled` value to a strict boolean, the way loosely typed
/// form backends do: null, false, 0, "" and "0" are off, anything else on.
pub fn coerce_enabled(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty() && s != "0",
        Value::Array(items) => !items.is_empty(),
        Value::Object(_) => true,
    }
}

pub async fn list(
    auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<Json<Vec<Category>>, AppError> {
    let categories = db::categories::list(&state.pool, auth.company_id()).await?;
    Ok(Json(categories))
}

pub async fn create(
    auth: AuthUser,
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(req): Json<CreateCategory>,
) -> Result<Response, AppError> {
    let category_type = req.category_type.trim();
    if category_type.is_empty() {
        return Err(AppError::BadRequest(
            "A category type is required".to_string(),
        ));
    }
    let enabled = coerce_enabled(&req.enabled);

    // Friendly pre-check; the unique index still decides under concurrency.
    if db::categories::find_by_type(&state.pool, auth.company_id(), category_type)
        .await?
        .is_some()
    {
        return Err(AppError::duplicate_field("type", category_type));
    }

    let category = db::categories::create(
        &state.pool,
        auth.company_id(),
        category_type,
        enabled,
        auth.user_id,
    )
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            AppError::duplicate_field("type", category_type)
        }
        _ => AppError::Database(e),
    })?;

    audit::log_event(
        &state.pool,
        auth.company_id(),
        Some(auth.user_id),
        "category.created",
        "category",
        Some(category.id),
        None,
    )
    .await;

    // Form submissions return to the page the action started from.
    if let Some(previous_url) = headers
        .get(header::REFERER)
        .and_then(|value| value.to_str().ok())
    {
        return Ok(Redirect::to(previous_url).into_response());
    }

    Ok(Json(category).into_response())
}

pub async fn get(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Category>, AppError> {
    let category = db::categories::find_by_id(&state.pool, id, auth.company_id())
        .await?
        .ok_or_else(|| AppError::NotFound("Category not found".to_string()))?;
    Ok(Json(category))
}

pub async fn update(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateCategory>,
) -> Result<Json<Category>, AppError> {
    let category_type = req.category_type.trim();
    if category_type.is_empty() {
        return Err(AppError::BadRequest(
            "A category type is required".to_string(),
        ));
    }
    let enabled = coerce_enabled(&req.enabled);

    let category = db::categories::update(
        &state.pool,
        id,
        auth.company_id(),
        category_type,
        enabled,
    )
    .await
    .map_err(|e| match e {
        sqlx::Error::RowNotFound => AppError::NotFound("Category not found".to_string()),
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            AppError::duplicate_field("type", category_type)
        }
        _ => AppError::Database(e),
    })?;

    audit::log_event(
        &state.pool,
        auth.company_id(),
        Some(auth.user_id),
        "category.updated",
        "category",
        Some(category.id),
        None,
    )
    .await;

    Ok(Json(category))
}

pub async fn delete(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    db::categories::delete(&state.pool, id, auth.company_id()).await?;

    audit::log_event(
        &state.pool,
        auth.company_id(),
        Some(auth.user_id),
        "category.deleted",
        "category",
        Some(id),
        None,
    )
    .await;

    Ok(Json(serde_json::json!({ "message": "Deleted" })))
}
