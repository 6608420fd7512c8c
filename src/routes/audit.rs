use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::auth::extractor::AuthUser;
use crate::db;
use crate::error::AppError;
use crate::models::AuditEvent;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct Pagination {
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

fn default_limit() -> i64 {
    50
}

pub async fn list(
    auth: AuthUser,
    State(state): State<SharedState>,
    Query(page): Query<Pagination>,
) -> Result<Json<Vec<AuditEvent>>, AppError> {
    let events = db::audit::list(
        &state.pool,
        auth.company_id(),
        page.limit.clamp(1, 200),
        page.offset.max(0),
    )
    .await?;
    Ok(Json(events))
}
