use axum::extract::State;
use axum::Json;

use crate::auth::extractor::AuthUser;
use crate::error::AppError;
use crate::locale::Language;
use crate::state::SharedState;

/// Languages the translation catalog supports, straight from the source.
pub async fn list(
    _auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<Json<Vec<Language>>, AppError> {
    Ok(Json(state.locales.supported_languages()))
}
