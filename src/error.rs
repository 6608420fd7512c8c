use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    Unauthorized(String),
    Forbidden(String),
    BadRequest(String),
    Conflict(String),
    /// A uniqueness violation on a single input field, reported back to the
    /// form as a field-level error rather than a generic fault.
    DuplicateField { field: &'static str, value: String },
    Internal(String),
    Database(sqlx::Error),
}

impl AppError {
    pub fn duplicate_field(field: &'static str, value: impl Into<String>) -> Self {
        AppError::DuplicateField {
            field,
            value: value.into(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not Found: {msg}"),
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {msg}"),
            AppError::Forbidden(msg) => write!(f, "Forbidden: {msg}"),
            AppError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            AppError::Conflict(msg) => write!(f, "Conflict: {msg}"),
            AppError::DuplicateField { field, value } => {
                write!(f, "Duplicate {field}: {value}")
            }
            AppError::Internal(msg) => write!(f, "Internal Error: {msg}"),
            AppError::Database(err) => write!(f, "Database Error: {err}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(msg) => error_body(StatusCode::NOT_FOUND, &msg),
            AppError::Unauthorized(msg) => error_body(StatusCode::UNAUTHORIZED, &msg),
            AppError::Forbidden(msg) => error_body(StatusCode::FORBIDDEN, &msg),
            AppError::BadRequest(msg) => error_body(StatusCode::BAD_REQUEST, &msg),
            AppError::Conflict(msg) => error_body(StatusCode::CONFLICT, &msg),
            AppError::DuplicateField { field, value } => {
                let body = json!({
                    "error": format!("A record with this {field} already exists."),
                    "field": field,
                    "value": value,
                });
                (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(body)).into_response()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {msg}");
                error_body(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
            AppError::Database(err) => {
                tracing::error!("Database error: {err}");
                error_body(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}

fn error_body(status: StatusCode, message: &str) -> Response {
    let body = json!({ "error": message });
    (status, axum::Json(body)).into_response()
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Database(err)
    }
}
