pub mod audit;
pub mod auth;
pub mod categories;
pub mod languages;
pub mod localization;

use axum::routing::{get, post};
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        // Auth
        .route("/api/v1/auth/register", post(auth::register))
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/logout", post(auth::logout))
        // Categories
        .route(
            "/api/v1/categories",
            get(categories::list).post(categories::create),
        )
        .route(
            "/api/v1/categories/{id}",
            get(categories::get)
                .put(categories::update)
                .delete(categories::delete),
        )
        // Localization settings
        .route(
            "/api/v1/settings/localization",
            get(localization::get).put(localization::update),
        )
        .route(
            "/api/v1/settings/localization/fiscal-year",
            get(localization::fiscal_year),
        )
        // Languages
        .route("/api/v1/languages", get(languages::list))
        // Audit trail
        .route("/api/v1/audit-events", get(audit::list))
}
