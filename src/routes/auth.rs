use axum::extract::State;
use axum::Json;
use axum_extra::extract::cookie::{Cookie, SameSite};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::{encode_token, Claims};
use crate::auth::password;
use crate::config::RegistrationMode;
use crate::db;
use crate::db::localizations::LocalizationRow;
use crate::error::AppError;
use crate::locale;
use crate::middleware::audit;
use crate::models::enums::{DateFormat, NumberFormat, TimeFormat};
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub company_name: String,
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct AuthResponse {
    pub access_token: String,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

fn auth_cookie(access_token: &str) -> CookieJar {
    let access = Cookie::build(("access_token", access_token.to_string()))
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::hours(12))
        .build();

    CookieJar::new().add(access)
}

fn clear_auth_cookie() -> CookieJar {
    let access = Cookie::build(("access_token", ""))
        .path("/")
        .max_age(time::Duration::ZERO)
        .build();
    CookieJar::new().add(access)
}

/// Provision a company: the company row, its owner user, and the default
/// localization row, in one transaction.
pub async fn register(
    State(state): State<SharedState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(CookieJar, Json<AuthResponse>), AppError> {
    if state.config.registration == RegistrationMode::Closed {
        return Err(AppError::Forbidden(
            "Registration is disabled. Contact your administrator.".to_string(),
        ));
    }

    if req.company_name.is_empty() || req.email.is_empty() || req.name.is_empty() {
        return Err(AppError::BadRequest("All fields are required".to_string()));
    }

    if req.password.len() < 8 {
        return Err(AppError::BadRequest(
            "Password must be at least 8 characters".to_string(),
        ));
    }

    let pw_hash = password::hash(&req.password).map_err(AppError::Internal)?;

    let mut tx = state.pool.begin().await?;

    let company = db::companies::create(&mut *tx, &req.company_name).await?;

    let user = db::users::create(
        &mut *tx,
        company.id,
        &req.email,
        &pw_hash,
        &req.name,
        "owner",
    )
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            AppError::Conflict("An account with this email already exists".to_string())
        }
        _ => AppError::Database(e),
    })?;

    // Seed the localization singleton with conventions derived from the
    // configured default locale.
    let language = state.config.default_language.as_str();
    let country = state.config.default_country.as_str();
    let resolved = locale::resolve_locale(state.locales.as_ref(), language, country);
    let defaults = LocalizationRow {
        language,
        timezone: &state.config.default_timezone,
        date_format: DateFormat::DayMonthYear,
        time_format: TimeFormat::TwentyFourHour,
        fiscal_year_end_month: 12,
        fiscal_year_end_day: 31,
        week_start: locale::resolve_week_start(state.locales.as_ref(), &resolved),
        number_format: NumberFormat::CommaDot,
        percent_first: locale::is_percent_first(state.locales.as_ref(), language, country),
    };
    db::localizations::upsert(&mut *tx, company.id, &defaults, user.id).await?;

    tx.commit().await?;

    audit::log_event(
        &state.pool,
        company.id,
        Some(user.id),
        "company.registered",
        "company",
        Some(company.id),
        None,
    )
    .await;

    let claims = Claims::new(user.id, company.id, user.role.clone());
    let token = encode_token(&claims, &state.config.jwt_secret).map_err(AppError::Internal)?;

    Ok((
        auth_cookie(&token),
        Json(AuthResponse {
            access_token: token,
        }),
    ))
}

pub async fn login(
    State(state): State<SharedState>,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<AuthResponse>), AppError> {
    let user = db::users::find_by_email(&state.pool, &req.email)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Invalid email or password".to_string()))?;

    let valid = password::verify(&req.password, &user.password_hash)
        .map_err(AppError::Internal)?;
    if !valid {
        return Err(AppError::Unauthorized(
            "Invalid email or password".to_string(),
        ));
    }

    let claims = Claims::new(user.id, user.company_id, user.role.clone());
    let token = encode_token(&claims, &state.config.jwt_secret).map_err(AppError::Internal)?;

    Ok((
        auth_cookie(&token),
        Json(AuthResponse {
            access_token: token,
        }),
    ))
}

pub async fn logout() -> (CookieJar, Json<MessageResponse>) {
    (
        clear_auth_cookie(),
        Json(MessageResponse {
            message: "Logged out".to_string(),
        }),
    )
}
