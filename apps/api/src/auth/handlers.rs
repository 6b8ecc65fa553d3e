use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::queries;
use crate::auth::session::Identity;
use crate::auth::validation::{sanitize_input, validate_email, validate_password};
use crate::errors::AppError;
use crate::models::user::UserResponse;
use crate::state::AppState;

const MIN_FULL_NAME_LEN: usize = 2;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub full_name: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub success: bool,
    pub message: String,
    pub user_id: Uuid,
}

/// POST /api/v1/auth/register
pub async fn handle_register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    let pool = state.db.pool()?;

    if req.email.is_empty()
        || req.password.is_empty()
        || req.confirm_password.is_empty()
        || req.full_name.is_empty()
    {
        return Err(AppError::Validation("All fields are required".to_string()));
    }

    if req.password != req.confirm_password {
        return Err(AppError::Validation("Passwords do not match".to_string()));
    }

    let email = sanitize_input(&req.email.to_lowercase());
    if !validate_email(&email) {
        return Err(AppError::Validation("Invalid email format".to_string()));
    }

    let password_check = validate_password(&req.password);
    if !password_check.valid {
        return Err(AppError::Validation(password_check.errors.join(", ")));
    }

    let full_name = sanitize_input(&req.full_name);
    if full_name.chars().count() < MIN_FULL_NAME_LEN {
        return Err(AppError::Validation(
            "Full name must be at least 2 characters long".to_string(),
        ));
    }

    let user_id = queries::register_hr_user(pool, &email, &req.password, &full_name)
        .await
        .map_err(|e| {
            if e.to_string().contains("Email already exists") {
                AppError::Conflict("An account with this email already exists".to_string())
            } else {
                AppError::backend(
                    "Registration failed. Please try again.",
                    e,
                    state.config.debug_errors(),
                )
            }
        })?;

    info!("Registered new HR user {user_id}");

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            success: true,
            message: "Registration successful! Please login.".to_string(),
            user_id,
        }),
    ))
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub user: UserResponse,
}

/// POST /api/v1/auth/login
///
/// Bad credentials collapse to a single 401 regardless of which check failed.
pub async fn handle_login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<LoginResponse>), AppError> {
    let pool = state.db.pool()?;

    if req.email.is_empty() || req.password.is_empty() {
        return Err(AppError::Validation(
            "Email and password are required".to_string(),
        ));
    }

    let email = sanitize_input(&req.email.to_lowercase());
    if !validate_email(&email) {
        return Err(AppError::Validation("Invalid email format".to_string()));
    }

    let user = queries::verify_user_password(pool, &email, &req.password)
        .await
        .map_err(|e| {
            AppError::backend(
                "Login failed. Please try again.",
                e,
                state.config.debug_errors(),
            )
        })?
        .ok_or(AppError::Unauthorized)?;

    // Best-effort bookkeeping; a failure here must not block the login.
    if let Err(e) = queries::update_last_login(pool, user.user_id).await {
        warn!("Failed to update last login for {}: {e}", user.user_id);
    }

    let identity: Identity = user.into();
    let (jar, _token) = state.sessions.create_session(jar, identity.clone())?;

    Ok((
        jar,
        Json(LoginResponse {
            success: true,
            message: "Login successful".to_string(),
            user: identity.into(),
        }),
    ))
}

/// POST /api/v1/auth/logout
///
/// Best-effort: deletes the browser's cookie only. A still-unexpired token
/// remains valid if replayed; see `auth::session` for the tradeoff.
pub async fn handle_logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<serde_json::Value>) {
    let jar = state.sessions.clear_session(jar);
    (
        jar,
        Json(json!({ "success": true, "message": "Logout successful" })),
    )
}

/// GET /api/v1/auth/session
pub async fn handle_session(State(state): State<AppState>, jar: CookieJar) -> Response {
    match state.sessions.get_session(&jar) {
        Some(identity) => Json(json!({
            "authenticated": true,
            "user": UserResponse::from(identity)
        }))
        .into_response(),
        None => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "authenticated": false })),
        )
            .into_response(),
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCompanyRequest {
    pub company_id: Uuid,
}

#[derive(Serialize)]
pub struct UpdateCompanyResponse {
    pub success: bool,
    pub message: String,
    pub user: UserResponse,
}

/// POST /api/v1/auth/company
///
/// Attaches the caller's organization. The claims are never patched in
/// place: a new identity is built and a fresh token supersedes the old one.
pub async fn handle_update_company(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<UpdateCompanyRequest>,
) -> Result<(CookieJar, Json<UpdateCompanyResponse>), AppError> {
    let identity = state.sessions.get_session(&jar).ok_or(AppError::Unauthorized)?;
    let pool = state.db.pool()?;

    queries::update_user_company(pool, identity.user_id, req.company_id)
        .await
        .map_err(|e| {
            AppError::backend(
                "Failed to update company",
                e,
                state.config.debug_errors(),
            )
        })?;

    let updated = identity.with_company(req.company_id);
    let (jar, _token) = state.sessions.create_session(jar, updated.clone())?;

    Ok((
        jar,
        Json(UpdateCompanyResponse {
            success: true,
            message: "Company updated successfully".to_string(),
            user: updated.into(),
        }),
    ))
}
