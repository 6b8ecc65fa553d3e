use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::CookieJar;
use serde::Serialize;
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use crate::auth::validation::sanitize_input;
use crate::company::queries;
use crate::errors::AppError;
use crate::models::company::{CompanyRow, CompanyUpdate, NewCompany};
use crate::state::AppState;

fn sanitize_opt(value: Option<String>) -> Option<String> {
    value.map(|v| sanitize_input(&v))
}

fn sanitize_new_company(company: NewCompany) -> NewCompany {
    NewCompany {
        company_name: sanitize_input(&company.company_name),
        industry: sanitize_opt(company.industry),
        company_size: sanitize_opt(company.company_size),
        website: sanitize_opt(company.website),
        description: sanitize_opt(company.description),
        contact_email: sanitize_opt(company.contact_email),
        contact_phone: sanitize_opt(company.contact_phone),
        address: sanitize_opt(company.address),
        city: sanitize_opt(company.city),
        state: sanitize_opt(company.state),
        country: sanitize_opt(company.country),
        postal_code: sanitize_opt(company.postal_code),
    }
}

fn sanitize_company_update(updates: CompanyUpdate) -> CompanyUpdate {
    CompanyUpdate {
        company_name: sanitize_opt(updates.company_name),
        industry: sanitize_opt(updates.industry),
        company_size: sanitize_opt(updates.company_size),
        website: sanitize_opt(updates.website),
        description: sanitize_opt(updates.description),
        contact_email: sanitize_opt(updates.contact_email),
        contact_phone: sanitize_opt(updates.contact_phone),
        address: sanitize_opt(updates.address),
        city: sanitize_opt(updates.city),
        state: sanitize_opt(updates.state),
        country: sanitize_opt(updates.country),
        postal_code: sanitize_opt(updates.postal_code),
    }
}

#[derive(Serialize)]
pub struct CompanyResponse {
    pub success: bool,
    pub message: String,
    pub company: CompanyRow,
}

/// POST /api/v1/companies
pub async fn handle_create_company(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<NewCompany>,
) -> Result<(StatusCode, Json<CompanyResponse>), AppError> {
    state.sessions.get_session(&jar).ok_or(AppError::Unauthorized)?;
    let pool = state.db.pool()?;

    let company = sanitize_new_company(req);
    if company.company_name.is_empty() {
        return Err(AppError::Validation("Company name is required".to_string()));
    }

    let company_id = queries::create_company(pool, &company).await.map_err(|e| {
        AppError::backend("Failed to create company", e, state.config.debug_errors())
    })?;

    let created = queries::get_company(pool, company_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Company {company_id} not found")))?;

    info!("Created company {company_id}");

    Ok((
        StatusCode::CREATED,
        Json(CompanyResponse {
            success: true,
            message: "Company created successfully".to_string(),
            company: created,
        }),
    ))
}

/// GET /api/v1/companies
pub async fn handle_list_companies(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Json<serde_json::Value>, AppError> {
    state.sessions.get_session(&jar).ok_or(AppError::Unauthorized)?;
    let pool = state.db.pool()?;

    let companies = queries::list_companies(pool).await?;
    Ok(Json(json!({ "companies": companies })))
}

/// GET /api/v1/companies/:id
pub async fn handle_get_company(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    state.sessions.get_session(&jar).ok_or(AppError::Unauthorized)?;
    let pool = state.db.pool()?;

    let company = queries::get_company(pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Company {id} not found")))?;
    Ok(Json(json!({ "company": company })))
}

/// PUT /api/v1/companies/:id
pub async fn handle_update_company(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<Uuid>,
    Json(req): Json<CompanyUpdate>,
) -> Result<Json<CompanyResponse>, AppError> {
    let identity = state.sessions.get_session(&jar).ok_or(AppError::Unauthorized)?;

    // Only members of the organization may edit it.
    if identity.company_id != Some(id) {
        return Err(AppError::Forbidden);
    }

    let pool = state.db.pool()?;
    let updated = queries::update_company(pool, id, &sanitize_company_update(req))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Company {id} not found")))?;

    Ok(Json(CompanyResponse {
        success: true,
        message: "Company updated successfully".to_string(),
        company: updated,
    }))
}

/// DELETE /api/v1/companies/:id (soft delete)
pub async fn handle_delete_company(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let identity = state.sessions.get_session(&jar).ok_or(AppError::Unauthorized)?;

    if identity.company_id != Some(id) {
        return Err(AppError::Forbidden);
    }

    let pool = state.db.pool()?;
    if !queries::deactivate_company(pool, id).await? {
        return Err(AppError::NotFound(format!("Company {id} not found")));
    }

    Ok(Json(json!({
        "success": true,
        "message": "Company deleted successfully"
    })))
}
