use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use crate::auth::session::Identity;
use crate::auth::validation::sanitize_input;
use crate::errors::AppError;
use crate::jobs::queries;
use crate::models::job::{JobRow, JobUpdate, NewJob};
use crate::state::AppState;

fn sanitize_opt(value: Option<String>) -> Option<String> {
    value.map(|v| sanitize_input(&v))
}

fn sanitize_new_job(job: NewJob) -> NewJob {
    NewJob {
        title: sanitize_input(&job.title),
        department: sanitize_opt(job.department),
        description: sanitize_opt(job.description),
        location: sanitize_opt(job.location),
        experience_level: sanitize_opt(job.experience_level),
        ..job
    }
}

fn sanitize_job_update(updates: JobUpdate) -> JobUpdate {
    JobUpdate {
        title: sanitize_opt(updates.title),
        department: sanitize_opt(updates.department),
        description: sanitize_opt(updates.description),
        location: sanitize_opt(updates.location),
        experience_level: sanitize_opt(updates.experience_level),
        ..updates
    }
}

/// Loads the job and checks that it belongs to the caller's organization.
async fn owned_job(
    state: &AppState,
    identity: &Identity,
    id: Uuid,
) -> Result<JobRow, AppError> {
    let pool = state.db.pool()?;
    let job = queries::get_job(pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))?;

    if identity.company_id != Some(job.company_id) {
        return Err(AppError::Forbidden);
    }
    Ok(job)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobResponse {
    pub success: bool,
    pub message: String,
    pub job_id: Uuid,
}

/// POST /api/v1/jobs
pub async fn handle_create_job(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<NewJob>,
) -> Result<(StatusCode, Json<CreateJobResponse>), AppError> {
    let identity = state.sessions.get_session(&jar).ok_or(AppError::Unauthorized)?;
    // Posting jobs requires completed organization onboarding.
    let company_id = identity.company_id.ok_or(AppError::Forbidden)?;
    let pool = state.db.pool()?;

    let job = sanitize_new_job(req);
    if job.title.is_empty() {
        return Err(AppError::Validation("Job title is required".to_string()));
    }

    let job_id = queries::create_job(pool, company_id, &job, identity.user_id)
        .await
        .map_err(|e| {
            AppError::backend("Failed to create job", e, state.config.debug_errors())
        })?;

    info!("Created job {job_id} for company {company_id}");

    Ok((
        StatusCode::CREATED,
        Json(CreateJobResponse {
            success: true,
            message: "Job created successfully".to_string(),
            job_id,
        }),
    ))
}

#[derive(Deserialize)]
pub struct JobListQuery {
    pub company_id: Option<Uuid>,
}

/// GET /api/v1/jobs
///
/// Defaults to the caller's own organization when no filter is given.
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(params): Query<JobListQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let identity = state.sessions.get_session(&jar).ok_or(AppError::Unauthorized)?;
    let pool = state.db.pool()?;

    let scope = params.company_id.or(identity.company_id);
    let jobs = queries::list_jobs(pool, scope).await?;
    Ok(Json(json!({ "jobs": jobs })))
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    state.sessions.get_session(&jar).ok_or(AppError::Unauthorized)?;
    let pool = state.db.pool()?;

    let job = queries::get_job(pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))?;
    Ok(Json(json!({ "job": job })))
}

#[derive(Serialize)]
pub struct UpdateJobResponse {
    pub success: bool,
    pub message: String,
    pub job: JobRow,
}

/// PUT /api/v1/jobs/:id
pub async fn handle_update_job(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<Uuid>,
    Json(req): Json<JobUpdate>,
) -> Result<Json<UpdateJobResponse>, AppError> {
    let identity = state.sessions.get_session(&jar).ok_or(AppError::Unauthorized)?;
    owned_job(&state, &identity, id).await?;

    let pool = state.db.pool()?;
    let job = queries::update_job(pool, id, &sanitize_job_update(req))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))?;

    Ok(Json(UpdateJobResponse {
        success: true,
        message: "Job updated successfully".to_string(),
        job,
    }))
}

/// DELETE /api/v1/jobs/:id (soft delete)
pub async fn handle_delete_job(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let identity = state.sessions.get_session(&jar).ok_or(AppError::Unauthorized)?;
    owned_job(&state, &identity, id).await?;

    let pool = state.db.pool()?;
    if !queries::deactivate_job(pool, id).await? {
        return Err(AppError::NotFound(format!("Job {id} not found")));
    }

    Ok(Json(json!({
        "success": true,
        "message": "Job deleted successfully"
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_job_update_strips_markup() {
        let updates = JobUpdate {
            title: Some("  <b>Senior Engineer</b> ".to_string()),
            description: Some("Build <script>things</script>".to_string()),
            ..JobUpdate::default()
        };

        let sanitized = sanitize_job_update(updates);
        assert_eq!(sanitized.title.as_deref(), Some("bSenior Engineer/b"));
        assert_eq!(
            sanitized.description.as_deref(),
            Some("Build scriptthings/script")
        );
        assert_eq!(sanitized.department, None);
    }

    #[test]
    fn test_sanitize_new_job_leaves_structured_fields_alone() {
        let job = NewJob {
            title: " Backend Engineer ".to_string(),
            department: None,
            description: None,
            requirements: Some(vec!["Rust".to_string()]),
            responsibilities: None,
            skills: Some(vec!["sqlx".to_string()]),
            location: Some(" Remote <EU> ".to_string()),
            job_type: Some("contract".to_string()),
            experience_level: None,
            min_experience_years: Some(3),
            max_experience_years: None,
            salary_min: Some(90_000),
            salary_max: None,
            remote_allowed: Some(true),
        };

        let sanitized = sanitize_new_job(job);
        assert_eq!(sanitized.title, "Backend Engineer");
        assert_eq!(sanitized.location.as_deref(), Some("Remote EU"));
        assert_eq!(sanitized.requirements, Some(vec!["Rust".to_string()]));
        assert_eq!(sanitized.job_type.as_deref(), Some("contract"));
        assert_eq!(sanitized.min_experience_years, Some(3));
    }
}
