use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::CookieJar;
use serde::Serialize;
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::screening::ParsedResume;
use crate::screening::queries;
use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub success: bool,
    pub record_id: Uuid,
    pub analysis: ParsedResume,
}

/// POST /api/v1/resumes/analyze
///
/// Accepts a multipart resume upload, forwards it to the parsing service,
/// and stores the structured result.
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    jar: CookieJar,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<AnalyzeResponse>), AppError> {
    state.sessions.get_session(&jar).ok_or(AppError::Unauthorized)?;
    let pool = state.db.pool()?;

    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() == Some("file") {
            let file_name = field
                .file_name()
                .unwrap_or("resume.pdf")
                .to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
            upload = Some((file_name, data));
            break;
        }
    }

    let (file_name, data) =
        upload.ok_or_else(|| AppError::Validation("A 'file' field is required".to_string()))?;
    if data.is_empty() {
        return Err(AppError::Validation("Uploaded file is empty".to_string()));
    }

    let parsed = state.parser.parse(&file_name, data).await?;
    let record = queries::insert_resume_analysis(pool, &parsed).await?;

    info!(
        "Stored resume analysis {} for candidate {}",
        record.id, record.candidate_id
    );

    Ok((
        StatusCode::CREATED,
        Json(AnalyzeResponse {
            success: true,
            record_id: record.id,
            analysis: parsed,
        }),
    ))
}

/// GET /api/v1/candidates
pub async fn handle_list_candidates(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Json<serde_json::Value>, AppError> {
    state.sessions.get_session(&jar).ok_or(AppError::Unauthorized)?;
    let pool = state.db.pool()?;

    let candidates = queries::list_resume_analyses(pool).await?;
    Ok(Json(json!({ "candidates": candidates })))
}
