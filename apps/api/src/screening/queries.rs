use sqlx::PgPool;

use crate::models::screening::{ParsedResume, ResumeAnalysisRow};

/// Persists a parser result, keeping the candidate identity columns for
/// listing plus the full payload as JSON.
pub async fn insert_resume_analysis(
    pool: &PgPool,
    parsed: &ParsedResume,
) -> Result<ResumeAnalysisRow, sqlx::Error> {
    let data = serde_json::to_value(parsed).unwrap_or_default();

    sqlx::query_as(
        r#"
        INSERT INTO resume_analyses (candidate_id, candidate_name, candidate_email, data)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(&parsed.candidate_info.candidate_id)
    .bind(&parsed.candidate_info.name)
    .bind(&parsed.candidate_info.email)
    .bind(data)
    .fetch_one(pool)
    .await
}

pub async fn list_resume_analyses(pool: &PgPool) -> Result<Vec<ResumeAnalysisRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM resume_analyses ORDER BY created_at DESC")
        .fetch_all(pool)
        .await
}
