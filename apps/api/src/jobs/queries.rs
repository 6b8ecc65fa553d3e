use sqlx::PgPool;
use uuid::Uuid;

use crate::models::job::{JobRow, JobUpdate, NewJob};

/// Creates a job via the `create_job` stored procedure, returning the new id.
pub async fn create_job(
    pool: &PgPool,
    company_id: Uuid,
    job: &NewJob,
    created_by: Uuid,
) -> Result<Uuid, sqlx::Error> {
    sqlx::query_scalar(
        "SELECT create_job($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)",
    )
    .bind(company_id)
    .bind(&job.title)
    .bind(&job.department)
    .bind(&job.description)
    .bind(&job.requirements)
    .bind(&job.responsibilities)
    .bind(&job.skills)
    .bind(&job.location)
    .bind(job.job_type.as_deref().unwrap_or("full-time"))
    .bind(&job.experience_level)
    .bind(job.min_experience_years)
    .bind(job.max_experience_years)
    .bind(job.salary_min)
    .bind(job.salary_max)
    .bind(job.remote_allowed.unwrap_or(false))
    .bind(created_by)
    .fetch_one(pool)
    .await
}

/// Lists jobs newest first, optionally scoped to one company.
pub async fn list_jobs(
    pool: &PgPool,
    company_id: Option<Uuid>,
) -> Result<Vec<JobRow>, sqlx::Error> {
    match company_id {
        Some(company_id) => {
            sqlx::query_as(
                "SELECT * FROM jobs WHERE company_id = $1 ORDER BY created_at DESC",
            )
            .bind(company_id)
            .fetch_all(pool)
            .await
        }
        None => {
            sqlx::query_as("SELECT * FROM jobs ORDER BY created_at DESC")
                .fetch_all(pool)
                .await
        }
    }
}

pub async fn get_job(pool: &PgPool, id: Uuid) -> Result<Option<JobRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM jobs WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Partial update with COALESCE semantics: absent fields keep their values.
pub async fn update_job(
    pool: &PgPool,
    id: Uuid,
    updates: &JobUpdate,
) -> Result<Option<JobRow>, sqlx::Error> {
    sqlx::query_as(
        r#"
        UPDATE jobs SET
            title = COALESCE($2, title),
            department = COALESCE($3, department),
            description = COALESCE($4, description),
            requirements = COALESCE($5, requirements),
            responsibilities = COALESCE($6, responsibilities),
            skills = COALESCE($7, skills),
            location = COALESCE($8, location),
            job_type = COALESCE($9, job_type),
            experience_level = COALESCE($10, experience_level),
            salary_min = COALESCE($11, salary_min),
            salary_max = COALESCE($12, salary_max),
            remote_allowed = COALESCE($13, remote_allowed),
            positions_available = COALESCE($14, positions_available),
            updated_at = NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(&updates.title)
    .bind(&updates.department)
    .bind(&updates.description)
    .bind(&updates.requirements)
    .bind(&updates.responsibilities)
    .bind(&updates.skills)
    .bind(&updates.location)
    .bind(&updates.job_type)
    .bind(&updates.experience_level)
    .bind(updates.salary_min)
    .bind(updates.salary_max)
    .bind(updates.remote_allowed)
    .bind(updates.positions_available)
    .fetch_optional(pool)
    .await
}

/// Soft delete: the row stays, `is_active` goes false.
pub async fn deactivate_job(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("UPDATE jobs SET is_active = FALSE, updated_at = NOW() WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
