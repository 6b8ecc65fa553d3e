use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobRow {
    pub id: Uuid,
    pub company_id: Uuid,
    pub title: String,
    pub department: Option<String>,
    pub description: Option<String>,
    pub requirements: Option<Vec<String>>,
    pub responsibilities: Option<Vec<String>>,
    pub skills: Option<Vec<String>>,
    pub location: Option<String>,
    pub job_type: String,
    pub experience_level: Option<String>,
    pub min_experience_years: Option<i32>,
    pub max_experience_years: Option<i32>,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub salary_currency: String,
    pub remote_allowed: bool,
    pub positions_available: i32,
    pub is_active: bool,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body for job creation. `company_id` and `created_by` come from the
/// caller's session claims, not the request body.
#[derive(Debug, Clone, Deserialize)]
pub struct NewJob {
    pub title: String,
    pub department: Option<String>,
    pub description: Option<String>,
    pub requirements: Option<Vec<String>>,
    pub responsibilities: Option<Vec<String>>,
    pub skills: Option<Vec<String>>,
    pub location: Option<String>,
    pub job_type: Option<String>,
    pub experience_level: Option<String>,
    pub min_experience_years: Option<i32>,
    pub max_experience_years: Option<i32>,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub remote_allowed: Option<bool>,
}

/// Partial update; absent fields keep their current values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobUpdate {
    pub title: Option<String>,
    pub department: Option<String>,
    pub description: Option<String>,
    pub requirements: Option<Vec<String>>,
    pub responsibilities: Option<Vec<String>>,
    pub skills: Option<Vec<String>>,
    pub location: Option<String>,
    pub job_type: Option<String>,
    pub experience_level: Option<String>,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub remote_allowed: Option<bool>,
    pub positions_available: Option<i32>,
}
