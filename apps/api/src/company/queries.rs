use sqlx::PgPool;
use uuid::Uuid;

use crate::models::company::{CompanyRow, CompanyUpdate, NewCompany};

/// Creates a company via the `create_company` stored procedure and returns
/// the new row.
pub async fn create_company(pool: &PgPool, company: &NewCompany) -> Result<Uuid, sqlx::Error> {
    sqlx::query_scalar(
        "SELECT create_company($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)",
    )
    .bind(&company.company_name)
    .bind(&company.industry)
    .bind(&company.company_size)
    .bind(&company.website)
    .bind(&company.description)
    .bind(&company.contact_email)
    .bind(&company.contact_phone)
    .bind(&company.address)
    .bind(&company.city)
    .bind(&company.state)
    .bind(&company.country)
    .bind(&company.postal_code)
    .fetch_one(pool)
    .await
}

pub async fn get_company(pool: &PgPool, id: Uuid) -> Result<Option<CompanyRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM companies WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn list_companies(pool: &PgPool) -> Result<Vec<CompanyRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM companies ORDER BY created_at DESC")
        .fetch_all(pool)
        .await
}

/// Partial update with COALESCE semantics: absent fields keep their values.
pub async fn update_company(
    pool: &PgPool,
    id: Uuid,
    updates: &CompanyUpdate,
) -> Result<Option<CompanyRow>, sqlx::Error> {
    sqlx::query_as(
        r#"
        UPDATE companies SET
            company_name = COALESCE($2, company_name),
            industry = COALESCE($3, industry),
            company_size = COALESCE($4, company_size),
            website = COALESCE($5, website),
            description = COALESCE($6, description),
            contact_email = COALESCE($7, contact_email),
            contact_phone = COALESCE($8, contact_phone),
            address = COALESCE($9, address),
            city = COALESCE($10, city),
            state = COALESCE($11, state),
            country = COALESCE($12, country),
            postal_code = COALESCE($13, postal_code),
            updated_at = NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(&updates.company_name)
    .bind(&updates.industry)
    .bind(&updates.company_size)
    .bind(&updates.website)
    .bind(&updates.description)
    .bind(&updates.contact_email)
    .bind(&updates.contact_phone)
    .bind(&updates.address)
    .bind(&updates.city)
    .bind(&updates.state)
    .bind(&updates.country)
    .bind(&updates.postal_code)
    .fetch_optional(pool)
    .await
}

/// Soft delete: the row stays, `is_active` goes false.
pub async fn deactivate_company(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("UPDATE companies SET is_active = FALSE, updated_at = NOW() WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
