//! Stored-procedure calls backing the auth flows. All identity data lives in
//! the hosted Postgres backend; this service never sees password hashes.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::user::AuthenticatedUser;

/// Checks credentials against the backend. `None` means the email/password
/// pair did not match any user.
pub async fn verify_user_password(
    pool: &PgPool,
    email: &str,
    password: &str,
) -> Result<Option<AuthenticatedUser>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM verify_user_password($1, $2)")
        .bind(email)
        .bind(password)
        .fetch_optional(pool)
        .await
}

/// Registers a new HR user, returning the new user id. The procedure raises
/// "Email already exists" on duplicates.
pub async fn register_hr_user(
    pool: &PgPool,
    email: &str,
    password: &str,
    full_name: &str,
) -> Result<Uuid, sqlx::Error> {
    sqlx::query_scalar("SELECT register_hr_user($1, $2, $3)")
        .bind(email)
        .bind(password)
        .bind(full_name)
        .fetch_one(pool)
        .await
}

pub async fn update_last_login(pool: &PgPool, user_id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT update_last_login($1)")
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn update_user_company(
    pool: &PgPool,
    user_id: Uuid,
    company_id: Uuid,
) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT update_user_company($1, $2)")
        .bind(user_id)
        .bind(company_id)
        .execute(pool)
        .await?;
    Ok(())
}
