use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::{info, warn};

use crate::errors::AppError;

/// Handle to the hosted Postgres backend.
///
/// Constructed once in `main` and injected through `AppState` — no module
/// globals. The unconfigured state is an explicit value: every query path
/// goes through [`Database::pool`], which turns a missing configuration into
/// a 503 instead of a crash.
#[derive(Clone)]
pub struct Database {
    pool: Option<PgPool>,
}

impl Database {
    /// Creates a connection pool against the given database URL.
    pub async fn connect(database_url: &str) -> Result<Self> {
        info!("Connecting to PostgreSQL...");

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;

        info!("PostgreSQL connection pool established");
        Ok(Database { pool: Some(pool) })
    }

    /// The sentinel used when DATABASE_URL is absent. Database-backed
    /// endpoints return `AppError::NotConfigured` in this state.
    pub fn unconfigured() -> Self {
        warn!("DATABASE_URL not set; database-backed endpoints will return 503");
        Database { pool: None }
    }

    pub fn is_configured(&self) -> bool {
        self.pool.is_some()
    }

    pub fn pool(&self) -> Result<&PgPool, AppError> {
        self.pool.as_ref().ok_or(AppError::NotConfigured)
    }
}
