use anyhow::{Context, Result};

/// Development fallback for the session signing secret.
/// Must be overridden via JWT_SECRET in any real deployment.
pub const DEV_JWT_SECRET: &str = "dev-secret-change-in-production";

const DEFAULT_PARSER_URL: &str = "http://localhost:8000/analyze";

/// Deployment mode. Controls the `Secure` cookie attribute and whether
/// error responses carry a debug payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Connection string for the hosted Postgres backend. Optional: when
    /// absent the service starts with an unconfigured database and
    /// database-backed endpoints return 503.
    pub database_url: Option<String>,
    pub jwt_secret: String,
    pub parser_url: String,
    pub environment: Environment,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let environment = match std::env::var("APP_ENV").as_deref() {
            Ok("production") => Environment::Production,
            _ => Environment::Development,
        };

        Ok(Config {
            database_url: std::env::var("DATABASE_URL").ok(),
            jwt_secret: std::env::var("JWT_SECRET").unwrap_or_else(|_| DEV_JWT_SECRET.to_string()),
            parser_url: std::env::var("PARSER_URL")
                .unwrap_or_else(|_| DEFAULT_PARSER_URL.to_string()),
            environment,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Whether error responses may echo backend failure details.
    pub fn debug_errors(&self) -> bool {
        !self.is_production()
    }

    /// True when the deployment is still running on the insecure default secret.
    pub fn using_default_secret(&self) -> bool {
        self.jwt_secret == DEV_JWT_SECRET
    }
}
