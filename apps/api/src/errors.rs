use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Forbidden")]
    Forbidden,

    #[error("Conflict: {0}")]
    Conflict(String),

    /// The database client was never configured (no DATABASE_URL). Endpoints
    /// degrade to 503 instead of crashing.
    #[error("Database not configured")]
    NotConfigured,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Backend call failed. `debug` is echoed to the client only when the
    /// deployment runs in development mode.
    #[error("Backend error: {message}")]
    Backend {
        message: String,
        debug: Option<String>,
    },

    #[error("Resume parser error: {0}")]
    Parser(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Wraps a stored-procedure failure, logging the full detail server-side
    /// and carrying it to the client only when `debug_errors` is set.
    pub fn backend(message: &str, source: sqlx::Error, debug_errors: bool) -> Self {
        tracing::error!("{message}: {source}");
        AppError::Backend {
            message: message.to_string(),
            debug: debug_errors.then(|| source.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, debug) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone(), None),
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone(), None)
            }
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Authentication required".to_string(),
                None,
            ),
            AppError::Forbidden => (
                StatusCode::FORBIDDEN,
                "FORBIDDEN",
                "Access denied".to_string(),
                None,
            ),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone(), None),
            AppError::NotConfigured => (
                StatusCode::SERVICE_UNAVAILABLE,
                "NOT_CONFIGURED",
                "Database not configured".to_string(),
                None,
            ),
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "A database error occurred".to_string(),
                    None,
                )
            }
            AppError::Backend { message, debug } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "BACKEND_ERROR",
                message.clone(),
                debug.clone(),
            ),
            AppError::Parser(msg) => {
                tracing::error!("Resume parser error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "PARSER_ERROR",
                    "Resume analysis failed".to_string(),
                    None,
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                    None,
                )
            }
        };

        let mut error = json!({
            "code": code,
            "message": message
        });
        if let Some(debug) = debug {
            error["debug"] = json!(debug);
        }

        (status, Json(json!({ "error": error }))).into_response()
    }
}
