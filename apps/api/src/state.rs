use std::sync::Arc;

use crate::auth::session::SessionManager;
use crate::config::Config;
use crate::db::Database;
use crate::screening::parser::ResumeParser;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    /// Sole authority for "who is the caller" on authenticated routes.
    pub sessions: SessionManager,
    /// Pluggable resume parser; production uses `HttpResumeParser`.
    pub parser: Arc<dyn ResumeParser>,
    pub config: Config,
}
