pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::auth::handlers as auth;
use crate::company::handlers as company;
use crate::jobs::handlers as jobs;
use crate::screening::handlers as screening;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Auth
        .route("/api/v1/auth/register", post(auth::handle_register))
        .route("/api/v1/auth/login", post(auth::handle_login))
        .route("/api/v1/auth/logout", post(auth::handle_logout))
        .route("/api/v1/auth/session", get(auth::handle_session))
        .route("/api/v1/auth/company", post(auth::handle_update_company))
        // Companies
        .route(
            "/api/v1/companies",
            get(company::handle_list_companies).post(company::handle_create_company),
        )
        .route(
            "/api/v1/companies/:id",
            get(company::handle_get_company)
                .put(company::handle_update_company)
                .delete(company::handle_delete_company),
        )
        // Jobs
        .route(
            "/api/v1/jobs",
            get(jobs::handle_list_jobs).post(jobs::handle_create_job),
        )
        .route(
            "/api/v1/jobs/:id",
            get(jobs::handle_get_job)
                .put(jobs::handle_update_job)
                .delete(jobs::handle_delete_job),
        )
        // Screening
        .route(
            "/api/v1/resumes/analyze",
            post(screening::handle_analyze_resume),
        )
        .route("/api/v1/candidates", get(screening::handle_list_candidates))
        .with_state(state)
}
