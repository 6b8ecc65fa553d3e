mod auth;
mod company;
mod config;
mod db;
mod errors;
mod jobs;
mod models;
mod routes;
mod screening;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::auth::session::SessionManager;
use crate::config::Config;
use crate::db::Database;
use crate::routes::build_router;
use crate::screening::parser::HttpResumeParser;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("api={}", &config.rust_log))),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting TalentGate API v{}", env!("CARGO_PKG_VERSION"));

    if config.using_default_secret() {
        if config.is_production() {
            warn!("JWT_SECRET is not set in production; sessions are signed with the insecure development default");
        } else {
            warn!("JWT_SECRET not set; using the development default");
        }
    }

    // Initialize PostgreSQL. A missing DATABASE_URL degrades gracefully:
    // the service starts and database-backed endpoints return 503.
    let db = match &config.database_url {
        Some(url) => Database::connect(url).await?,
        None => Database::unconfigured(),
    };

    // Session manager: Secure cookies only in production (local dev is http)
    let sessions = SessionManager::new(&config.jwt_secret, config.is_production());

    // Resume parser client
    let parser = Arc::new(HttpResumeParser::new(config.parser_url.clone()));
    info!("Resume parser client initialized ({})", config.parser_url);

    let state = AppState {
        db,
        sessions,
        parser,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the UI domain is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
