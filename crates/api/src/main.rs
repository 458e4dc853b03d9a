//! Gymbook - group activity booking service
//!
//! Main entry point for the HTTP server binary.

use std::sync::Arc;

use gymbook_api::{build_router, AppState};
use gymbook_infra::{config, fixtures, DbManager};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging FIRST so we can see .env loading
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gymbook=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables from .env file
    match dotenvy::dotenv() {
        Ok(path) => info!(path = %path.display(), "Loaded .env"),
        Err(e) => tracing::debug!(error = %e, "No .env file loaded"),
    }

    let config = config::load()?;

    let db = Arc::new(DbManager::new(&config.database.path, config.database.pool_size)?);
    db.run_migrations()?;
    info!(path = %config.database.path, "Database ready");

    if seed_requested() {
        fixtures::seed_demo_data(&db)?;
    }

    let state = AppState::new(db);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.http.addr).await?;
    info!(addr = %config.http.addr, "Listening");
    axum::serve(listener, app).await?;

    Ok(())
}

fn seed_requested() -> bool {
    std::env::var("GYMBOOK_SEED_DEMO")
        .map(|raw| matches!(raw.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(false)
}
