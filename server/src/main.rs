use std::sync::Arc;

use taipower_cpi::AsyncElectricityCpi;
use taipower_cpi_server::config::ServerConfig;
use taipower_cpi_server::state::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let config = ServerConfig::from_env()?;
    tracing::info!(database = %config.database.display(), "opening record store");

    let db = AsyncElectricityCpi::builder()
        .database(&config.database)
        .build()
        .await
        .map_err(|e| format!("failed to open record store: {e}"))?;

    // The import finishes before the listener binds, so requests never see a
    // partially loaded table.
    let fixture = config.fixture.clone();
    match db.run(move |s| s.import_fixture(&fixture)).await {
        Ok(0) => {}
        Ok(rows) => tracing::info!(rows, "fixture imported"),
        Err(taipower_cpi::CpiError::NotFound(msg)) => {
            tracing::warn!("{msg}; serving whatever the store already holds")
        }
        Err(e) => return Err(format!("fixture import failed: {e}")),
    }

    let state = Arc::new(AppState { db });
    let app = taipower_cpi_server::router(state, &config.public_dir);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .map_err(|e| format!("failed to bind {}: {e}", config.addr))?;
    tracing::info!("listening on http://{}", config.addr);
    axum::serve(listener, app)
        .await
        .map_err(|e| format!("server error: {e}"))
}
