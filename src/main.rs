//! students-api server: loads config, opens the SQLite store, serves `/api/students`.

use std::sync::Arc;
use students_api::{app, logging, serve, server, shutdown_signal, AppState, Config, SqliteStore};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_tracing();

    let config = Config::load().inspect_err(|e| tracing::error!(error = %e, "failed to load config"))?;
    let store = SqliteStore::open(&config.storage_path, config.max_connections)
        .await
        .inspect_err(|e| tracing::error!(error = %e, "failed to open storage"))?;
    tracing::info!(
        env = %config.env,
        storage_path = %config.storage_path.display(),
        "storage initialized"
    );

    let state = AppState::new(Arc::new(store));
    let listener = TcpListener::bind(&config.http_server.address).await?;
    tracing::info!(address = %listener.local_addr()?, "server started");

    serve(listener, app(state), shutdown_signal(), server::SHUTDOWN_GRACE).await?;
    Ok(())
}
