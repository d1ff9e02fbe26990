//! Liveness, readiness and version routes. Status bodies reuse the student API's
//! `{status, error}` envelope: `{"status":"OK"}` when healthy, the error form otherwise.

use crate::response::{general_error, ErrorBody, STATUS_OK};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde_json::{json, Value};

async fn health() -> Json<Value> {
    Json(json!({ "status": STATUS_OK }))
}

/// 503 with the store's error when the round-trip fails.
async fn ready(State(state): State<AppState>) -> Result<Json<Value>, (StatusCode, Json<ErrorBody>)> {
    state.store.ping().await.map_err(|e| {
        tracing::warn!(error = %e, "readiness check failed");
        (StatusCode::SERVICE_UNAVAILABLE, Json(general_error(&e)))
    })?;
    Ok(Json(json!({ "status": STATUS_OK })))
}

async fn version() -> Json<Value> {
    Json(json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// GET /health and GET /version; no state needed.
pub fn common_routes() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/version", get(version))
}

/// [`common_routes`] plus GET /ready, which pings the store.
pub fn common_routes_with_ready(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(ready))
        .with_state(state)
        .merge(common_routes())
}
