use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use ginger_core::domain::health::entities::DatabaseHealthStatus;
use ginger_core::domain::health::ports::HealthCheckService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub latency_ms: u64,
}

/// Liveness: the process is up and can reach its database.
async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    let latency_ms = state.service.health().await.map_err(ApiError::from)?;

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        latency_ms,
    }))
}

/// Readiness: database status with measured round-trip latency.
async fn ready(State(state): State<AppState>) -> Result<Json<DatabaseHealthStatus>, ApiError> {
    let status = state.service.readness().await.map_err(ApiError::from)?;

    Ok(Json(status))
}

pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(ready))
}
