//! Health check endpoint handler.

use crate::api::AppState;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_seconds: u64,
    pub pods: usize,
}

/// GET /health - Return service health.
///
/// Reports `degraded` while no pods are known, since every scheduling call
/// would fail.
pub async fn handle(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let pods = state.datastore.pod_count();
    let status = if pods > 0 { "healthy" } else { "degraded" };

    Json(HealthResponse {
        status: status.to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        pods,
    })
}
