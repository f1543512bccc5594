//! GET /v1/pods - list known pods.

use super::types::PodsResponse;
use crate::api::AppState;
use axum::{extract::State, Json};
use std::sync::Arc;

/// Return every pod in the datastore, sorted by name.
pub async fn handle(State(state): State<Arc<AppState>>) -> Json<PodsResponse> {
    let mut pods = state.datastore.get_all_pods();
    pods.sort_by(|a, b| a.name.cmp(&b.name));
    Json(PodsResponse { pods })
}
