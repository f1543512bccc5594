//! POST /v1/schedule - header-directed pod selection.

use super::headers::{inject_destination, request_from_headers};
use super::types::{ApiError, ScheduleResponse};
use crate::api::AppState;
use crate::scheduling::header_based_target;
use axum::{
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use std::time::Duration;

/// Pick the pod named by the endpoint selection header.
///
/// The scheduling call is bounded by `server.request_timeout_seconds` and by
/// server shutdown, whichever comes first.
pub async fn handle(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let request = request_from_headers(&headers);
    let timeout = Duration::from_secs(state.config.server.request_timeout_seconds);

    let cancel = state.shutdown.child_token();
    // Cancelling on return also stops the deadline task below.
    let _guard = cancel.clone().drop_guard();
    let deadline = cancel.clone();
    tokio::spawn(async move {
        tokio::select! {
            _ = deadline.cancelled() => {}
            _ = tokio::time::sleep(timeout) => deadline.cancel(),
        }
    });

    let result = state.scheduler.schedule(&cancel, &request).await.map_err(|e| {
        tracing::info!(request_id = %request.request_id, error = %e, "Scheduling failed");
        ApiError::from(e)
    })?;

    let address = header_based_target(&result).map(|pod| pod.address.clone());
    let mut response = Json(ScheduleResponse {
        request_id: request.request_id,
        profile_results: result,
    })
    .into_response();

    if let Some(address) = address {
        inject_destination(response.headers_mut(), &address);
    }

    Ok(response)
}
