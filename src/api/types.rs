//! Request/response bodies and the API error envelope.

use crate::registry::Pod;
use crate::scheduling::{SchedulingError, SchedulingResult};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};

/// Successful scheduling response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleResponse {
    pub request_id: String,
    pub profile_results: SchedulingResult,
}

/// Pod listing response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PodsResponse {
    pub pods: Vec<Pod>,
}

/// API error response.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiError {
    pub error: ApiErrorBody,
}

/// Error details.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiErrorBody {
    pub message: String,
    pub r#type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ApiError {
    fn new(message: String, r#type: &str, code: &str) -> Self {
        Self {
            error: ApiErrorBody {
                message,
                r#type: r#type.to_string(),
                code: Some(code.to_string()),
            },
        }
    }

    /// Endpoint selection header absent or empty (400).
    pub fn missing_endpoint_selection(message: String) -> Self {
        Self::new(message, "invalid_request_error", "missing_endpoint_selection")
    }

    /// No pod carries the requested address (503).
    pub fn no_matching_endpoint(message: String) -> Self {
        Self::new(message, "server_error", "no_matching_endpoint")
    }

    /// Scheduling did not finish before its deadline or shutdown (504).
    pub fn scheduling_cancelled(message: String) -> Self {
        Self::new(message, "server_error", "scheduling_cancelled")
    }

    /// Get the HTTP status code for this error.
    fn status_code(&self) -> StatusCode {
        match self.error.code.as_deref() {
            Some("missing_endpoint_selection") => StatusCode::BAD_REQUEST,
            Some("no_matching_endpoint") => StatusCode::SERVICE_UNAVAILABLE,
            Some("scheduling_cancelled") => StatusCode::GATEWAY_TIMEOUT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<SchedulingError> for ApiError {
    fn from(err: SchedulingError) -> Self {
        let message = err.to_string();
        match err {
            SchedulingError::MissingDirective { .. } => Self::missing_endpoint_selection(message),
            SchedulingError::NoMatchingInstance { .. } => Self::no_matching_endpoint(message),
            SchedulingError::Cancelled => Self::scheduling_cancelled(message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self)).into_response()
    }
}
