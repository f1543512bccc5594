//! Request and result shapes shared by scheduling profiles

use crate::registry::Pod;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Header whose value names the exact pod address to route to.
pub const ENDPOINT_SELECTION_HEADER: &str = "test-epp-endpoint-selection";

/// Profile name under which header-directed selections are reported.
pub const REQ_HEADER_BASED_PROFILE: &str = "req-header-based-profile";

/// An inference request as seen by the scheduler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LlmRequest {
    /// Correlation ID for logs
    pub request_id: String,
    /// Request headers (names as delivered, values verbatim)
    pub headers: HashMap<String, String>,
}

impl LlmRequest {
    /// Create a request with a freshly generated request ID.
    pub fn new(headers: HashMap<String, String>) -> Self {
        Self::with_id(crate::logging::generate_request_id(), headers)
    }

    /// Create a request with a caller-supplied request ID.
    pub fn with_id(request_id: impl Into<String>, headers: HashMap<String, String>) -> Self {
        Self {
            request_id: request_id.into(),
            headers,
        }
    }

    /// Value of a header, if present.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Target address from the endpoint selection header.
    ///
    /// Returns `None` when the header is absent or set to an empty string.
    pub fn endpoint_directive(&self) -> Option<&str> {
        self.header(ENDPOINT_SELECTION_HEADER)
            .filter(|value| !value.is_empty())
    }
}

/// A pod together with the score a profile assigned to it.
///
/// Header-directed selection does not score; its score is always `0.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredPod {
    pub pod: Pod,
    #[serde(default)]
    pub score: f64,
}

impl ScoredPod {
    /// Wrap a pod with the default (zero) score.
    pub fn unscored(pod: Pod) -> Self {
        Self { pod, score: 0.0 }
    }
}

/// Outcome of running one scheduling profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRunResult {
    pub target_pod: ScoredPod,
}

/// Per-request decision: profile name to that profile's result.
pub type SchedulingResult = HashMap<String, ProfileRunResult>;

/// Pod chosen by the header-directed profile, if the result carries one.
pub fn header_based_target(result: &SchedulingResult) -> Option<&Pod> {
    result
        .get(REQ_HEADER_BASED_PROFILE)
        .map(|profile| &profile.target_pod.pod)
}
