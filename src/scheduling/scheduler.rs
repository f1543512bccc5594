//! Header-directed scheduler
//!
//! Routes a request to the pod whose address is named verbatim in the
//! endpoint selection header. No scoring or fallback is applied.

use super::error::SchedulingError;
use super::types::{
    LlmRequest, ProfileRunResult, SchedulingResult, ScoredPod, ENDPOINT_SELECTION_HEADER,
    REQ_HEADER_BASED_PROFILE,
};
use crate::registry::{Pod, PodSnapshotProvider};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Picks the pod named by the endpoint selection header.
///
/// Stateless between calls; share it behind an `Arc` across tasks.
pub struct ReqHeaderBasedScheduler {
    provider: Arc<dyn PodSnapshotProvider>,
}

impl ReqHeaderBasedScheduler {
    pub fn new(provider: Arc<dyn PodSnapshotProvider>) -> Self {
        Self { provider }
    }

    /// Profile name this scheduler reports its result under.
    pub fn name(&self) -> &'static str {
        REQ_HEADER_BASED_PROFILE
    }

    /// Select the pod for `request`.
    ///
    /// # Algorithm
    /// 1. Read the directive header; absent or empty fails without reading a snapshot
    /// 2. Read one pod snapshot, aborting if `cancel` fires first
    /// 3. Take the first pod whose address equals the directive exactly
    ///
    /// Step 1 runs before any snapshot read, so a request without a directive
    /// never calls the provider and reports `MissingDirective` even when
    /// `cancel` has already fired.
    ///
    /// # Errors
    /// - `MissingDirective` if the header is absent or empty
    /// - `NoMatchingInstance` if no pod has the requested address
    /// - `Cancelled` if `cancel` fired before the snapshot arrived
    pub async fn schedule(
        &self,
        cancel: &CancellationToken,
        request: &LlmRequest,
    ) -> Result<SchedulingResult, SchedulingError> {
        let Some(address) = request.endpoint_directive() else {
            tracing::debug!(
                request_id = %request.request_id,
                header = ENDPOINT_SELECTION_HEADER,
                "Endpoint selection header missing or empty"
            );
            return Err(SchedulingError::MissingDirective {
                header: ENDPOINT_SELECTION_HEADER,
            });
        };

        let pods = self.snapshot(cancel, request).await?;
        let snapshot_size = pods.len();

        let mut matches = pods.into_iter().filter(|pod| pod.address == address);
        let Some(pod) = matches.next() else {
            tracing::debug!(
                request_id = %request.request_id,
                address,
                snapshot_size,
                "No pod matches requested address"
            );
            return Err(SchedulingError::NoMatchingInstance {
                address: address.to_string(),
            });
        };

        // Pod names are unique but addresses are not; several entries can match.
        let duplicates = matches.count();
        if duplicates > 0 {
            tracing::warn!(
                request_id = %request.request_id,
                address,
                matching_pods = duplicates + 1,
                selected = %pod.name,
                "Multiple pods share the requested address"
            );
        }

        tracing::debug!(
            request_id = %request.request_id,
            pod = %pod.name,
            address,
            "Pod selected from endpoint selection header"
        );

        Ok(Self::decision(pod))
    }

    async fn snapshot(
        &self,
        cancel: &CancellationToken,
        request: &LlmRequest,
    ) -> Result<Vec<Pod>, SchedulingError> {
        if cancel.is_cancelled() {
            tracing::debug!(request_id = %request.request_id, "Cancelled before snapshot read");
            return Err(SchedulingError::Cancelled);
        }

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::debug!(request_id = %request.request_id, "Cancelled during snapshot read");
                Err(SchedulingError::Cancelled)
            }
            pods = self.provider.pod_get_all() => Ok(pods),
        }
    }

    fn decision(pod: Pod) -> SchedulingResult {
        let mut result = SchedulingResult::with_capacity(1);
        result.insert(
            REQ_HEADER_BASED_PROFILE.to_string(),
            ProfileRunResult {
                target_pod: ScoredPod::unscored(pod),
            },
        );
        result
    }
}
