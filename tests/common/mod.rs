//! Shared test utilities for endpoint picker integration tests.

#![allow(dead_code)]

use epp::api::{create_router, AppState};
use epp::config::EppConfig;
use epp::registry::{Datastore, Pod, PodSnapshotProvider};
use epp::scheduling::{LlmRequest, ENDPOINT_SELECTION_HEADER};
use std::collections::HashMap;
use std::sync::Arc;

/// Fixed, ordered snapshot for exercising the scheduler without a datastore.
pub struct FakeDataStore {
    pub pods: Vec<Pod>,
}

#[async_trait::async_trait]
impl PodSnapshotProvider for FakeDataStore {
    async fn pod_get_all(&self) -> Vec<Pod> {
        self.pods.clone()
    }
}

/// Provider whose snapshot read never completes within a test's lifetime.
pub struct StalledDataStore;

#[async_trait::async_trait]
impl PodSnapshotProvider for StalledDataStore {
    async fn pod_get_all(&self) -> Vec<Pod> {
        tokio::time::sleep(std::time::Duration::from_secs(3600)).await;
        Vec::new()
    }
}

/// Pod whose name is derived from its address.
pub fn make_pod(address: &str) -> Pod {
    Pod::new(format!("default/{}", address), address)
}

/// Request carrying only the given headers.
pub fn make_request(headers: &[(&str, &str)]) -> LlmRequest {
    LlmRequest::new(
        headers
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>(),
    )
}

/// Request with the endpoint selection header set to `address`.
pub fn directed_request(address: &str) -> LlmRequest {
    make_request(&[(ENDPOINT_SELECTION_HEADER, address)])
}

/// Datastore seeded with `pods`.
pub fn make_datastore(pods: Vec<Pod>) -> Arc<Datastore> {
    let datastore = Arc::new(Datastore::new());
    for pod in pods {
        datastore.add_pod(pod).unwrap();
    }
    datastore
}

/// Router over a datastore seeded with `pods`, default configuration.
pub fn make_app(pods: Vec<Pod>) -> axum::Router {
    let state = Arc::new(AppState::new(
        make_datastore(pods),
        Arc::new(EppConfig::default()),
    ));
    create_router(state)
}
