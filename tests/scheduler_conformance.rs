//! Conformance scenarios for header-directed scheduling.

mod common;

use common::{directed_request, make_datastore, make_pod, make_request, FakeDataStore};
use epp::registry::Pod;
use epp::scheduling::{
    ProfileRunResult, ReqHeaderBasedScheduler, SchedulingError, SchedulingResult, ScoredPod,
    ENDPOINT_SELECTION_HEADER,
};
use std::collections::HashMap;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

async fn schedule_against(
    pods: Vec<Pod>,
    request: &epp::scheduling::LlmRequest,
) -> Result<SchedulingResult, SchedulingError> {
    let scheduler = ReqHeaderBasedScheduler::new(Arc::new(FakeDataStore { pods }));
    scheduler.schedule(&CancellationToken::new(), request).await
}

#[tokio::test]
async fn no_pods_in_datastore_and_req_header_is_set() {
    let result = schedule_against(vec![], &directed_request("random-endpoint")).await;
    assert!(matches!(result, Err(SchedulingError::NoMatchingInstance { .. })));
}

#[tokio::test]
async fn req_header_not_set() {
    let result = schedule_against(vec![make_pod("random-endpoint")], &make_request(&[])).await;
    assert!(matches!(result, Err(SchedulingError::MissingDirective { .. })));
}

#[tokio::test]
async fn req_header_set_but_empty() {
    let result = schedule_against(vec![make_pod("random-endpoint")], &directed_request("")).await;
    assert!(matches!(result, Err(SchedulingError::MissingDirective { .. })));
}

#[tokio::test]
async fn no_pod_address_matches_req_header_address() {
    let result = schedule_against(
        vec![make_pod("nonmatched-endpoint")],
        &directed_request("matched-endpoint"),
    )
    .await;
    assert!(matches!(result, Err(SchedulingError::NoMatchingInstance { .. })));
}

#[tokio::test]
async fn one_pod_address_matches_req_header_address() {
    let result = schedule_against(
        vec![make_pod("nonmatched-endpoint"), make_pod("matched-endpoint")],
        &directed_request("matched-endpoint"),
    )
    .await
    .unwrap();

    let expected: SchedulingResult = HashMap::from([(
        "req-header-based-profile".to_string(),
        ProfileRunResult {
            target_pod: ScoredPod {
                pod: Pod {
                    name: "default/matched-endpoint".to_string(),
                    address: "matched-endpoint".to_string(),
                    labels: HashMap::new(),
                },
                score: 0.0,
            },
        },
    )]);
    assert_eq!(result, expected);
}

#[tokio::test]
async fn unrelated_headers_are_ignored() {
    let request = make_request(&[
        ("x-request-id", "abc"),
        ("content-type", "application/json"),
        (ENDPOINT_SELECTION_HEADER, "matched-endpoint"),
    ]);
    let result = schedule_against(vec![make_pod("matched-endpoint")], &request)
        .await
        .unwrap();
    assert_eq!(result.len(), 1);
}

#[tokio::test]
async fn datastore_backed_scheduling() {
    let datastore = make_datastore(vec![
        make_pod("10.0.0.1:8000"),
        make_pod("10.0.0.2:8000").with_label("app", "vllm"),
    ]);
    let scheduler = ReqHeaderBasedScheduler::new(datastore.clone());
    let cancel = CancellationToken::new();

    let result = scheduler
        .schedule(&cancel, &directed_request("10.0.0.2:8000"))
        .await
        .unwrap();
    let selected = &result[scheduler.name()].target_pod.pod;
    assert_eq!(selected.name, "default/10.0.0.2:8000");
    assert_eq!(selected.labels["app"], "vllm");

    // The snapshot is read per call, so removals are observed immediately.
    datastore.remove_pod("default/10.0.0.2:8000").unwrap();
    let result = scheduler
        .schedule(&cancel, &directed_request("10.0.0.2:8000"))
        .await;
    assert!(matches!(result, Err(SchedulingError::NoMatchingInstance { .. })));
}

#[tokio::test]
async fn concurrent_scheduling_calls_are_independent() {
    let datastore = make_datastore((0..8).map(|i| make_pod(&format!("10.0.0.{}:8000", i))).collect());
    let scheduler = Arc::new(ReqHeaderBasedScheduler::new(datastore));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let scheduler = Arc::clone(&scheduler);
            tokio::spawn(async move {
                let address = format!("10.0.0.{}:8000", i);
                let result = scheduler
                    .schedule(&CancellationToken::new(), &directed_request(&address))
                    .await
                    .unwrap();
                assert_eq!(result[scheduler.name()].target_pod.pod.address, address);
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap();
    }
}
