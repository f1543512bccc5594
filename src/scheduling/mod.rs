//! Scheduling: picks the pod that should serve a request
//!
//! The only profile implemented is header-directed selection, where the
//! caller names the target pod address in a request header. Results use the
//! profile-keyed [`SchedulingResult`] shape so other profiles can report into
//! the same map.
//!
//! # Example
//!
//! ```
//! use epp::registry::{Datastore, Pod};
//! use epp::scheduling::{LlmRequest, ReqHeaderBasedScheduler, ENDPOINT_SELECTION_HEADER};
//! use std::collections::HashMap;
//! use std::sync::Arc;
//! use tokio_util::sync::CancellationToken;
//!
//! # let runtime = tokio::runtime::Runtime::new().unwrap();
//! # runtime.block_on(async {
//! let datastore = Arc::new(Datastore::new());
//! datastore.add_pod(Pod::new("default/vllm-0", "10.0.0.7:8000")).unwrap();
//!
//! let scheduler = ReqHeaderBasedScheduler::new(datastore);
//! let mut headers = HashMap::new();
//! headers.insert(ENDPOINT_SELECTION_HEADER.to_string(), "10.0.0.7:8000".to_string());
//!
//! let result = scheduler
//!     .schedule(&CancellationToken::new(), &LlmRequest::new(headers))
//!     .await
//!     .unwrap();
//! assert_eq!(result.len(), 1);
//! # });
//! ```

pub mod error;
pub mod scheduler;
pub mod types;

pub use error::SchedulingError;
pub use scheduler::ReqHeaderBasedScheduler;
pub use types::{
    header_based_target, LlmRequest, ProfileRunResult, SchedulingResult, ScoredPod,
    ENDPOINT_SELECTION_HEADER, REQ_HEADER_BASED_PROFILE,
};
