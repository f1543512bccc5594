//! # HTTP API
//!
//! Thin HTTP surface over the header-directed scheduler.
//!
//! ## Endpoints
//!
//! - `POST /v1/schedule` - Pick the pod named in `test-epp-endpoint-selection`
//! - `GET /v1/pods` - List known pods
//! - `GET /health` - Service health with pod count
//!
//! ## Example
//!
//! ```no_run
//! use epp::api::{create_router, AppState};
//! use epp::config::EppConfig;
//! use epp::registry::Datastore;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let datastore = Arc::new(Datastore::new());
//! let config = Arc::new(EppConfig::default());
//! let state = Arc::new(AppState::new(datastore, config));
//! let app = create_router(state);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:9002").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Scheduling failures are returned as:
//! ```json
//! {
//!   "error": {
//!     "message": "No pod found with address '10.0.0.9:8000'",
//!     "type": "server_error",
//!     "code": "no_matching_endpoint"
//!   }
//! }
//! ```

mod headers;
mod health;
mod pods;
mod schedule;
pub mod types;

pub use headers::{DESTINATION_ENDPOINT_HEADER, REQUEST_ID_HEADER};
pub use health::HealthResponse;
pub use types::*;

use crate::config::EppConfig;
use crate::registry::{Datastore, PodSnapshotProvider};
use crate::scheduling::ReqHeaderBasedScheduler;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Instant;
use tokio_util::sync::CancellationToken;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Maximum request body size (1 MB). Bodies are not inspected.
const MAX_BODY_SIZE: usize = 1024 * 1024;

/// Shared application state accessible to all handlers.
pub struct AppState {
    pub datastore: Arc<Datastore>,
    pub scheduler: Arc<ReqHeaderBasedScheduler>,
    pub config: Arc<EppConfig>,
    /// Server startup time for uptime tracking
    pub start_time: Instant,
    /// Parent of every per-request cancellation token
    pub shutdown: CancellationToken,
}

impl AppState {
    /// Create new application state with the given datastore and configuration.
    pub fn new(datastore: Arc<Datastore>, config: Arc<EppConfig>) -> Self {
        Self::with_shutdown(datastore, config, CancellationToken::new())
    }

    /// Create application state whose in-flight requests are cancelled with `shutdown`.
    pub fn with_shutdown(
        datastore: Arc<Datastore>,
        config: Arc<EppConfig>,
        shutdown: CancellationToken,
    ) -> Self {
        let provider: Arc<dyn PodSnapshotProvider> = datastore.clone();
        Self::with_provider(datastore, provider, config, shutdown)
    }

    /// Create application state whose scheduler reads snapshots from `provider`.
    ///
    /// `datastore` still backs `/v1/pods` and `/health`.
    pub fn with_provider(
        datastore: Arc<Datastore>,
        provider: Arc<dyn PodSnapshotProvider>,
        config: Arc<EppConfig>,
        shutdown: CancellationToken,
    ) -> Self {
        let scheduler = Arc::new(ReqHeaderBasedScheduler::new(provider));

        Self {
            datastore,
            scheduler,
            config,
            start_time: Instant::now(),
            shutdown,
        }
    }
}

/// Create the main API router with all endpoints configured.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/v1/schedule", post(schedule::handle))
        .route("/v1/pods", get(pods::handle))
        .route("/health", get(health::handle))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_SIZE))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
