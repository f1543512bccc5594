//! Pick command implementation
//!
//! Runs the header-directed scheduler once against the configured pods.

use crate::cli::output::{format_selection_json, format_selection_table};
use crate::cli::PickArgs;
use crate::registry::Datastore;
use crate::scheduling::{LlmRequest, ReqHeaderBasedScheduler, ENDPOINT_SELECTION_HEADER};
use std::collections::HashMap;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Handle `epp pick <ENDPOINT>` command
pub async fn handle_pick(
    args: &PickArgs,
    datastore: Arc<Datastore>,
) -> Result<String, Box<dyn std::error::Error>> {
    let mut headers = HashMap::new();
    headers.insert(ENDPOINT_SELECTION_HEADER.to_string(), args.endpoint.clone());
    let request = LlmRequest::new(headers);

    let scheduler = ReqHeaderBasedScheduler::new(datastore);
    let result = scheduler
        .schedule(&CancellationToken::new(), &request)
        .await?;

    if args.json {
        Ok(format_selection_json(&request.request_id, &result)?)
    } else {
        Ok(format_selection_table(&result))
    }
}
