//! Pods command implementation

use crate::cli::output::{format_pods_json, format_pods_table};
use crate::cli::PodsArgs;
use crate::registry::Datastore;

/// Handle `epp pods` command
pub fn handle_pods(
    args: &PodsArgs,
    datastore: &Datastore,
) -> Result<String, Box<dyn std::error::Error>> {
    let mut pods = datastore.get_all_pods();
    pods.sort_by(|a, b| a.name.cmp(&b.name));

    if args.json {
        Ok(format_pods_json(&pods)?)
    } else if pods.is_empty() {
        Ok("No pods configured.".to_string())
    } else {
        Ok(format_pods_table(&pods))
    }
}
