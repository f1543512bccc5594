//! Output formatting helpers for CLI commands

use crate::registry::Pod;
use crate::scheduling::SchedulingResult;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use serde_json::json;

/// Render a label set as `k=v` pairs, sorted by key.
fn format_labels(pod: &Pod) -> String {
    let mut labels: Vec<_> = pod
        .labels
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect();
    labels.sort();
    labels.join(", ")
}

/// Format pods as a table
pub fn format_pods_table(pods: &[Pod]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Address", "Labels"]);

    for pod in pods {
        table.add_row(vec![
            Cell::new(&pod.name),
            Cell::new(&pod.address),
            Cell::new(format_labels(pod)),
        ]);
    }

    table.to_string()
}

/// Format pods as JSON
pub fn format_pods_json(pods: &[Pod]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&json!({ "pods": pods }))
}

/// Format a scheduling result as one row per profile
pub fn format_selection_table(result: &SchedulingResult) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Profile", "Pod", "Address", "Score"]);

    let mut profiles: Vec<_> = result.iter().collect();
    profiles.sort_by(|a, b| a.0.cmp(b.0));

    for (profile, run) in profiles {
        table.add_row(vec![
            Cell::new(profile),
            Cell::new(&run.target_pod.pod.name),
            Cell::new(run.target_pod.pod.address.green().to_string()),
            Cell::new(run.target_pod.score),
        ]);
    }

    table.to_string()
}

/// Format a scheduling result as JSON
pub fn format_selection_json(
    request_id: &str,
    result: &SchedulingResult,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&json!({
        "request_id": request_id,
        "profile_results": result,
    }))
}
