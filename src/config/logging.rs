//! Logging configuration
//!
//! `level` sets the base filter. Each `component_levels` entry narrows one
//! crate module, so `scheduling = "debug"` becomes the `epp::scheduling=debug`
//! directive and surfaces per-request selection and ambiguity events without
//! raising the level of `epp::registry` or `epp::api`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

/// Modules that emit events under an `epp::<component>` target.
pub const LOG_COMPONENTS: &[&str] = &["api", "cli", "config", "logging", "registry", "scheduling"];

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Pretty,
    /// One JSON object per event, for log shippers
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("pretty") {
            Ok(LogFormat::Pretty)
        } else if s.eq_ignore_ascii_case("json") {
            Ok(LogFormat::Json)
        } else {
            Err(format!("unknown log format '{}' (expected pretty or json)", s))
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
    /// Per-module levels keyed by a [`LOG_COMPONENTS`] entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_levels: Option<HashMap<String, String>>,
}

impl LoggingConfig {
    /// First configured component that has no `epp::` target, in sorted order.
    pub fn unknown_component(&self) -> Option<&str> {
        let levels = self.component_levels.as_ref()?;
        let mut unknown: Vec<&str> = levels
            .keys()
            .map(String::as_str)
            .filter(|name| !LOG_COMPONENTS.contains(name))
            .collect();
        unknown.sort_unstable();
        unknown.first().copied()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
            component_levels: None,
        }
    }
}
