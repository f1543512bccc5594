//! Structured logging helpers
//!
//! Filter construction for the `tracing` subscriber and request ID generation.
//! The subscriber itself is installed by `cli::serve::init_tracing`.

pub mod request_id;

pub use request_id::generate_request_id;

use crate::config::LoggingConfig;

/// Build filter directives string from LoggingConfig
///
/// Produces the base level followed by one `epp::<component>=<level>`
/// directive per configured component.
///
/// # Examples
///
/// ```
/// use epp::config::{LogFormat, LoggingConfig};
/// use epp::logging::build_filter_directives;
/// use std::collections::HashMap;
///
/// let mut component_levels = HashMap::new();
/// component_levels.insert("scheduling".to_string(), "debug".to_string());
///
/// let config = LoggingConfig {
///     level: "info".to_string(),
///     format: LogFormat::Pretty,
///     component_levels: Some(component_levels),
/// };
///
/// assert_eq!(build_filter_directives(&config), "info,epp::scheduling=debug");
/// ```
pub fn build_filter_directives(config: &LoggingConfig) -> String {
    let mut filter_str = config.level.clone();

    if let Some(component_levels) = &config.component_levels {
        // Sorted so the output does not depend on HashMap order.
        let mut components: Vec<_> = component_levels.iter().collect();
        components.sort();
        for (component, level) in components {
            filter_str.push_str(&format!(",epp::{}={}", component, level));
        }
    }

    filter_str
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_filter_directives_base_level_only() {
        let config = LoggingConfig::default();
        assert_eq!(build_filter_directives(&config), "info");
    }

    #[test]
    fn test_filter_directives_multiple_components_sorted() {
        let mut levels = HashMap::new();
        levels.insert("scheduling".to_string(), "trace".to_string());
        levels.insert("api".to_string(), "warn".to_string());

        let config = LoggingConfig {
            level: "debug".to_string(),
            component_levels: Some(levels),
            ..LoggingConfig::default()
        };

        assert_eq!(
            build_filter_directives(&config),
            "debug,epp::api=warn,epp::scheduling=trace"
        );
    }

    #[test]
    fn test_filter_directives_parse_as_env_filter() {
        let mut levels = HashMap::new();
        levels.insert("registry".to_string(), "debug".to_string());
        let config = LoggingConfig {
            component_levels: Some(levels),
            ..LoggingConfig::default()
        };

        let filter = build_filter_directives(&config);
        assert!(tracing_subscriber::EnvFilter::try_new(&filter).is_ok());
    }
}
