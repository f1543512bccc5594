use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A model-serving pod known to the endpoint picker.
///
/// Only `address` takes part in header-directed matching. `name` is the
/// namespaced identity used to key the datastore, so two pods may share an
/// address while remaining distinct entries.
///
/// # Examples
///
/// ```
/// use epp::registry::Pod;
///
/// let pod = Pod::new("default/vllm-0", "10.0.0.7:8000")
///     .with_label("app", "vllm");
/// assert_eq!(pod.address, "10.0.0.7:8000");
/// assert_eq!(pod.labels.get("app").map(String::as_str), Some("vllm"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Pod {
    /// Namespaced name (e.g. "default/vllm-0")
    pub name: String,
    /// Network address used as the routing target
    pub address: String,
    /// Opaque label set, may be empty
    #[serde(default)]
    pub labels: HashMap<String, String>,
}

impl Pod {
    /// Create a pod with an empty label set.
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            labels: HashMap::new(),
        }
    }

    /// Attach a label, replacing any previous value for the key.
    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }
}
