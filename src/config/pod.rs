//! Static pod configuration

use crate::registry::Pod;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A pod declared in the configuration file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodConfig {
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub labels: HashMap<String, String>,
}

impl From<&PodConfig> for Pod {
    fn from(config: &PodConfig) -> Self {
        Pod {
            name: config.name.clone(),
            address: config.address.clone(),
            labels: config.labels.clone(),
        }
    }
}
