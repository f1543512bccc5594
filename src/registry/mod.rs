//! Pod datastore module.
//!
//! Provides thread-safe in-memory storage of model-serving pods and the
//! snapshot interface the scheduler reads from.

mod error;
mod pod;

pub use error::*;
pub use pod::*;

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

/// Source of point-in-time pod snapshots.
///
/// Implementations return every pod they currently know about. The returned
/// order carries no meaning and may differ between calls.
#[async_trait]
pub trait PodSnapshotProvider: Send + Sync {
    /// List all currently known pods.
    async fn pod_get_all(&self) -> Vec<Pod>;
}

/// The Datastore holds all pods known to the endpoint picker.
///
/// Backed by a lock-free concurrent map (DashMap) keyed by pod name.
///
/// # Examples
///
/// ```
/// use epp::registry::{Datastore, Pod};
///
/// let datastore = Datastore::new();
/// datastore.add_pod(Pod::new("default/vllm-0", "10.0.0.7:8000")).unwrap();
/// assert_eq!(datastore.pod_count(), 1);
/// ```
pub struct Datastore {
    pods: DashMap<String, Pod>,
}

impl Datastore {
    /// Create a new empty Datastore.
    pub fn new() -> Self {
        Self {
            pods: DashMap::new(),
        }
    }

    /// Add a new pod.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicatePod` if a pod with the same name already exists.
    pub fn add_pod(&self, pod: Pod) -> Result<(), RegistryError> {
        match self.pods.entry(pod.name.clone()) {
            Entry::Occupied(_) => Err(RegistryError::DuplicatePod(pod.name)),
            Entry::Vacant(slot) => {
                tracing::debug!(name = %pod.name, address = %pod.address, "Pod added");
                slot.insert(pod);
                Ok(())
            }
        }
    }

    /// Insert a pod or replace the existing entry with the same name.
    ///
    /// Returns the replaced pod, if any.
    pub fn upsert_pod(&self, pod: Pod) -> Option<Pod> {
        tracing::debug!(name = %pod.name, address = %pod.address, "Pod upserted");
        self.pods.insert(pod.name.clone(), pod)
    }

    /// Remove a pod by name.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::PodNotFound` if no pod with the given name exists.
    pub fn remove_pod(&self, name: &str) -> Result<Pod, RegistryError> {
        self.pods
            .remove(name)
            .map(|(_, pod)| pod)
            .ok_or_else(|| RegistryError::PodNotFound(name.to_string()))
    }

    /// Get a pod by name.
    pub fn get_pod(&self, name: &str) -> Option<Pod> {
        self.pods.get(name).map(|entry| entry.value().clone())
    }

    /// Get cloned copies of all pods, in map iteration order.
    pub fn get_all_pods(&self) -> Vec<Pod> {
        self.pods.iter().map(|entry| entry.value().clone()).collect()
    }

    /// Number of pods currently stored.
    pub fn pod_count(&self) -> usize {
        self.pods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pods.is_empty()
    }
}

impl Default for Datastore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PodSnapshotProvider for Datastore {
    async fn pod_get_all(&self) -> Vec<Pod> {
        self.get_all_pods()
    }
}
