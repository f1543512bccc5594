/// Errors that can occur during datastore operations
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("pod already exists: {0}")]
    DuplicatePod(String),

    #[error("pod not found: {0}")]
    PodNotFound(String),
}
