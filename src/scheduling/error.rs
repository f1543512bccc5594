//! Error types for scheduling failures

use thiserror::Error;

/// Errors that can occur while picking a pod for a request
#[derive(Debug, Error)]
pub enum SchedulingError {
    /// The endpoint selection header is absent or empty
    #[error("Request header '{header}' is missing or empty")]
    MissingDirective { header: &'static str },

    /// No pod in the snapshot has the requested address
    #[error("No pod found with address '{address}'")]
    NoMatchingInstance { address: String },

    /// The caller cancelled the request before a snapshot was read
    #[error("Scheduling cancelled while reading pod snapshot")]
    Cancelled,
}
