//! epp - header-directed endpoint picker
//!
//! Selects the model-serving pod named in a request's
//! `test-epp-endpoint-selection` header from a snapshot of known pods.

pub mod api;
pub mod cli;
pub mod config;
pub mod logging;
pub mod registry;
pub mod scheduling;
