//! CLI module for the endpoint picker
//!
//! # Commands
//!
//! - `serve` - Start the HTTP scheduling service
//! - `pods` - List pods from the configuration file
//! - `pick` - Run one header-directed selection against the configured pods
//! - `config` - Configuration utilities (init)
//! - `completions` - Generate shell completions
//!
//! # Example
//!
//! ```bash
//! epp config init
//! epp pick 10.0.0.7:8000 --json
//! epp serve --port 9002
//! ```

pub mod completions;
pub mod config;
pub mod output;
pub mod pick;
pub mod pods;
pub mod serve;

pub use completions::handle_completions;
pub use config::handle_config_init;

use crate::config::EppConfig;
use crate::registry::Datastore;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// epp - header-directed endpoint picker
#[derive(Parser, Debug)]
#[command(
    name = "epp",
    version,
    about = "Routes inference requests to the pod named in a request header"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the scheduling service
    Serve(ServeArgs),
    /// List configured pods
    Pods(PodsArgs),
    /// Pick the pod for an endpoint address
    Pick(PickArgs),
    /// Configuration utilities
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "epp.toml")]
    pub config: PathBuf,

    /// Override server port
    #[arg(short, long, env = "EPP_PORT")]
    pub port: Option<u16>,

    /// Override server host
    #[arg(short = 'H', long, env = "EPP_HOST")]
    pub host: Option<String>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "EPP_LOG_LEVEL")]
    pub log_level: Option<String>,
}

#[derive(Args, Debug)]
pub struct PodsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Path to configuration file
    #[arg(short, long, default_value = "epp.toml")]
    pub config: PathBuf,
}

#[derive(Args, Debug)]
pub struct PickArgs {
    /// Target address, as it would appear in the endpoint selection header
    pub endpoint: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Path to configuration file
    #[arg(short, long, default_value = "epp.toml")]
    pub config: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Initialize a new configuration file
    Init(ConfigInitArgs),
}

#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Output file path
    #[arg(short, long, default_value = "epp.toml")]
    pub output: PathBuf,

    /// Overwrite existing file
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

/// Load and validate a config file, then seed a datastore from its pods.
pub fn load_datastore(path: &Path) -> Result<Arc<Datastore>, Box<dyn std::error::Error>> {
    let config = EppConfig::load(Some(path))?;
    config.validate()?;

    let datastore = Arc::new(Datastore::new());
    serve::load_pods_from_config(&config, &datastore)?;
    Ok(datastore)
}
