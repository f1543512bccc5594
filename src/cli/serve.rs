//! Serve command implementation

use crate::api::{create_router, AppState};
use crate::cli::ServeArgs;
use crate::config::{EppConfig, LogFormat};
use crate::registry::{Datastore, Pod};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Load configuration with CLI overrides
pub fn load_config_with_overrides(
    args: &ServeArgs,
) -> Result<EppConfig, Box<dyn std::error::Error>> {
    let mut config = if args.config.exists() {
        EppConfig::load(Some(&args.config))?
    } else {
        tracing::debug!("Config file not found, using defaults");
        EppConfig::default()
    };

    config = config.with_env_overrides();

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }
    if let Some(ref log_level) = args.log_level {
        config.logging.level = log_level.clone();
    }

    Ok(config)
}

/// Initialize tracing based on configuration
///
/// `RUST_LOG`, when set, takes precedence over the configured levels.
pub fn init_tracing(
    config: &crate::config::LoggingConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let filter_str = crate::logging::build_filter_directives(config);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    match config.format {
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .try_init()?;
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .try_init()?;
        }
    }

    Ok(())
}

/// Seed the datastore with the pods declared in configuration
pub fn load_pods_from_config(
    config: &EppConfig,
    datastore: &Datastore,
) -> Result<(), Box<dyn std::error::Error>> {
    for pod_config in &config.pods {
        datastore.add_pod(Pod::from(pod_config))?;
        tracing::info!(
            name = %pod_config.name,
            address = %pod_config.address,
            "Loaded pod from config"
        );
    }

    Ok(())
}

/// Wait for SIGINT or SIGTERM, then cancel `cancel_token`
async fn shutdown_signal(cancel_token: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for SIGINT");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received SIGINT, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }

    cancel_token.cancel();
}

/// Main serve command handler
pub async fn run_serve(args: ServeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config_with_overrides(&args)?;
    config.validate()?;

    init_tracing(&config.logging)?;

    tracing::info!("Starting endpoint picker");
    tracing::debug!(?config, "Loaded configuration");

    let datastore = Arc::new(Datastore::new());
    load_pods_from_config(&config, &datastore)?;
    if datastore.is_empty() {
        tracing::warn!("No pods configured; every scheduling request will fail");
    }

    let cancel_token = CancellationToken::new();
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = Arc::new(AppState::with_shutdown(
        datastore,
        Arc::new(config),
        cancel_token.clone(),
    ));
    let app = create_router(state);

    tracing::info!(addr = %addr, "Endpoint picker listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cancel_token))
        .await?;

    tracing::info!("Endpoint picker stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PodConfig, ENV_LOCK};
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    fn args(config: PathBuf, port: Option<u16>) -> ServeArgs {
        ServeArgs {
            config,
            port,
            host: None,
            log_level: None,
        }
    }

    #[test]
    fn test_serve_config_loading() {
        let _guard = ENV_LOCK.lock().unwrap();
        let temp = NamedTempFile::new().unwrap();
        std::fs::write(temp.path(), "[server]\nport = 8080").unwrap();

        let config = load_config_with_overrides(&args(temp.path().to_path_buf(), None)).unwrap();
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_serve_cli_overrides_config() {
        let _guard = ENV_LOCK.lock().unwrap();
        let temp = NamedTempFile::new().unwrap();
        std::fs::write(temp.path(), "[server]\nport = 8080").unwrap();

        let config =
            load_config_with_overrides(&args(temp.path().to_path_buf(), Some(9100))).unwrap();
        assert_eq!(config.server.port, 9100); // CLI wins
    }

    #[test]
    fn test_serve_works_without_config_file() {
        let _guard = ENV_LOCK.lock().unwrap();
        let config =
            load_config_with_overrides(&args(PathBuf::from("nonexistent.toml"), None)).unwrap();
        assert_eq!(config.server.port, 9002); // Default
    }

    #[test]
    fn test_pods_loaded_from_config() {
        let mut config = EppConfig::default();
        config.pods.push(PodConfig {
            name: "default/a".to_string(),
            address: "10.0.0.1:8000".to_string(),
            labels: Default::default(),
        });

        let datastore = Datastore::new();
        load_pods_from_config(&config, &datastore).unwrap();

        assert_eq!(datastore.pod_count(), 1);
        assert_eq!(datastore.get_pod("default/a").unwrap().address, "10.0.0.1:8000");
    }

    #[test]
    fn test_duplicate_pod_names_rejected_when_loading() {
        let mut config = EppConfig::default();
        for address in ["10.0.0.1:8000", "10.0.0.2:8000"] {
            config.pods.push(PodConfig {
                name: "default/a".to_string(),
                address: address.to_string(),
                labels: Default::default(),
            });
        }

        let datastore = Datastore::new();
        assert!(load_pods_from_config(&config, &datastore).is_err());
    }
}
