// Workflow Hub API server
// Decision: Catalog is loaded before binding; any load error aborts startup
// Decision: Catalog and executor are injected into route state, never global

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wfhub_control_plane::{app::build_app, config::ServerConfig, WorkflowService};
use wfhub_core::{StubExecutor, WorkflowCatalog};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before reading RUST_LOG
    let dotenv_path = dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "wfhub_control_plane=debug,wfhub_core=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("wfhub-control-plane starting...");
    if let Some(path) = dotenv_path {
        tracing::info!("Loaded .env from {:?}", path);
    }

    let config = ServerConfig::from_env().context("Invalid server configuration")?;
    tracing::info!(
        host = %config.host,
        port = config.port,
        workflows_file = %config.workflows_file.display(),
        "Server configured"
    );

    // Load the catalog once; it is read-only for the lifetime of the process
    let catalog = WorkflowCatalog::load(&config.workflows_file).with_context(|| {
        format!(
            "Failed to load workflow catalog from {}",
            config.workflows_file.display()
        )
    })?;

    let service = Arc::new(WorkflowService::new(
        Arc::new(catalog),
        Arc::new(StubExecutor::with_builtins()),
    ));

    if !config.api_prefix.is_empty() {
        tracing::info!(prefix = %config.api_prefix, "API prefix configured");
    }

    let app = build_app(service, &config.api_prefix);

    // Start HTTP server
    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to address {}", addr))?;
    tracing::info!("HTTP server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl-C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
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
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Received shutdown signal");
}
