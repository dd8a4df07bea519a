use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

use sample_api::app_state::build_app_state;
use sample_api::config::{dotenv_outcome, AppConfig};
use sample_api::logging::init_tracing;
use sample_api::routes::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Loaded before tracing so RUST_LOG may come from .env; reported once logging is up.
    let dotenv = dotenvy::dotenv();

    let _log_guard = init_tracing()?;

    match dotenv_outcome(dotenv) {
        Ok(Some(path)) => info!(path = %path.display(), "Loaded environment file"),
        Ok(None) => {}
        Err(err) => warn!(error = %err, "Ignoring unreadable .env file"),
    }

    let config = AppConfig::from_env().context("failed to load configuration")?;
    let addr = config.bind_addr();
    info!(
        environment = %config.environment,
        debug = config.debug,
        testing = config.testing,
        "🚀 Starting sample-api"
    );

    let app = build_router(build_app_state(config));

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;
    info!(%addr, "Listening for HTTP traffic");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated unexpectedly")?;

    info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = %err, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                error!(error = %err, "Failed to listen for SIGTERM");
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

    info!("Shutdown signal received, draining connections...");
}
