pub mod app;
pub mod config;
pub mod error;
pub mod infra;
pub mod routes;

use crate::config::Config;
use crate::error::AppError;
use crate::infra::init_db;
use crate::routes::{build_router, AppState};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // Also captures `log` records from the store layer.
    let _ = fmt().with_env_filter(filter).try_init();
}

/// Initialize storage once, then serve until Ctrl+C / SIGTERM.
pub async fn run() -> Result<(), AppError> {
    init_logging(config::debug_enabled());
    let config = Config::load()?;

    info!("DB path: {:?}", config.db_path);
    let db = init_db(&config.db_path).map_err(|e| {
        tracing::error!("DB init failed: {}", e);
        e
    })?;

    let app = build_router(AppState {
        db,
        pdf_dir: config.pdf_dir.clone(),
    });

    let listener = TcpListener::bind(config.addr).await?;
    info!("Server running on {}", config.addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::warn!("failed to install SIGTERM handler: {}", e);
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
}
