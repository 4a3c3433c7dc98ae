use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use video_backend::app;
use video_backend::config::settings::{AppConfig, StoreBackend};
use video_backend::infrastructure::redis::client::RedisService;
use video_backend::infrastructure::store::{JobStore, MemoryStore};
use video_backend::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    info!("Starting server...");

    let config = AppConfig::new();

    let store: Arc<dyn JobStore> = match config.store_backend {
        StoreBackend::Redis => Arc::new(
            RedisService::new(&config.redis_url)
                .await
                .context("failed to connect to Redis")?,
        ),
        StoreBackend::Memory => {
            warn!("Using in-memory job store; jobs are lost on restart");
            Arc::new(MemoryStore::new())
        }
    };

    if config.pika_api_key.is_none() {
        warn!("PIKA_API_KEY not set; every job will use the fallback video");
    }

    let port = config.server_port;
    let state = AppState::new(config, store).context("failed to build Pika client")?;
    let app = app::create_app(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("🚀 Server running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    // The router (and with it the store connection) is dropped here.
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for SIGTERM");
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

    info!("Shutdown signal received, draining requests");
}
