use business_insight::api::{self, AppState};
use business_insight::config::AppConfig;
use business_insight::insight::{HttpBackend, InsightClient};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("🚀 Starting Business Insight Dashboard API");

    // Load configuration
    let config = AppConfig::load()?;
    info!("📋 Configuration loaded");
    info!("   - Backend: {}", config.backend.base_url);
    info!("   - Backend timeout: {}ms", config.backend.timeout_ms);
    info!("   - Server: {}:{}", config.server.host, config.server.port);

    // Initialize insight client
    let backend = HttpBackend::new(&config.backend.base_url, config.backend.timeout())?;
    let mut client = InsightClient::new(backend);
    if let Some(latency) = config.latency.simulated() {
        info!(
            "⏳ Demo latency enabled ({}-{}ms)",
            latency.min.as_millis(),
            latency.max.as_millis()
        );
        client = client.with_latency(latency);
    }

    let state = AppState {
        client: Arc::new(client),
    };

    let app = api::app(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("🌐 Server listening on http://{}", addr);
    info!("");
    info!("📡 Available endpoints:");
    info!("   GET  /health             - Health check");
    info!("   POST /insights           - Rating, reviews and headline");
    info!("   GET  /insights/headline  - Regenerate headline");
    info!("");
    info!("✨ Server is ready to accept requests!");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Server shutting down gracefully");

    Ok(())
}

/// Graceful shutdown handler
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
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

    info!("🛑 Shutdown signal received");
}
