use anyhow::Context;
use business_dashboard::api::{self, AppState};
use business_dashboard::config::AppConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .init();

    info!("🚀 Starting Business Dashboard API Server");

    // Load configuration
    let config = AppConfig::load()?;
    info!("📋 Configuration loaded");
    info!("   - Environment: {}", config.environment);
    info!("   - Server: {}:{}", config.server.host, config.server.port);
    info!("   - Allowed origins: {}", config.allowed_origins().join(", "));
    info!(
        "   - Delays: business-data {}ms, regenerate-headline {}ms",
        config.delays.business_data_ms, config.delays.regenerate_headline_ms
    );
    if let Some(seed) = config.generator.seed {
        info!("   - Generator seed: {} (deterministic)", seed);
    }

    let cors = api::cors_layer(config.allowed_origins())?;
    let state = AppState::new(config.delays.clone(), config.generator.seed);

    let app = api::router(state, cors);

    // Start server
    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("🌐 Server listening on http://{}", addr);
    info!("");
    info!("📡 Available endpoints:");
    info!("   GET  /                     - Service banner");
    info!("   GET  /health               - Health check");
    info!("   POST /business-data        - Generate business dashboard data");
    info!("   GET  /regenerate-headline  - Regenerate SEO headline");
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
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("🛑 Shutdown signal received");
}
