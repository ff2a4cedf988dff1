use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use trivia_server::{AppState, ServerConfig, create_router, db};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;

    info!("starting trivia server");
    let config = ServerConfig::from_env().context("failed to load server config")?;

    let db = db::init_pool_and_migrate(&config.database_url)
        .await
        .context("failed to initialize database")?;

    let app = create_router(AppState::new(db));
    let listener = tokio::net::TcpListener::bind(config.bind_address)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_address))?;

    info!(address = %config.bind_address, "server is ready, press Ctrl+C to shut down");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received, stopping server");
}

fn init_tracing() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    Ok(())
}
