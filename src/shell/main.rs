use anyhow::Context;
use clap::Parser;
use products::shell::config::Config;
use products::shell::http::router;
use products::shell::state::AppState;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::parse();
    let state = AppState::in_memory(config.cache_config(), config.retry_policy())
        .context("invalid cache configuration")?;

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    info!(
        bind = %config.bind,
        cache_capacity = config.cache_capacity,
        cache_ttl_secs = config.cache_ttl_secs,
        retry_max_attempts = config.retry_max_attempts,
        retry_delay_ms = config.retry_delay_ms,
        "products service listening"
    );

    axum::serve(listener, router(state))
        .await
        .context("http server stopped")?;
    Ok(())
}
