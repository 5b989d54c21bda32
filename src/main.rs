use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use hammie_tracker::config::Config;
use hammie_tracker::fetch::HttpFetch;
use hammie_tracker::host;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env().context("Error reading configuration")?;

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log).context("Error parsing log filter")?,
    };

    tracing_subscriber::fmt()
        .with_ansi(true)
        .with_env_filter(filter)
        .init();

    let fetch = HttpFetch::new(config.origin.clone());
    info!(origin = %fetch.origin(), "Using device origin");

    let app = host::router(fetch);

    let listener = tokio::net::TcpListener::bind(config.listen)
        .await
        .with_context(|| format!("Error binding {}", config.listen))?;
    tracing::debug!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
