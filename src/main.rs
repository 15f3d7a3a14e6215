use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use cinematch_api::config::Config;
use cinematch_api::oracle;
use cinematch_api::providers::TmdbProvider;
use cinematch_api::routes::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;

    let provider = TmdbProvider::new(
        config.tmdb_api_key.clone(),
        config.tmdb_api_url.clone(),
        Duration::from_secs(config.fetch_timeout_secs),
    );
    let oracle = oracle::load_oracle(config.model_path.as_deref());

    let state = AppState::new(Arc::new(provider), oracle);
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
