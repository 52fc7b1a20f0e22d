//! News-Event Market Analyzer — Binary Entrypoint
//! Boots the Axum HTTP server, wiring the data source, routes, and
//! middleware.

use anyhow::Context;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use event_market_analyzer::api::{self, AppState};
use event_market_analyzer::metrics::Metrics;
use event_market_analyzer::source::{config::SourceConfig, providers};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("event_market_analyzer=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op elsewhere. Enables SOURCE_CONFIG_PATH
    // and LISTEN_ADDR from .env.
    let _ = dotenvy::dotenv();

    init_tracing();

    let cfg = SourceConfig::load_default().context("loading source config")?;
    let provider = providers::build(&cfg).context("building data provider")?;

    let metrics = Metrics::init();

    let state = AppState::new(provider);
    let router = api::router(state).merge(metrics.router());

    let addr = std::env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;

    tracing::info!(%addr, mode = ?cfg.mode, "serving analysis API");
    axum::serve(listener, router).await?;

    Ok(())
}
