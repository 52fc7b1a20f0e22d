// src/source/mod.rs
pub mod config;
pub mod providers;
pub mod types;

use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use once_cell::sync::OnceCell;

use crate::correlate::MarketRow;
use crate::error::PipelineError;
use crate::timeline::RawEvent;
use types::DataProvider;

/// One-time metrics registration (so series show up on /metrics).
fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!("source_fetch_runs_total", "Completed dual-feed fetches.");
        describe_counter!(
            "source_fetch_errors_total",
            "Fetches where either feed failed."
        );
        describe_counter!("source_events_total", "News events delivered by providers.");
        describe_counter!(
            "source_market_rows_total",
            "Market rows delivered by providers."
        );
        describe_histogram!("source_fetch_ms", "Dual-feed fetch time in milliseconds.");
        describe_gauge!(
            "source_last_fetch_ts",
            "Unix ts when the data source last delivered."
        );
    });
}

/// Fetch both feeds from one provider, concurrently, and await both.
///
/// Either feed failing fails the whole session (`SourceUnavailable`): no
/// partial data, no retry. The two fetches share nothing, so no
/// coordination beyond the join is needed.
pub async fn fetch_all(
    provider: &dyn DataProvider,
) -> Result<(Vec<RawEvent>, Vec<MarketRow>), PipelineError> {
    ensure_metrics_described();
    let started = std::time::Instant::now();

    let (events, market) = tokio::join!(provider.fetch_events(), provider.fetch_market());

    let events = events.map_err(|e| fetch_failed(provider.name(), "news-events", e))?;
    let market = market.map_err(|e| fetch_failed(provider.name(), "market-data", e))?;

    histogram!("source_fetch_ms").record(started.elapsed().as_millis() as f64);
    counter!("source_fetch_runs_total").increment(1);
    counter!("source_events_total").increment(events.len() as u64);
    counter!("source_market_rows_total").increment(market.len() as u64);
    gauge!("source_last_fetch_ts").set(chrono::Utc::now().timestamp().max(0) as f64);

    Ok((events, market))
}

fn fetch_failed(provider: &str, feed: &str, e: anyhow::Error) -> PipelineError {
    tracing::warn!(target: "source", error = ?e, provider, feed, "feed fetch failed");
    counter!("source_fetch_errors_total").increment(1);
    PipelineError::source_unavailable(format!("{provider}/{feed}: {e:#}"))
}
