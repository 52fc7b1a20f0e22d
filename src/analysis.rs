// src/analysis.rs
//! # Analysis Session
//! Pure, testable logic that maps `(raw events, market rows)` → one
//! immutable snapshot; plus the async session runner that feeds it from
//! a data provider. No state survives between runs: a refresh re-executes
//! everything from scratch with fresh inputs.

use serde::Serialize;

use crate::category::{categorize, CategorizedEvents};
use crate::correlate::{correlate, CorrelatedEvent, MarketRow};
use crate::error::Result;
use crate::network::{extract_network, EntityNetwork};
use crate::source::types::DataProvider;
use crate::timeline::{normalize, NormalizedEvent, RawEvent};

/// Everything the presentation layer consumes, computed in one pass.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisSnapshot {
    pub events: Vec<NormalizedEvent>,
    pub correlated: Vec<CorrelatedEvent>,
    pub categories: CategorizedEvents,
    pub network: EntityNetwork,
}

/// Same logic as the session runner but purely functional for testing
/// and offline evaluation.
pub fn analyze(raw_events: &[RawEvent], market_rows: &[MarketRow]) -> Result<AnalysisSnapshot> {
    let events = normalize(raw_events)?;
    let correlated = correlate(&events, market_rows);
    let categories = categorize(&events);
    let network = extract_network(&events);
    Ok(AnalysisSnapshot {
        events,
        correlated,
        categories,
        network,
    })
}

/// Run one full analysis session against a provider: both feeds fetched
/// concurrently, then the pure pipeline over the resolved arrays.
pub async fn run(provider: &dyn DataProvider) -> Result<AnalysisSnapshot> {
    let (raw_events, market_rows) = crate::source::fetch_all(provider).await?;
    let snapshot = analyze(&raw_events, &market_rows)?;

    tracing::info!(
        target: "analysis",
        provider = provider.name(),
        events = snapshot.events.len(),
        matched = snapshot
            .correlated
            .iter()
            .filter(|c| c.market.is_some())
            .count(),
        nodes = snapshot.network.nodes.len(),
        links = snapshot.network.links.len(),
        "analysis session complete"
    );

    Ok(snapshot)
}
