// src/source/types.rs
use anyhow::{Context, Result};
use serde::Deserialize;

use crate::correlate::MarketRow;
use crate::timeline::RawEvent;

/// A source of the two feeds the pipeline consumes. Implementations own
/// their transport (embedded fixtures, HTTP); the pipeline only ever sees
/// the canonical record types.
#[async_trait::async_trait]
pub trait DataProvider: Send + Sync {
    async fn fetch_events(&self) -> Result<Vec<RawEvent>>;
    async fn fetch_market(&self) -> Result<Vec<MarketRow>>;
    fn name(&self) -> &'static str;
}

/// Market rows as they appear on the wire: either positional
/// `[date, open, close, low, high, volume]` tuples (the kline feed) or
/// keyed objects (the REST feed). Adapted into [`MarketRow`] at this
/// boundary so the pipeline never deals with mixed shapes.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum WireMarketRow {
    Positional(String, f64, f64, f64, f64, f64),
    Keyed {
        date: String,
        open: f64,
        close: f64,
        low: f64,
        high: f64,
        volume: f64,
    },
}

impl WireMarketRow {
    /// Adapt into the canonical record. `volume_scale` converts feed
    /// units into shares (the demo kline feed reports 万手).
    pub fn into_row(self, volume_scale: f64) -> Result<MarketRow> {
        let (date, open, close, low, high, volume) = match self {
            WireMarketRow::Positional(date, open, close, low, high, volume) => {
                (date, open, close, low, high, volume)
            }
            WireMarketRow::Keyed {
                date,
                open,
                close,
                low,
                high,
                volume,
            } => (date, open, close, low, high, volume),
        };
        let date = date
            .trim()
            .parse()
            .with_context(|| format!("market row has unparseable date {date:?}"))?;
        Ok(MarketRow {
            date,
            open,
            close,
            low,
            high,
            volume: volume * volume_scale,
        })
    }
}
