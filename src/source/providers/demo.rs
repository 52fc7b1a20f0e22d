// src/source/providers/demo.rs
//! Demo provider: the embedded 数字货币 storyline and its kline series,
//! served with a simulated feed delay.

use anyhow::{Context, Result};
use std::time::Duration;

use crate::correlate::MarketRow;
use crate::source::config::SourceConfig;
use crate::source::types::{DataProvider, WireMarketRow};
use crate::timeline::RawEvent;

const NEWS_FIXTURE: &str = include_str!("../../../data/news_events.json");
const KLINE_FIXTURE: &str = include_str!("../../../data/kline.json");

/// The demo kline feed reports volume in 万手 (10k-lot) units.
const VOLUME_SCALE: f64 = 10_000.0;

pub struct DemoProvider {
    delay: Duration,
}

impl DemoProvider {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
        }
    }

    pub fn from_config(cfg: &SourceConfig) -> Self {
        Self::new(cfg.demo_delay_ms)
    }
}

#[async_trait::async_trait]
impl DataProvider for DemoProvider {
    async fn fetch_events(&self) -> Result<Vec<RawEvent>> {
        tokio::time::sleep(self.delay).await;
        serde_json::from_str(NEWS_FIXTURE).context("parsing embedded news-events fixture")
    }

    async fn fetch_market(&self) -> Result<Vec<MarketRow>> {
        tokio::time::sleep(self.delay).await;
        let wire: Vec<WireMarketRow> =
            serde_json::from_str(KLINE_FIXTURE).context("parsing embedded kline fixture")?;
        wire.into_iter().map(|w| w.into_row(VOLUME_SCALE)).collect()
    }

    fn name(&self) -> &'static str {
        "demo"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixtures_parse_and_align() {
        let p = DemoProvider::new(0);
        let events = p.fetch_events().await.unwrap();
        let rows = p.fetch_market().await.unwrap();

        assert_eq!(events.len(), 10);
        assert_eq!(rows.len(), 30);
        // Every event date in the demo storyline has a market row.
        for ev in &events {
            let date: chrono::NaiveDate = ev.date.parse().unwrap();
            assert!(
                rows.iter().any(|r| r.date == date),
                "no market row for {}",
                ev.date
            );
        }
    }

    #[tokio::test]
    async fn demo_volume_is_scaled_to_shares() {
        let rows = DemoProvider::new(0).fetch_market().await.unwrap();
        assert_eq!(rows[0].volume, 1_500_000.0);
    }
}
