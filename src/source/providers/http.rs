// src/source/providers/http.rs
//! HTTP provider: fetches both feeds from a remote REST endpoint.

use anyhow::{Context, Result};
use std::time::Duration;

use crate::correlate::MarketRow;
use crate::source::config::SourceConfig;
use crate::source::types::{DataProvider, WireMarketRow};
use crate::timeline::RawEvent;

pub struct HttpProvider {
    client: reqwest::Client,
    news_url: String,
    market_url: String,
}

impl HttpProvider {
    pub fn from_config(cfg: &SourceConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()
            .context("building HTTP client")?;
        let base = cfg.base_url.trim_end_matches('/');
        Ok(Self {
            client,
            news_url: format!("{base}{}", cfg.news_path),
            market_url: format!("{base}{}", cfg.market_path),
        })
    }
}

#[async_trait::async_trait]
impl DataProvider for HttpProvider {
    async fn fetch_events(&self) -> Result<Vec<RawEvent>> {
        let resp = self
            .client
            .get(&self.news_url)
            .send()
            .await
            .with_context(|| format!("GET {}", self.news_url))?
            .error_for_status()
            .with_context(|| format!("GET {}", self.news_url))?;
        resp.json::<Vec<RawEvent>>()
            .await
            .context("decoding news-events response")
    }

    async fn fetch_market(&self) -> Result<Vec<MarketRow>> {
        let resp = self
            .client
            .get(&self.market_url)
            .send()
            .await
            .with_context(|| format!("GET {}", self.market_url))?
            .error_for_status()
            .with_context(|| format!("GET {}", self.market_url))?;
        // The remote feed reports actual share volume; no unit scaling.
        let wire: Vec<WireMarketRow> = resp
            .json()
            .await
            .context("decoding market-data response")?;
        wire.into_iter().map(|w| w.into_row(1.0)).collect()
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
