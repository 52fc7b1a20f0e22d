// src/source/config.rs
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_SOURCE_CONFIG_PATH: &str = "config/source.toml";
pub const ENV_SOURCE_CONFIG_PATH: &str = "SOURCE_CONFIG_PATH";

fn default_base_url() -> String {
    "http://localhost:8000/api".to_string()
}
fn default_news_path() -> String {
    "/news-events".to_string()
}
fn default_market_path() -> String {
    "/market-data".to_string()
}
fn default_timeout_secs() -> u64 {
    10
}
fn default_demo_delay_ms() -> u64 {
    500
}

/// Which provider backs the data source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceMode {
    /// Embedded demo dataset with simulated latency.
    #[default]
    Demo,
    /// Remote REST feed.
    Http,
}

/// Explicit data-source configuration, passed into provider construction.
/// This replaces ambient environment feature flags: the core never reads
/// global state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default)]
    pub mode: SourceMode,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_news_path")]
    pub news_path: String,
    #[serde(default = "default_market_path")]
    pub market_path: String,
    /// Outbound request timeout for the HTTP provider.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Simulated feed latency for the demo provider.
    #[serde(default = "default_demo_delay_ms")]
    pub demo_delay_ms: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            mode: SourceMode::default(),
            base_url: default_base_url(),
            news_path: default_news_path(),
            market_path: default_market_path(),
            timeout_secs: default_timeout_secs(),
            demo_delay_ms: default_demo_delay_ms(),
        }
    }
}

impl SourceConfig {
    /// Load configuration from an explicit TOML path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading source config from {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("parsing source config {}", path.display()))
    }

    /// Load using env var + fallbacks:
    /// 1) $SOURCE_CONFIG_PATH (must exist when set)
    /// 2) config/source.toml
    /// 3) built-in defaults (demo mode)
    pub fn load_default() -> Result<Self> {
        if let Ok(p) = std::env::var(ENV_SOURCE_CONFIG_PATH) {
            let pb = PathBuf::from(p);
            if !pb.exists() {
                return Err(anyhow!("SOURCE_CONFIG_PATH points to non-existent path"));
            }
            return Self::load_from(&pb);
        }
        let default_p = PathBuf::from(DEFAULT_SOURCE_CONFIG_PATH);
        if default_p.exists() {
            return Self::load_from(&default_p);
        }
        Ok(Self::default())
    }
}
