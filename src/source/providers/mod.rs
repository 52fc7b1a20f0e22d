// src/source/providers/mod.rs
pub mod demo;
pub mod http;

use anyhow::Result;
use std::sync::Arc;

use crate::source::config::{SourceConfig, SourceMode};
use crate::source::types::DataProvider;

/// Build the provider the configuration asks for.
pub fn build(cfg: &SourceConfig) -> Result<Arc<dyn DataProvider>> {
    Ok(match cfg.mode {
        SourceMode::Demo => Arc::new(demo::DemoProvider::from_config(cfg)),
        SourceMode::Http => Arc::new(http::HttpProvider::from_config(cfg)?),
    })
}
