// src/correlate.rs
//! Market correlation: joins normalized events to a daily price series by
//! calendar-date equality and derives a percentage price change per match.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::timeline::NormalizedEvent;

/// Canonical daily market row. Providers adapt whatever wire shape they
/// receive (positional tuples, keyed objects) into this record before the
/// pipeline sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketRow {
    pub date: NaiveDate,
    pub open: f64,
    pub close: f64,
    pub low: f64,
    pub high: f64,
    pub volume: f64,
}

/// A normalized event plus the market row on its date, if any.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelatedEvent {
    #[serde(flatten)]
    pub event: NormalizedEvent,
    /// The first market row whose date equals the event's date.
    #[serde(rename = "marketData")]
    pub market: Option<MarketRow>,
    /// `(close - open) / open * 100`, rounded to 2 decimals. Absent when
    /// no row matched or when `open == 0` (no impact data, not an error).
    #[serde(rename = "priceChange")]
    pub price_change: Option<f64>,
}

/// Correlate events with the market series. Neither input is mutated.
///
/// The scan is O(E×M), fine for the tens of records this pipeline sees.
/// If the series carries duplicate dates, the first row in input order
/// wins.
pub fn correlate(events: &[NormalizedEvent], market_rows: &[MarketRow]) -> Vec<CorrelatedEvent> {
    events
        .iter()
        .map(|ev| {
            let market = market_rows.iter().find(|row| row.date == ev.date).cloned();
            let price_change = market.as_ref().and_then(price_change_pct);
            CorrelatedEvent {
                event: ev.clone(),
                market,
                price_change,
            }
        })
        .collect()
}

/// Day-over-open move in percent, rounded to 2 decimals.
/// A zero open yields `None` rather than an infinite/NaN value.
fn price_change_pct(row: &MarketRow) -> Option<f64> {
    if row.open == 0.0 {
        return None;
    }
    Some(round2((row.close - row.open) / row.open * 100.0))
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
