// src/timeline.rs
//! Event normalization: raw news records → a canonical, time-ordered
//! sequence with derived epoch timestamps and always-present entity lists.
//! Also hosts the date-selection lookup used by the presentation layer.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{PipelineError, Result};

/// A raw news event as delivered by the data source. Source of truth;
/// immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEvent {
    /// Stable identifier. Assigned from input position when the feed
    /// omits it, so entity links can cite their originating events.
    #[serde(default)]
    pub id: Option<u32>,
    /// Calendar date, "YYYY-MM-DD".
    pub date: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    /// Tagged entity names. May be absent in the feed.
    #[serde(default)]
    pub entities: Option<Vec<String>>,
    /// Enum-like relation label (e.g. "技术演进", "风险事件").
    #[serde(default)]
    pub relation: String,
}

/// A normalized event: parsed date, derived timestamp, entities coerced
/// to an empty list when the feed omitted them. One per raw event, 1:1.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedEvent {
    pub id: u32,
    pub date: NaiveDate,
    /// Milliseconds since epoch at UTC midnight of `date`.
    pub timestamp: i64,
    pub title: String,
    pub content: String,
    pub entities: Vec<String>,
    pub relation: String,
}

/// Normalize a raw event sequence into ascending timestamp order.
///
/// - Missing `entities` become an empty list (never absent downstream).
/// - Missing `id` is filled from the record's 1-based input position,
///   before sorting.
/// - The sort is stable: equal timestamps keep input order.
/// - A date string that fails to parse is `InvalidDate` with the record
///   index; malformed dates never become silent NaN-like sort keys.
pub fn normalize(raw_events: &[RawEvent]) -> Result<Vec<NormalizedEvent>> {
    let mut out = Vec::with_capacity(raw_events.len());

    for (index, ev) in raw_events.iter().enumerate() {
        let date = parse_date(&ev.date).ok_or_else(|| PipelineError::InvalidDate {
            index,
            value: ev.date.clone(),
        })?;

        out.push(NormalizedEvent {
            id: ev.id.unwrap_or(index as u32 + 1),
            date,
            timestamp: epoch_millis(date),
            title: ev.title.clone(),
            content: ev.content.clone(),
            entities: ev.entities.clone().unwrap_or_default(),
            relation: ev.relation.clone(),
        });
    }

    // Vec::sort_by_key is stable, which is what keeps tie order deterministic.
    out.sort_by_key(|e| e.timestamp);
    Ok(out)
}

/// Selection lookup: find the event matching a "YYYY-MM-DD" string under
/// calendar-date equality. Unparseable input selects nothing.
pub fn find_by_date<'a>(
    events: &'a [NormalizedEvent],
    date: &str,
) -> Option<&'a NormalizedEvent> {
    let wanted = parse_date(date)?;
    events.iter().find(|e| e.date == wanted)
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

fn epoch_millis(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp_millis()
}
