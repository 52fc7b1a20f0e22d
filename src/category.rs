// src/category.rs
//! Relation-label categorization: every event lands in exactly one of
//! three buckets, driven by a static membership table embedded at build
//! time (`relation_categories.json` at the repo root).

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::timeline::NormalizedEvent;

static RELATION_TABLE: Lazy<HashMap<String, Category>> = Lazy::new(|| {
    let raw = include_str!("../relation_categories.json");
    serde_json::from_str::<HashMap<String, Category>>(raw).expect("valid relation category table")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Positive,
    Negative,
    Neutral,
}

/// Look up the bucket for a relation label. Unknown or empty labels are
/// neutral, which makes the mapping total.
pub fn category_for(relation: &str) -> Category {
    RELATION_TABLE
        .get(relation)
        .copied()
        .unwrap_or(Category::Neutral)
}

/// Events split by category. Input order is preserved within each bucket.
/// Recomputed per call; buckets are never persisted on the event.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CategorizedEvents {
    pub positive: Vec<NormalizedEvent>,
    pub negative: Vec<NormalizedEvent>,
    pub neutral: Vec<NormalizedEvent>,
}

impl CategorizedEvents {
    pub fn len(&self) -> usize {
        self.positive.len() + self.negative.len() + self.neutral.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn categorize(events: &[NormalizedEvent]) -> CategorizedEvents {
    let mut out = CategorizedEvents::default();
    for ev in events {
        let bucket = match category_for(&ev.relation) {
            Category::Positive => &mut out.positive,
            Category::Negative => &mut out.negative,
            Category::Neutral => &mut out.neutral,
        };
        bucket.push(ev.clone());
    }
    out
}
