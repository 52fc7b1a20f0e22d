// src/network.rs
//! Entity relationship extraction: entities tagged on temporally adjacent
//! events become a graph for force-directed rendering.

use serde::Serialize;
use std::collections::HashSet;

use crate::timeline::NormalizedEvent;

/// A distinct entity. `id` and `name` are the same string; identity is
/// exact string equality (case-sensitive, no trimming, no aliasing).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityNode {
    pub id: String,
    pub name: String,
}

/// One co-occurrence between an entity of event `i` and an entity of
/// event `i + 1`. Directional in construction order; renderers treat
/// links as undirected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityLink {
    pub source: String,
    pub target: String,
    /// Fixed at 1. Repeat co-occurrences emit parallel links instead of
    /// accumulating, so link multiplicity encodes signal strength.
    pub strength: u32,
    /// Ids of the two originating events, earlier first.
    #[serde(rename = "eventIds")]
    pub event_ids: [u32; 2],
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct EntityNetwork {
    pub nodes: Vec<EntityNode>,
    pub links: Vec<EntityLink>,
}

/// Build the entity graph over a normalized (time-ordered) event sequence.
///
/// Nodes: every distinct entity across all events, in first-appearance
/// order. Links: for each strictly consecutive event pair, every cross
/// pair of entities with `source != target`: no self-loops, and no
/// deduplication across windows. An event with no entities contributes
/// no links at its position but does not splice its neighbors together:
/// adjacency is index-based, never "nearest event with entities".
pub fn extract_network(events: &[NormalizedEvent]) -> EntityNetwork {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut nodes = Vec::new();
    for ev in events {
        for entity in &ev.entities {
            if seen.insert(entity.as_str()) {
                nodes.push(EntityNode {
                    id: entity.clone(),
                    name: entity.clone(),
                });
            }
        }
    }

    let mut links = Vec::new();
    for pair in events.windows(2) {
        let (current, next) = (&pair[0], &pair[1]);
        for e1 in &current.entities {
            for e2 in &next.entities {
                if e1 != e2 {
                    links.push(EntityLink {
                        source: e1.clone(),
                        target: e2.clone(),
                        strength: 1,
                        event_ids: [current.id, next.id],
                    });
                }
            }
        }
    }

    EntityNetwork { nodes, links }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::{normalize, RawEvent};

    fn events_with(entity_lists: &[&[&str]]) -> Vec<NormalizedEvent> {
        let raw: Vec<RawEvent> = entity_lists
            .iter()
            .enumerate()
            .map(|(i, entities)| RawEvent {
                id: None,
                // Sequential days keep the normalized order equal to input order.
                date: format!("2024-05-{:02}", i + 1),
                title: String::new(),
                content: String::new(),
                entities: Some(entities.iter().map(|s| s.to_string()).collect()),
                relation: String::new(),
            })
            .collect();
        normalize(&raw).unwrap()
    }

    #[test]
    fn empty_and_single_event_inputs_yield_no_links() {
        let net = extract_network(&[]);
        assert!(net.nodes.is_empty() && net.links.is_empty());

        let net = extract_network(&events_with(&[&["A", "B"]]));
        assert_eq!(net.nodes.len(), 2);
        assert!(net.links.is_empty());
    }

    #[test]
    fn adjacent_events_cross_link_their_entities() {
        let net = extract_network(&events_with(&[&["A", "B"], &["C"]]));
        assert_eq!(net.nodes.len(), 3);
        let pairs: Vec<(&str, &str)> = net
            .links
            .iter()
            .map(|l| (l.source.as_str(), l.target.as_str()))
            .collect();
        assert_eq!(pairs, vec![("A", "C"), ("B", "C")]);
        assert_eq!(net.links[0].event_ids, [1, 2]);
    }

    #[test]
    fn no_self_loops() {
        let net = extract_network(&events_with(&[&["A", "B"], &["A"]]));
        assert!(net.links.iter().all(|l| l.source != l.target));
        assert_eq!(net.links.len(), 1); // only B → A
    }

    #[test]
    fn empty_entity_list_breaks_linking_but_not_adjacency() {
        // A .. (nothing) .. B: no link between A and B, both still nodes.
        let net = extract_network(&events_with(&[&["A"], &[], &["B"]]));
        let names: Vec<&str> = net.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert!(net.links.is_empty());
    }

    #[test]
    fn repeated_pairs_emit_parallel_links() {
        let net = extract_network(&events_with(&[&["A"], &["B"], &["A"], &["B"]]));
        assert_eq!(net.links.len(), 3);
        assert!(net.links.iter().all(|l| l.strength == 1));
        // A→B occurs twice, across different event windows.
        let ab: Vec<&EntityLink> = net
            .links
            .iter()
            .filter(|l| l.source == "A" && l.target == "B")
            .collect();
        assert_eq!(ab.len(), 2);
        assert_ne!(ab[0].event_ids, ab[1].event_ids);
    }

    #[test]
    fn nodes_keep_first_appearance_order_and_are_distinct() {
        let net = extract_network(&events_with(&[&["B", "A"], &["A", "C"]]));
        let names: Vec<&str> = net.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }

    #[test]
    fn entity_identity_is_case_sensitive() {
        let net = extract_network(&events_with(&[&["bis"], &["BIS"]]));
        assert_eq!(net.nodes.len(), 2);
        assert_eq!(net.links.len(), 1); // "bis" ≠ "BIS", so they do link
    }
}
