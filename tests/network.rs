// tests/network.rs
use event_market_analyzer::network::extract_network;
use event_market_analyzer::timeline::{normalize, RawEvent};

fn event(date: &str, entities: &[&str]) -> RawEvent {
    RawEvent {
        id: None,
        date: date.to_string(),
        title: String::new(),
        content: String::new(),
        entities: Some(entities.iter().map(|s| s.to_string()).collect()),
        relation: String::new(),
    }
}

#[test]
fn scenario_empty_middle_event_blocks_linking() {
    // A .. [] .. B: A and B are not at adjacent indices, so no link.
    let events = normalize(&[
        event("2024-05-07", &["A"]),
        event("2024-05-11", &[]),
        event("2024-05-16", &["B"]),
    ])
    .unwrap();
    let net = extract_network(&events);

    let names: Vec<&str> = net.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(names, vec!["A", "B"]);
    assert!(net.links.is_empty());
}

#[test]
fn no_self_loops_ever() {
    let events = normalize(&[
        event("2024-05-07", &["A国央行", "数字货币"]),
        event("2024-05-11", &["数字货币", "BIS"]),
        event("2024-05-16", &["BIS"]),
    ])
    .unwrap();
    let net = extract_network(&events);
    assert!(!net.links.is_empty());
    assert!(net.links.iter().all(|l| l.source != l.target));
}

#[test]
fn adjacency_is_consecutive_index_based() {
    let events = normalize(&[
        event("2024-05-07", &["A"]),
        event("2024-05-11", &["B"]),
        event("2024-05-16", &["C"]),
    ])
    .unwrap();
    let net = extract_network(&events);
    let pairs: Vec<(&str, &str)> = net
        .links
        .iter()
        .map(|l| (l.source.as_str(), l.target.as_str()))
        .collect();
    // A links to B and B to C; A never links to C directly.
    assert_eq!(pairs, vec![("A", "B"), ("B", "C")]);
}

#[test]
fn repeated_adjacent_pairs_stay_parallel() {
    let events = normalize(&[
        event("2024-05-07", &["A"]),
        event("2024-05-11", &["B"]),
        event("2024-05-16", &["A"]),
        event("2024-05-21", &["B"]),
    ])
    .unwrap();
    let net = extract_network(&events);
    let ab = net
        .links
        .iter()
        .filter(|l| l.source == "A" && l.target == "B")
        .count();
    // Two A→B windows, two links. Multiplicity is the signal.
    assert_eq!(ab, 2);
    assert!(net.links.iter().all(|l| l.strength == 1));
}

#[test]
fn links_carry_their_originating_event_ids() {
    let events = normalize(&[
        event("2024-05-07", &["A"]),
        event("2024-05-11", &["B"]),
    ])
    .unwrap();
    let net = extract_network(&events);
    assert_eq!(net.links.len(), 1);
    assert_eq!(net.links[0].event_ids, [events[0].id, events[1].id]);
}

#[test]
fn single_event_contributes_nodes_but_no_links() {
    let events = normalize(&[event("2024-05-07", &["A国央行", "数字货币"])]).unwrap();
    let net = extract_network(&events);
    assert_eq!(net.nodes.len(), 2);
    assert!(net.links.is_empty());
}

#[test]
fn node_ids_and_names_are_the_entity_string() {
    let events = normalize(&[event("2024-05-07", &["JP摩根"])]).unwrap();
    let net = extract_network(&events);
    assert_eq!(net.nodes[0].id, "JP摩根");
    assert_eq!(net.nodes[0].name, "JP摩根");
}
