//! Golden values for the reference airline network.

use hubreach_core::Component;
use hubreach_testgen::sample::{airline_network, airline_network_owned, AIRLINE_STARTS};

fn set(vertices: &[&'static str]) -> Component<&'static str> {
    vertices.iter().copied().collect()
}

#[test]
fn airline_network_size() {
    let graph = airline_network();
    assert_eq!(graph.vertex_count(), 18);
    assert_eq!(graph.edge_count(), 20);
    // EWR -> HND is listed twice.
    assert_eq!(graph.neighbors(&"EWR"), &["HND", "HND"]);
}

#[test]
fn airline_network_components() {
    let components = airline_network().kosaraju_scc();
    assert_eq!(components.len(), 14);
    assert!(components.contains(&set(&["SFO", "SAN", "EYW", "LHR"])));
    assert!(components.contains(&set(&["CDG", "SIN"])));
    assert_eq!(components.iter().filter(|c| c.len() == 1).count(), 12);
}

#[test]
fn airline_network_sources() {
    let graph = airline_network();
    let condensed = graph.condensation();
    let sources = condensed.sources();
    assert_eq!(sources.len(), 3);
    for airport in ["SFO", "EWR", "TLV"] {
        let id = condensed.component_of(&airport).unwrap();
        assert!(sources.contains(&id), "{airport} should head a source component");
    }
    assert!(condensed.graph.is_acyclic());
}

#[test]
fn airline_network_golden_counts() {
    let graph = airline_network();
    let counts: Vec<usize> = AIRLINE_STARTS
        .iter()
        .map(|start| graph.min_additional_routes(start).unwrap())
        .collect();
    // EYW, DSM, SFO, TLV
    assert_eq!(counts, vec![2, 3, 2, 2]);
}

#[test]
fn airline_network_every_start() {
    let graph = airline_network_owned();
    for airport in graph.vertices() {
        let expected = match airport.as_str() {
            "SFO" | "SAN" | "EYW" | "LHR" | "EWR" | "TLV" => 2,
            _ => 3,
        };
        assert_eq!(
            graph.min_additional_routes(airport),
            Ok(expected),
            "from {airport}"
        );
    }
}

#[test]
fn airline_network_suggestions_from_dsm() {
    let mut graph = airline_network();
    let suggested = graph.suggest_routes(&"DSM").unwrap();
    let mut targets: Vec<&str> = suggested.iter().map(|&(_, target)| target).collect();
    targets.sort_unstable();
    assert_eq!(targets, vec!["EWR", "SFO", "TLV"]);

    graph.extend(suggested);
    assert_eq!(graph.min_additional_routes(&"DSM"), Ok(0));
    assert_eq!(graph.reachable_from(&"DSM").len(), 18);
}

#[test]
fn airline_network_unknown_airport() {
    let graph = airline_network();
    assert!(graph.min_additional_routes(&"LAX").is_err());
}
