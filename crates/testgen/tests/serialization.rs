use hubreach_testgen::generator::{generate_mult_networks, Network};

#[test]
fn network_round_trips_through_json() {
    let networks = generate_mult_networks(2, 10, 12);
    for network in &networks {
        let json = serde_json::to_string(network).unwrap();
        let back: Network = serde_json::from_str(&json).unwrap();
        assert_eq!(back.get_id(), network.get_id());
        assert_eq!(back.get_routes(), network.get_routes());
        assert_eq!(back.to_graph(), network.to_graph());
    }
}
