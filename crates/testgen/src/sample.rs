use hubreach_core::DiGraph;

/// The reference airline network: 20 routes over 18 airports, one of them
/// listed twice.
///
/// ```text
/// SFO -> SAN -> EYW -> LHR -> SFO      one loop, feeding DSM
/// DSM -> ORD -> BGI -> LGA <- JFK <- {ICN, HND} <- EWR
/// TLV -> DEL -> {DOH, CDG <-> SIN} , CDG -> BUD
/// ```
pub const AIRLINE_ROUTES: [(&str, &str); 20] = [
    ("DSM", "ORD"),
    ("ORD", "BGI"),
    ("BGI", "LGA"),
    ("JFK", "LGA"),
    ("ICN", "JFK"),
    ("HND", "JFK"),
    ("HND", "ICN"),
    ("EWR", "HND"),
    ("SFO", "DSM"),
    ("LHR", "SFO"),
    ("EYW", "LHR"),
    ("SFO", "SAN"),
    ("SAN", "EYW"),
    ("EWR", "HND"),
    ("TLV", "DEL"),
    ("DEL", "DOH"),
    ("DEL", "CDG"),
    ("CDG", "BUD"),
    ("CDG", "SIN"),
    ("SIN", "CDG"),
];

/// Start airports reported for the reference network.
pub const AIRLINE_STARTS: [&str; 4] = ["EYW", "DSM", "SFO", "TLV"];

/// The reference network as a graph, routes inserted in listed order.
#[must_use]
pub fn airline_network() -> DiGraph<&'static str> {
    AIRLINE_ROUTES.into_iter().collect()
}

/// The reference network with owned labels.
#[must_use]
pub fn airline_network_owned() -> DiGraph<String> {
    AIRLINE_ROUTES
        .into_iter()
        .map(|(origin, destination)| (origin.to_string(), destination.to_string()))
        .collect()
}
