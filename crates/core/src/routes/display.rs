use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{Debug, Display, Write};
use core::hash::Hash;

use hashbrown::HashMap;

use crate::graph::digraph::DiGraph;

/// Format a graph as the route-list text format.
///
/// Each vertex with outgoing edges gets one line, `ORIGIN -> D1, D2`, in
/// vertex order with destinations in insertion order. Vertices without
/// outgoing edges only appear as destinations. The output always ends with
/// a trailing newline (unless empty) so that it round-trips through
/// `parse_routes`.
#[must_use]
pub fn format_routes<T>(graph: &DiGraph<T>) -> String
where
    T: Hash + Eq + Clone + Debug + Display,
{
    format_route_list(&graph.to_edge_list())
}

/// Format `(origin, destination)` pairs as the route-list text format.
///
/// Pairs are grouped into one line per origin, origins in order of their
/// first pair, destinations in pair order. Formatting the parse of the
/// output yields the output again.
#[must_use]
pub fn format_route_list<T>(routes: &[(T, T)]) -> String
where
    T: Hash + Eq + Display,
{
    let mut lines: Vec<(&T, Vec<&T>)> = Vec::new();
    let mut line_of: HashMap<&T, usize> = HashMap::new();
    for (origin, destination) in routes {
        let index = *line_of.entry(origin).or_insert_with(|| {
            lines.push((origin, Vec::new()));
            lines.len() - 1
        });
        lines[index].1.push(destination);
    }

    let mut output = String::new();
    for (origin, destinations) in lines {
        let _ = write!(output, "{origin} -> ");
        for (i, destination) in destinations.iter().enumerate() {
            if i > 0 {
                output.push_str(", ");
            }
            let _ = write!(output, "{destination}");
        }
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_groups_by_origin() {
        let graph: DiGraph<&str> = [("CDG", "BUD"), ("DEL", "CDG"), ("CDG", "SIN")]
            .into_iter()
            .collect();
        assert_eq!(format_routes(&graph), "CDG -> BUD, SIN\nDEL -> CDG\n");
    }

    #[test]
    fn test_format_keeps_duplicates_and_self_loops() {
        let graph: DiGraph<u32> = [(1, 1), (1, 2), (1, 2)].into_iter().collect();
        assert_eq!(format_routes(&graph), "1 -> 1, 2, 2\n");
    }

    #[test]
    fn test_format_empty_graph() {
        let mut graph: DiGraph<&str> = DiGraph::new();
        assert_eq!(format_routes(&graph), "");
        graph.add_vertex("LONELY");
        assert_eq!(format_routes(&graph), "");
    }

    #[test]
    fn test_route_list_orders_origins_by_first_pair() {
        // SAN is registered as a vertex before LHR, but LHR is an origin first.
        let routes = [("SFO", "SAN"), ("LHR", "SFO"), ("SAN", "EYW"), ("SFO", "DSM")];
        assert_eq!(
            format_route_list(&routes),
            "SFO -> SAN, DSM\nLHR -> SFO\nSAN -> EYW\n"
        );
    }

    #[test]
    fn test_route_list_is_stable_under_regrouping() {
        let routes = [("SFO", "SAN"), ("LHR", "SFO"), ("SAN", "EYW"), ("SFO", "DSM")];
        let once = format_route_list(&routes);
        let regrouped = [("SFO", "SAN"), ("SFO", "DSM"), ("LHR", "SFO"), ("SAN", "EYW")];
        assert_eq!(format_route_list(&regrouped), once);
    }
}
