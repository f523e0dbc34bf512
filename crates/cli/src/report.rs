//! Reachability reports over a loaded network.

use std::fmt::Write as _;

use hubreach_core::{ComponentId, DiGraph, Error};
use serde::Serialize;

/// Result for one start airport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StartReport {
    pub start: String,
    pub component: ComponentId,
    pub additional_routes: usize,
    pub suggested_routes: Vec<(String, String)>,
}

/// Summary of a network and the routes each start airport is missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub vertices: usize,
    pub edges: usize,
    /// Members of each component, in insertion order, indexed by
    /// [`ComponentId`].
    pub components: Vec<Vec<String>>,
    /// Components with no incoming route from another component.
    pub sources: Vec<ComponentId>,
    pub starts: Vec<StartReport>,
}

/// Analyze `graph` for every airport in `starts`, or for every airport of
/// the graph when `starts` is empty.
///
/// # Errors
///
/// Returns [`Error::UnknownVertex`] for the first start that is not an
/// airport of the graph.
pub fn analyze(graph: &DiGraph<String>, starts: &[String]) -> Result<Report, Error<String>> {
    let condensed = graph.condensation();

    let mut components = vec![Vec::new(); condensed.components.len()];
    for vertex in graph.vertices() {
        if let Some(id) = condensed.component_of(vertex) {
            components[id.0].push(vertex.clone());
        }
    }

    let starts = if starts.is_empty() {
        graph.vertices()
    } else {
        starts
    };
    let sources = condensed.sources();
    let starts = starts
        .iter()
        .map(|start| {
            let deficiency = condensed.deficiency_among(start, &sources)?;
            Ok(StartReport {
                start: start.clone(),
                component: deficiency.start,
                additional_routes: deficiency.count(),
                suggested_routes: condensed.repair_routes(start, &deficiency),
            })
        })
        .collect::<Result<Vec<_>, Error<String>>>()?;

    Ok(Report {
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        components,
        sources,
        starts,
    })
}

impl Report {
    /// Plain-text rendering. `verbose` adds the component list and the
    /// suggested routes of every start.
    #[must_use]
    pub fn render(&self, verbose: bool) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "airports: {}", self.vertices);
        let _ = writeln!(out, "routes: {}", self.edges);
        let _ = writeln!(out, "components: {}", self.components.len());
        if verbose {
            for (index, members) in self.components.iter().enumerate() {
                let marker = if self.sources.contains(&ComponentId(index)) {
                    " (source)"
                } else {
                    ""
                };
                let _ = writeln!(out, "  [{index}]{marker} {}", members.join(", "));
            }
        }
        for start in &self.starts {
            let _ = writeln!(out, "{}: {}", start.start, start.additional_routes);
            if verbose {
                for (origin, destination) in &start.suggested_routes {
                    let _ = writeln!(out, "  + {origin} -> {destination}");
                }
            }
        }
        out
    }
}
