//! Loading route networks from disk.

use std::fmt;
use std::fs;
use std::path::Path;

use derive_more::From;
use hubreach_core::DiGraph;
use hubreach_parser::{parse_graph, ParseError};
use hubreach_testgen::generator::Network;
use serde::Deserialize;

/// Error returned when a network file cannot be read.
#[derive(Debug, From)]
pub enum LoadError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Parse(ParseError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "{e}"),
            Self::Json(e) => write!(f, "invalid JSON: {e}"),
            Self::Parse(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

/// The JSON shapes accepted by `analyze`.
#[derive(Deserialize)]
#[serde(untagged)]
enum JsonNetwork {
    Generated(Network),
    Pairs(Vec<(String, String)>),
}

/// Read a network from `path`.
///
/// Files ending in `.json` hold either a generated [`Network`] or a plain
/// array of `[origin, destination]` pairs. Anything else is read as the
/// route-list text format.
///
/// # Errors
///
/// Returns a [`LoadError`] if the file cannot be read or does not parse.
pub fn load_graph(path: &Path) -> Result<DiGraph<String>, LoadError> {
    let content = fs::read_to_string(path)?;
    if path.extension().is_some_and(|ext| ext == "json") {
        graph_from_json(&content)
    } else {
        Ok(parse_graph(&content)?)
    }
}

/// Build a graph from the JSON forms accepted by [`load_graph`].
///
/// Generated networks use numeric airport ids, which become their decimal
/// labels.
///
/// # Errors
///
/// Returns [`LoadError::Json`] if `content` matches neither form.
pub fn graph_from_json(content: &str) -> Result<DiGraph<String>, LoadError> {
    let graph: DiGraph<String> = match serde_json::from_str(content)? {
        JsonNetwork::Generated(network) => network
            .get_routes()
            .iter()
            .map(|(origin, destination)| (origin.to_string(), destination.to_string()))
            .collect(),
        JsonNetwork::Pairs(pairs) => pairs.into_iter().collect(),
    };
    tracing::debug!(
        vertices = %graph.vertex_count(),
        edges = %graph.edge_count(),
        "loaded JSON network"
    );
    Ok(graph)
}
