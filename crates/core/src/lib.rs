//! Reachability repair for directed route networks.
//!
//! `hubreach_core` answers one question about a directed graph of
//! point-to-point connections: how many new directed edges are needed so that
//! every vertex becomes reachable from a chosen start vertex?
//!
//! The answer is computed in three stages:
//!
//! 1. **Strongly connected components** -- Kosaraju's two-pass depth-first
//!    search partitions the vertices into maximal mutually-reachable sets
//!    ([`DiGraph::kosaraju_scc`]).
//! 2. **Condensation** -- every component collapses into a single node of a
//!    new graph, giving a DAG ([`DiGraph::condense`]).
//! 3. **Deficiency** -- every condensed node with no incoming edge, other
//!    than the start's own component, needs exactly one new edge
//!    ([`DiGraph::min_additional_routes`]).
//!
//! The whole pipeline is `O(V + E)`.
//!
//! ```rust
//! use hubreach_core::DiGraph;
//!
//! let graph: DiGraph<&str> = [("A", "B"), ("C", "D")].into_iter().collect();
//! assert_eq!(graph.kosaraju_scc().len(), 4);
//! assert_eq!(graph.min_additional_routes(&"A"), Ok(1));
//! ```
//!
//! # Crate features
//!
//! - **`serde`** -- enables `Serialize`/`Deserialize` derives on core types
//!   (`DiGraph`, `ComponentId`, `Condensation`, `Deficiency`, `Error`).
//! - **`parser`** -- enables the logos lexer for the route-list text format.
//!
//! This crate is `no_std` compatible (requires `alloc`). The route-list
//! parser lives in the separate `hubreach_parser` crate.

#![cfg_attr(not(test), no_std)]
extern crate alloc;

pub mod error;
pub mod graph;
pub mod reachability;
pub mod routes;
pub mod scc;

pub use error::Error;
pub use graph::digraph::DiGraph;
pub use reachability::Deficiency;
pub use scc::{Component, ComponentId, Condensation};
