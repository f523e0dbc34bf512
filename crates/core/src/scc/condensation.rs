use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::Hash;

use hashbrown::HashMap;

use super::{Component, ComponentId};
use crate::error::Error;
use crate::graph::digraph::DiGraph;

/// A graph collapsed along a component partition.
///
/// Every component becomes one vertex of [`graph`](Self::graph), including
/// components with no edge to or from another component. An edge joins two
/// distinct components whenever some original edge crosses from a member
/// of the first to a member of the second; edges inside a component are
/// dropped. When built from the strongly connected components the graph is
/// a DAG.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condensation<T>
where
    T: Hash + Eq + Clone + Debug,
{
    /// The collapsed graph, one vertex per component.
    pub graph: DiGraph<ComponentId>,
    /// Maps every vertex of the original graph to its component.
    pub membership: HashMap<T, ComponentId>,
    /// The partition, indexed by [`ComponentId`].
    pub components: Vec<Component<T>>,
    /// For each component, its member that was added to the graph first.
    pub representatives: Vec<Option<T>>,
}

impl<T> Condensation<T>
where
    T: Hash + Eq + Clone + Debug,
{
    /// The component of `vertex`, if it is a vertex of the original graph.
    pub fn component_of(&self, vertex: &T) -> Option<ComponentId> {
        self.membership.get(vertex).copied()
    }

    /// Members of component `id`.
    pub fn members(&self, id: ComponentId) -> Option<&Component<T>> {
        self.components.get(id.0)
    }

    /// The member of component `id` that was added to the graph first.
    pub fn representative(&self, id: ComponentId) -> Option<&T> {
        self.representatives.get(id.0).and_then(Option::as_ref)
    }

    /// Number of incoming condensed edges of every component.
    #[must_use]
    pub fn in_degrees(&self) -> HashMap<ComponentId, usize> {
        self.graph.in_degrees()
    }

    /// Components with no incoming condensed edge, in index order.
    #[must_use]
    pub fn sources(&self) -> Vec<ComponentId> {
        let in_degree = self.in_degrees();
        self.graph
            .vertices()
            .iter()
            .copied()
            .filter(|id| in_degree.get(id).copied().unwrap_or_default() == 0)
            .collect()
    }
}

impl<T> DiGraph<T>
where
    T: Hash + Eq + Clone + Debug,
{
    /// Collapses this graph along `components`.
    ///
    /// Component `i` of the slice becomes [`ComponentId(i)`](ComponentId).
    /// Crossing edges are added once per original edge, so the condensed
    /// graph may hold duplicates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OverlappingComponents`] if a vertex appears in two
    /// components, and [`Error::UnassignedVertex`] if a vertex of the graph
    /// appears in none.
    pub fn condense(&self, components: &[Component<T>]) -> Result<Condensation<T>, Error<T>> {
        self.collapse(components.to_vec())
    }

    /// Condenses the graph along its strongly connected components.
    #[must_use]
    pub fn condensation(&self) -> Condensation<T> {
        self.collapse(self.kosaraju_scc())
            .unwrap_or_else(|err| unreachable!("kosaraju partition is not a partition: {err:?}"))
    }

    fn collapse(&self, components: Vec<Component<T>>) -> Result<Condensation<T>, Error<T>> {
        let mut membership: HashMap<T, ComponentId> = HashMap::with_capacity(self.vertex_count());
        let mut graph: DiGraph<ComponentId> = DiGraph::new();

        for (index, component) in components.iter().enumerate() {
            let id = ComponentId(index);
            graph.add_vertex(id);
            for vertex in component {
                if let Some(first) = membership.insert(vertex.clone(), id) {
                    return Err(Error::OverlappingComponents {
                        vertex: vertex.clone(),
                        first,
                        second: id,
                    });
                }
            }
        }

        let mut representatives: Vec<Option<T>> = alloc::vec![None; components.len()];
        for (source, targets) in self.adjacency() {
            let source_id = *membership
                .get(source)
                .ok_or_else(|| Error::UnassignedVertex(source.clone()))?;
            let representative = &mut representatives[source_id.0];
            if representative.is_none() {
                *representative = Some(source.clone());
            }
            for target in targets {
                let target_id = *membership
                    .get(target)
                    .ok_or_else(|| Error::UnassignedVertex(target.clone()))?;
                if source_id != target_id {
                    graph.add_edge(source_id, target_id);
                }
            }
        }

        tracing::debug!(
            components = graph.vertex_count(),
            edges = graph.edge_count(),
            "condensed graph"
        );

        Ok(Condensation {
            graph,
            membership,
            components,
            representatives,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph<'a>(edges: &[(&'a str, &'a str)]) -> DiGraph<&'a str> {
        edges.iter().copied().collect()
    }

    #[test]
    fn test_membership_is_total() {
        let g = graph(&[("A", "B"), ("B", "A"), ("B", "C"), ("D", "D")]);
        let condensed = g.condensation();
        for vertex in g.vertices() {
            assert!(condensed.component_of(vertex).is_some(), "{vertex}");
        }
        assert_eq!(condensed.component_of(&"A"), condensed.component_of(&"B"));
        assert_ne!(condensed.component_of(&"A"), condensed.component_of(&"C"));
        assert!(condensed.component_of(&"Z").is_none());
    }

    #[test]
    fn test_internal_edges_are_dropped() {
        let g = graph(&[("A", "B"), ("B", "C"), ("C", "A"), ("A", "A")]);
        let condensed = g.condensation();
        assert_eq!(condensed.graph.vertex_count(), 1);
        assert_eq!(condensed.graph.edge_count(), 0);
    }

    #[test]
    fn test_crossing_edges_are_kept_per_original_edge() {
        // {A,B} -> {C} twice
        let g = graph(&[("A", "B"), ("B", "A"), ("A", "C"), ("B", "C")]);
        let condensed = g.condensation();
        let ab = condensed.component_of(&"A").unwrap();
        let c = condensed.component_of(&"C").unwrap();
        assert_eq!(condensed.graph.neighbors(&ab), &[c, c]);
        assert_eq!(condensed.in_degrees()[&c], 2);
    }

    #[test]
    fn test_isolated_components_are_condensed_vertices() {
        let g = graph(&[("A", "B"), ("C", "C")]);
        let condensed = g.condensation();
        assert_eq!(condensed.graph.vertex_count(), 3);
        let c = condensed.component_of(&"C").unwrap();
        assert!(condensed.sources().contains(&c));
    }

    #[test]
    fn test_condensation_is_acyclic() {
        let g = graph(&[
            ("a", "b"),
            ("b", "a"),
            ("b", "c"),
            ("c", "d"),
            ("d", "c"),
            ("d", "e"),
            ("a", "e"),
            ("f", "a"),
        ]);
        assert!(g.has_cycle());
        assert!(g.condensation().graph.is_acyclic());
    }

    #[test]
    fn test_condense_matches_condensation() {
        let g = graph(&[("A", "B"), ("B", "C"), ("C", "B"), ("D", "A")]);
        let components = g.kosaraju_scc();
        assert_eq!(g.condense(&components), Ok(g.condensation()));
    }

    #[test]
    fn test_condense_rejects_missing_vertex() {
        let g = graph(&[("A", "B")]);
        let components: Vec<Component<&str>> = vec![["A"].into()];
        assert_eq!(g.condense(&components), Err(Error::UnassignedVertex("B")));
    }

    #[test]
    fn test_condense_rejects_overlap() {
        let g = graph(&[("A", "B")]);
        let components: Vec<Component<&str>> = vec![["A", "B"].into(), ["B"].into()];
        assert_eq!(
            g.condense(&components),
            Err(Error::OverlappingComponents {
                vertex: "B",
                first: ComponentId(0),
                second: ComponentId(1),
            })
        );
    }

    #[test]
    fn test_sources_of_chain() {
        let g = graph(&[("A", "B"), ("B", "C")]);
        let condensed = g.condensation();
        assert_eq!(condensed.sources(), vec![condensed.component_of(&"A").unwrap()]);
        let a = condensed.component_of(&"A").unwrap();
        assert_eq!(condensed.members(a), Some(&Component::from(["A"])));
    }

    #[test]
    fn test_representative_is_first_inserted_member() {
        let g = graph(&[("X", "B"), ("B", "A"), ("A", "B")]);
        let condensed = g.condensation();
        let ab = condensed.component_of(&"A").unwrap();
        assert_eq!(condensed.representative(ab), Some(&"B"));
        let x = condensed.component_of(&"X").unwrap();
        assert_eq!(condensed.representative(x), Some(&"X"));
    }
}
