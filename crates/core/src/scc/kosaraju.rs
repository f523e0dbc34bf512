use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::Hash;

use hashbrown::HashSet;

use super::Component;
use crate::graph::digraph::DiGraph;

impl<T> DiGraph<T>
where
    T: Hash + Eq + Clone + Debug,
{
    /// Partitions the vertices into strongly connected components using
    /// Kosaraju's algorithm.
    ///
    /// 1. Depth-first search over every vertex, in [`vertices`] order,
    ///    records the finish order.
    /// 2. The graph is transposed.
    /// 3. Vertices are taken in reverse finish order; each one not yet
    ///    visited roots a depth-first search on the transpose, and the
    ///    vertices it reaches form exactly one component.
    ///
    /// Components are returned in the order step 3 discovers them, so the
    /// index of a component in the result is its [`ComponentId`]. The first
    /// component contains the last vertex to finish in step 1, and no
    /// component has an edge to one discovered before it.
    ///
    /// Time complexity: O(V+E)
    ///
    /// [`vertices`]: DiGraph::vertices
    /// [`ComponentId`]: super::ComponentId
    #[must_use]
    pub fn kosaraju_scc(&self) -> Vec<Component<T>> {
        let mut visited: HashSet<T> = HashSet::with_capacity(self.vertex_count());
        let mut order: Vec<T> = Vec::with_capacity(self.vertex_count());

        for vertex in self.vertices() {
            self.dfs_finish_order(vertex, &mut visited, &mut order);
        }

        tracing::trace!(vertices = order.len(), "kosaraju: finish order computed");

        let transpose = self.transpose();
        visited.clear();

        let mut components: Vec<Component<T>> = Vec::new();
        while let Some(vertex) = order.pop() {
            if visited.contains(&vertex) {
                continue;
            }
            let mut component = Component::new();
            transpose.dfs_collect(&vertex, &mut visited, &mut component);
            components.push(component);
        }

        tracing::debug!(
            vertices = self.vertex_count(),
            edges = self.edge_count(),
            components = components.len(),
            "kosaraju: strongly connected components"
        );

        components
    }
}
