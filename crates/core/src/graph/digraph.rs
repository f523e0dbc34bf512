use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::Hash;

use hashbrown::HashMap;

/// Directed multigraph backed by an adjacency map.
///
/// Each vertex of type `T` maps to the ordered sequence of its outgoing
/// neighbors, in edge insertion order. Duplicate edges and self-loops are
/// kept as inserted. Vertices are added implicitly when they appear in an
/// edge, or explicitly via [`add_vertex`](Self::add_vertex).
///
/// [`vertices`](Self::vertices) enumerates vertices in first-insertion
/// order. Every traversal that has to pick an arbitrary but fixed vertex
/// order uses this one, which keeps component numbering reproducible.
///
/// Deserializing rebuilds the graph edge by edge, so every endpoint of a
/// stored edge becomes a vertex even if the input's `vertices` omits it.
#[cfg_attr(feature = "serde", derive(::serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiGraph<T>
where
    T: Hash + Eq + Clone + Debug,
{
    vertices: Vec<T>,
    adj_map: HashMap<T, Vec<T>>,
}

impl<T> Default for DiGraph<T>
where
    T: Hash + Eq + Clone + Debug,
{
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            adj_map: HashMap::new(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> ::serde::Deserialize<'de> for DiGraph<T>
where
    T: Hash + Eq + Clone + Debug + ::serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: ::serde::Deserializer<'de>,
    {
        #[derive(::serde::Deserialize)]
        struct Stored<V: Hash + Eq> {
            vertices: Vec<V>,
            adj_map: HashMap<V, Vec<V>>,
        }

        let Stored {
            vertices,
            mut adj_map,
        } = Stored::<T>::deserialize(deserializer)?;
        let mut graph = Self::new();
        for vertex in &vertices {
            graph.add_vertex(vertex.clone());
        }
        for vertex in &vertices {
            if let Some(targets) = adj_map.remove(vertex) {
                graph.add_edges(vertex, targets);
            }
        }
        // Sources missing from `vertices` come last, in map order.
        for (source, targets) in adj_map {
            graph.add_vertex(source.clone());
            graph.add_edges(&source, targets);
        }
        Ok(graph)
    }
}

impl<T> DiGraph<T>
where
    T: Hash + Eq + Clone + Debug,
{
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a directed edge from `source` to `target`.
    ///
    /// Both vertices are added to the graph if not already present.
    pub fn add_edge(&mut self, source: T, target: T) {
        self.add_vertex(source.clone());
        self.add_vertex(target.clone());
        if let Some(neighbors) = self.adj_map.get_mut(&source) {
            neighbors.push(target);
        }
    }

    /// Inserts directed edges from `source` to every vertex in `targets`.
    pub fn add_edges<N>(&mut self, source: &T, targets: N)
    where
        N: IntoIterator<Item = T>,
    {
        for target in targets {
            self.add_edge(source.clone(), target);
        }
    }

    /// Adds a vertex with no outgoing edges (if not already present).
    pub fn add_vertex(&mut self, vertex: T) {
        if !self.adj_map.contains_key(&vertex) {
            self.adj_map.insert(vertex.clone(), Vec::new());
            self.vertices.push(vertex);
        }
    }

    /// Returns `true` if `vertex` belongs to the graph.
    pub fn contains(&self, vertex: &T) -> bool {
        self.adj_map.contains_key(vertex)
    }

    /// All vertices, in first-insertion order.
    #[must_use]
    pub fn vertices(&self) -> &[T] {
        &self.vertices
    }

    /// Outgoing neighbors of `vertex` in insertion order.
    ///
    /// A vertex that is not in the graph has no neighbors.
    pub fn neighbors(&self, vertex: &T) -> &[T] {
        self.adj_map
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Iterates over `(vertex, neighbors)` pairs in vertex order.
    pub fn adjacency(&self) -> impl Iterator<Item = (&T, &[T])> + '_ {
        self.vertices
            .iter()
            .map(move |vertex| (vertex, self.neighbors(vertex)))
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of stored edges, duplicates included.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adj_map.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns `true` if an edge from `source` to `target` exists.
    pub fn has_edge(&self, source: &T, target: &T) -> bool {
        self.neighbors(source).contains(target)
    }

    /// Returns all edges as a list of (source, target) pairs, grouped by
    /// source in vertex order.
    #[must_use]
    pub fn to_edge_list(&self) -> Vec<(T, T)> {
        self.adjacency()
            .flat_map(|(src, dsts)| dsts.iter().map(move |dst| (src.clone(), dst.clone())))
            .collect()
    }

    /// Returns a new graph with every edge reversed.
    ///
    /// The vertex set is preserved, including vertices without edges.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut transpose = Self::new();
        for vertex in &self.vertices {
            transpose.add_vertex(vertex.clone());
        }
        for (src, dsts) in self.adjacency() {
            for dst in dsts {
                transpose.add_edge(dst.clone(), src.clone());
            }
        }
        transpose
    }

    /// Number of incoming edges of every vertex, duplicates included.
    #[must_use]
    pub fn in_degrees(&self) -> HashMap<T, usize> {
        let mut in_degree: HashMap<T, usize> =
            self.vertices.iter().map(|v| (v.clone(), 0)).collect();
        for neighbors in self.adj_map.values() {
            for neighbor in neighbors {
                *in_degree.entry(neighbor.clone()).or_insert(0) += 1;
            }
        }
        in_degree
    }

    /// Detects if the graph contains a cycle using Kahn's algorithm.
    /// Self-loops count as cycles.
    /// Time complexity: O(V+E)
    #[must_use]
    pub fn has_cycle(&self) -> bool {
        self.topological_sort().is_none()
    }

    /// Returns `true` if the graph has no cycles.
    #[must_use]
    pub fn is_acyclic(&self) -> bool {
        !self.has_cycle()
    }

    /// Returns a valid topological ordering of vertices if the graph is acyclic,
    /// or None if the graph contains a cycle.
    /// Uses Kahn's algorithm with time complexity O(V+E).
    #[must_use]
    pub fn topological_sort(&self) -> Option<Vec<T>> {
        let mut in_degree = self.in_degrees();

        let mut queue: Vec<T> = self
            .vertices
            .iter()
            .filter(|vertex| in_degree.get(*vertex) == Some(&0))
            .cloned()
            .collect();

        let mut result = Vec::with_capacity(self.vertices.len());

        while let Some(vertex) = queue.pop() {
            for neighbor in self.neighbors(&vertex) {
                if let Some(degree) = in_degree.get_mut(neighbor) {
                    *degree -= 1;
                    if *degree == 0 {
                        queue.push(neighbor.clone());
                    }
                }
            }
            result.push(vertex);
        }

        // If all vertices were processed, graph is acyclic
        (result.len() == self.vertices.len()).then_some(result)
    }
}

impl<T> FromIterator<(T, T)> for DiGraph<T>
where
    T: Hash + Eq + Clone + Debug,
{
    fn from_iter<I: IntoIterator<Item = (T, T)>>(edges: I) -> Self {
        let mut graph = Self::new();
        graph.extend(edges);
        graph
    }
}

impl<T> Extend<(T, T)> for DiGraph<T>
where
    T: Hash + Eq + Clone + Debug,
{
    fn extend<I: IntoIterator<Item = (T, T)>>(&mut self, edges: I) {
        for (source, target) in edges {
            self.add_edge(source, target);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_edge_registers_both_endpoints() {
        let mut graph: DiGraph<u32> = DiGraph::new();
        graph.add_edge(1, 2);

        assert!(graph.contains(&1));
        assert!(graph.contains(&2));
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.neighbors(&1), &[2]);
        assert!(graph.neighbors(&2).is_empty());
    }

    #[test]
    fn test_vertices_keep_first_insertion_order() {
        let graph: DiGraph<&str> = [("b", "a"), ("c", "b"), ("a", "d")].into_iter().collect();
        assert_eq!(graph.vertices(), &["b", "a", "c", "d"]);
    }

    #[test]
    fn test_duplicates_and_self_loops_are_kept() {
        let mut graph: DiGraph<u32> = DiGraph::new();
        graph.add_edge(1, 1);
        graph.add_edge(1, 2);
        graph.add_edge(1, 2);

        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.neighbors(&1), &[1, 2, 2]);
        assert!(graph.has_edge(&1, &1));
    }

    #[test]
    fn test_unknown_vertex_has_no_neighbors() {
        let graph: DiGraph<u32> = [(1, 2)].into_iter().collect();
        assert!(graph.neighbors(&99).is_empty());
        assert!(!graph.has_edge(&99, &1));
    }

    #[test]
    fn test_add_edges_appends_in_order() {
        let mut graph: DiGraph<u32> = DiGraph::new();
        graph.add_edges(&0, [3, 1, 2]);
        assert_eq!(graph.neighbors(&0), &[3, 1, 2]);
        assert_eq!(graph.to_edge_list(), vec![(0, 3), (0, 1), (0, 2)]);
    }

    #[test]
    fn test_transpose_reverses_every_edge() {
        let mut graph: DiGraph<u32> = [(1, 2), (2, 3), (1, 3), (3, 3)].into_iter().collect();
        graph.add_vertex(9);
        let transpose = graph.transpose();

        assert_eq!(transpose.vertex_count(), graph.vertex_count());
        assert_eq!(transpose.edge_count(), graph.edge_count());
        for (src, dst) in graph.to_edge_list() {
            assert!(transpose.has_edge(&dst, &src));
        }
        assert!(transpose.contains(&9));
        assert!(!transpose.has_edge(&1, &2));

        // The receiver is untouched.
        assert!(graph.has_edge(&1, &2));
    }

    #[test]
    fn test_in_degrees_count_duplicates() {
        let graph: DiGraph<u32> = [(1, 2), (1, 2), (3, 2)].into_iter().collect();
        let in_degree = graph.in_degrees();
        assert_eq!(in_degree[&1], 0);
        assert_eq!(in_degree[&2], 3);
        assert_eq!(in_degree[&3], 0);
    }

    #[test]
    fn test_cycle() {
        let graph: DiGraph<u32> = [(1, 2), (2, 3), (3, 4), (4, 5), (5, 1)]
            .into_iter()
            .collect();
        assert!(graph.has_cycle());
    }

    #[test]
    fn test_self_loop_is_a_cycle() {
        let graph: DiGraph<u32> = [(1, 1)].into_iter().collect();
        assert!(graph.has_cycle());
    }

    #[test]
    fn test_topological_sort_acyclic() {
        let graph: DiGraph<u32> = [(1, 2), (2, 3), (1, 3)].into_iter().collect();

        let topo = graph.topological_sort();
        assert!(topo.is_some());

        let order = topo.unwrap();
        assert_eq!(order.len(), 3);

        let pos_1 = order.iter().position(|&x| x == 1).unwrap();
        let pos_2 = order.iter().position(|&x| x == 2).unwrap();
        let pos_3 = order.iter().position(|&x| x == 3).unwrap();

        assert!(pos_1 < pos_2);
        assert!(pos_2 < pos_3);
    }

    #[test]
    fn test_topological_sort_with_duplicate_edges() {
        let graph: DiGraph<u32> = [(1, 2), (1, 2), (2, 3)].into_iter().collect();
        assert_eq!(graph.topological_sort(), Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_topological_sort_empty() {
        let graph: DiGraph<u32> = DiGraph::default();
        let topo = graph.topological_sort();
        assert!(topo.is_some());
        assert_eq!(topo.unwrap().len(), 0);
        assert!(graph.is_acyclic());
    }
}
