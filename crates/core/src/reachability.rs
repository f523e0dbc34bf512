//! Minimum number of new edges that make every vertex reachable from a start.
//!
//! In the condensation DAG a component with no incoming edge can only be
//! reached if an edge is added into it, and one added edge reaches at most
//! one such component. Every other component is reachable from some
//! source. The answer is therefore the number of source components other
//! than the start's own.

use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::Hash;

use crate::error::Error;
use crate::graph::digraph::DiGraph;
use crate::scc::{ComponentId, Condensation};

/// Components that cannot be reached from the start vertex without a new
/// edge.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deficiency {
    /// The start vertex's own component.
    pub start: ComponentId,
    /// Source components of the condensation other than `start`, in index
    /// order. Each needs exactly one new incoming edge.
    pub sources: Vec<ComponentId>,
}

impl Deficiency {
    /// Minimum number of additional edges.
    #[must_use]
    pub fn count(&self) -> usize {
        self.sources.len()
    }

    /// `true` if every vertex is already reachable from the start.
    #[must_use]
    pub fn is_satisfied(&self) -> bool {
        self.sources.is_empty()
    }
}

impl<T> Condensation<T>
where
    T: Hash + Eq + Clone + Debug,
{
    /// Deficiency relative to the component of `start`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVertex`] if `start` is not a vertex of the
    /// condensed graph.
    pub fn deficiency(&self, start: &T) -> Result<Deficiency, Error<T>> {
        self.deficiency_among(start, &self.sources())
    }

    /// Like [`deficiency`](Self::deficiency), with `sources` precomputed by
    /// [`sources`](Self::sources) so that many starts share one pass.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVertex`] if `start` is not a vertex of the
    /// condensed graph.
    pub fn deficiency_among(
        &self,
        start: &T,
        sources: &[ComponentId],
    ) -> Result<Deficiency, Error<T>> {
        let start_id = self
            .component_of(start)
            .ok_or_else(|| Error::UnknownVertex(start.clone()))?;
        let sources: Vec<ComponentId> = sources
            .iter()
            .copied()
            .filter(|&id| id != start_id)
            .collect();

        tracing::debug!(
            ?start,
            component = %start_id,
            deficient = sources.len(),
            "reachability deficiency"
        );

        Ok(Deficiency {
            start: start_id,
            sources,
        })
    }

    /// One new edge from `start` to the representative of every component
    /// in `deficiency`, in its order.
    #[must_use]
    pub fn repair_routes(&self, start: &T, deficiency: &Deficiency) -> Vec<(T, T)> {
        deficiency
            .sources
            .iter()
            .filter_map(|&id| self.representative(id))
            .map(|target| (start.clone(), target.clone()))
            .collect()
    }

    /// New edges from `start` to the representative of every deficient
    /// component, ordered by component index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVertex`] if `start` is not a vertex of the
    /// condensed graph.
    pub fn suggest_routes(&self, start: &T) -> Result<Vec<(T, T)>, Error<T>> {
        let deficiency = self.deficiency(start)?;
        Ok(self.repair_routes(start, &deficiency))
    }
}

impl<T> DiGraph<T>
where
    T: Hash + Eq + Clone + Debug,
{
    /// Source components that stay unreachable from `start`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVertex`] if `start` is not a vertex of the
    /// graph.
    pub fn deficiency(&self, start: &T) -> Result<Deficiency, Error<T>> {
        if !self.contains(start) {
            return Err(Error::UnknownVertex(start.clone()));
        }
        self.condensation().deficiency(start)
    }

    /// Minimum number of directed edges that must be added so that every
    /// vertex is reachable from `start`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVertex`] if `start` is not a vertex of the
    /// graph. An empty graph has no vertices, so every start is unknown.
    ///
    /// # Isolated components
    ///
    /// A component with no edge to or from any other component, such as a
    /// lone self-loop `C -> C`, is still a source and counts as one missing
    /// route: `A -> B, C -> C` needs 1 from `A`. Counting condensed nodes
    /// only through crossing edges would report 0 there, even though `C`
    /// stays unreachable.
    pub fn min_additional_routes(&self, start: &T) -> Result<usize, Error<T>> {
        self.deficiency(start).map(|deficiency| deficiency.count())
    }

    /// A minimal set of new edges that makes every vertex reachable from
    /// `start`.
    ///
    /// Each edge runs from `start` to the representative of one deficient
    /// component: the member of that component that was added to the graph
    /// first. Edges are ordered by component index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVertex`] if `start` is not a vertex of the
    /// graph.
    pub fn suggest_routes(&self, start: &T) -> Result<Vec<(T, T)>, Error<T>> {
        if !self.contains(start) {
            return Err(Error::UnknownVertex(start.clone()));
        }
        self.condensation().suggest_routes(start)
    }
}
