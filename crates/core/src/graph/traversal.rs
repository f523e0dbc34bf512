//! Depth-first traversal over a [`DiGraph`].
//!
//! Both entry points share one explicit-stack walk that reproduces the
//! recursive visiting order exactly: neighbors are explored in insertion
//! order, a vertex is marked when it is first entered, and it *finishes*
//! once every neighbor has been explored. They differ only in what they
//! record on finish.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::Hash;

use hashbrown::HashSet;

use super::digraph::DiGraph;

impl<T> DiGraph<T>
where
    T: Hash + Eq + Clone + Debug,
{
    /// Explores everything reachable from `start` that is not yet in
    /// `visited`, appending each vertex to `order` when its exploration
    /// completes (post-order).
    ///
    /// `visited` is shared across calls, so repeated calls over different
    /// roots explore each vertex once in total. Does nothing if `start` is
    /// already visited.
    pub fn dfs_finish_order(&self, start: &T, visited: &mut HashSet<T>, order: &mut Vec<T>) {
        self.walk(start, visited, |vertex| order.push(vertex.clone()));
    }

    /// Explores everything reachable from `start` that is not yet in
    /// `visited`, inserting each explored vertex into `component`.
    pub fn dfs_collect(&self, start: &T, visited: &mut HashSet<T>, component: &mut HashSet<T>) {
        self.walk(start, visited, |vertex| {
            component.insert(vertex.clone());
        });
    }

    /// All vertices reachable from `start`, including `start` itself.
    ///
    /// Empty if `start` is not a vertex of the graph.
    #[must_use]
    pub fn reachable_from(&self, start: &T) -> HashSet<T> {
        let mut reached = HashSet::new();
        if self.contains(start) {
            self.dfs_collect(start, &mut HashSet::new(), &mut reached);
        }
        reached
    }

    /// Iterative DFS. Each stack frame is a vertex plus the index of the
    /// next neighbor to try; `on_finish` runs when a frame is exhausted.
    fn walk<'a, F>(&'a self, start: &'a T, visited: &mut HashSet<T>, mut on_finish: F)
    where
        F: FnMut(&'a T),
    {
        if !visited.insert(start.clone()) {
            return;
        }
        let mut stack: Vec<(&'a T, usize)> = vec![(start, 0)];

        while let Some(top) = stack.last_mut() {
            let (vertex, cursor) = *top;
            top.1 += 1;
            match self.neighbors(vertex).get(cursor) {
                Some(next) => {
                    if visited.insert(next.clone()) {
                        stack.push((next, 0));
                    }
                }
                None => {
                    stack.pop();
                    on_finish(vertex);
                }
            }
        }
        tracing::trace!(?start, visited = visited.len(), "dfs finished");
    }
}
