use core::fmt::{Display, Formatter, Result};

use hashbrown::HashSet;

pub mod condensation;
pub mod kosaraju;

pub use condensation::Condensation;

/// A strongly connected component: a non-empty set of mutually reachable
/// vertices.
pub type Component<T> = HashSet<T>;

/// Index of a component in discovery order of the second Kosaraju pass.
///
/// Displays as the bare index, which is how condensed vertices are labelled
/// in reports.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ComponentId(pub usize);

impl Display for ComponentId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for ComponentId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}
