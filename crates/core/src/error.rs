use core::fmt::{Debug, Display, Formatter, Result};

use crate::scc::ComponentId;

/// Error returned by the reachability and condensation operations.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error<T> {
    /// The start vertex is not a vertex of the graph.
    UnknownVertex(T),
    /// A graph vertex is not a member of any of the given components.
    UnassignedVertex(T),
    /// A vertex is a member of two of the given components.
    OverlappingComponents {
        vertex: T,
        first: ComponentId,
        second: ComponentId,
    },
}

impl<T: Display> Display for Error<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::UnknownVertex(vertex) => write!(f, "unknown vertex `{vertex}`"),
            Self::UnassignedVertex(vertex) => {
                write!(f, "vertex `{vertex}` does not belong to any component")
            }
            Self::OverlappingComponents {
                vertex,
                first,
                second,
            } => write!(
                f,
                "vertex `{vertex}` belongs to both component {first} and component {second}"
            ),
        }
    }
}

impl<T: Debug + Display> core::error::Error for Error<T> {}
