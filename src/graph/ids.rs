//! Strongly-typed identifiers for graph entities.
//!
//! Vertices and edges are addressed by dense indices handed out at
//! insertion time. Wrapping those indices in distinct newtypes keeps the
//! three index spaces of this crate apart at compile time:
//!
//! - [`NodeId`] names a vertex, in insertion order
//! - [`EdgeId`] names an edge, in insertion order
//! - a bare `usize` in the analysis results is a DFS index
//!
//! The distinction between the first and the last matters most: the
//! dominator analysis renumbers vertices depth-first, so the `NodeId` a
//! caller holds and the DFS index the result arrays are keyed by usually
//! differ. Translation goes through
//! [`DominatorTree::vertices`](crate::graph::algorithms::DominatorTree::vertices)
//! and
//! [`DominatorTree::vertex_indices`](crate::graph::algorithms::DominatorTree::vertex_indices).

use std::fmt;

/// Defines an index newtype carrying the shared identifier API.
macro_rules! index_id {
    ($(#[$doc:meta])* $name:ident, $display_prefix:literal) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(usize);

        impl $name {
            /// Creates an identifier from a raw index.
            ///
            /// Identifiers are normally handed out by the graph that owns
            /// them; constructing one by hand is only meaningful for an
            /// index the graph has actually assigned.
            #[must_use]
            #[inline]
            pub const fn new(index: usize) -> Self {
                Self(index)
            }

            /// Returns the raw dense index.
            ///
            /// Suitable for addressing per-entity state kept in plain
            /// vectors alongside the graph.
            #[must_use]
            #[inline]
            pub const fn index(self) -> usize {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($display_prefix, "{}"), self.0)
            }
        }

        impl From<usize> for $name {
            #[inline]
            fn from(index: usize) -> Self {
                Self(index)
            }
        }

        impl From<$name> for usize {
            #[inline]
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

index_id!(
    /// Identifies a vertex within a directed graph.
    ///
    /// `NodeId`s are dense indices assigned in insertion order by
    /// [`DirectedGraph::add_node`](crate::graph::DirectedGraph::add_node)
    /// (or by [`IndexedGraph::add_node`](crate::graph::IndexedGraph::add_node),
    /// which additionally remembers the caller's key). They are the vertex
    /// identity the dominator analysis is queried with; the depth-first
    /// numbering the analysis computes internally is a separate index space,
    /// translated at the API boundary.
    ///
    /// Displays as `v{index}`.
    NodeId,
    "v"
);

index_id!(
    /// Identifies an edge within a directed graph.
    ///
    /// `EdgeId`s are dense indices assigned in insertion order by
    /// [`DirectedGraph::add_edge`](crate::graph::DirectedGraph::add_edge).
    /// Adjacency lists store edge identifiers rather than target vertices,
    /// so parallel edges between the same pair of vertices stay
    /// distinguishable and edge data remains addressable from either
    /// endpoint.
    ///
    /// Displays as `e{index}`.
    EdgeId,
    "e"
);
