use thiserror::Error;

/// The generic Error type, which provides coverage for all errors this
/// library can potentially return.
///
/// The dominator analysis treats most misuse as programmer error and panics
/// (querying an unreachable vertex, indexing with a foreign `NodeId`); the
/// variants here cover the conditions a caller can reasonably hit while
/// *constructing* graphs and analyses, and which are therefore reported as
/// values.
///
/// # Error Categories
///
/// ## Construction Errors
/// - [`Error::EmptyGraph`] - An analysis was requested over a graph with no nodes
/// - [`Error::GraphError`] - A graph operation referenced a nonexistent node
///
/// # Examples
///
/// ```rust
/// use domscope::{
///     graph::{algorithms::compute_dominators, DirectedGraph, NodeId},
///     Error,
/// };
///
/// let graph: DirectedGraph<(), ()> = DirectedGraph::new();
/// match compute_dominators(&graph, NodeId::new(0)) {
///     Err(Error::EmptyGraph) => {} // expected: nothing to analyze
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// An analysis was requested over a graph with no nodes.
    ///
    /// A dominator analysis needs at least the entry vertex to exist; an
    /// empty graph is rejected at construction rather than producing an
    /// empty result that queries would then misinterpret.
    #[error("graph contains no nodes")]
    EmptyGraph,

    /// A graph operation referenced a node that does not exist.
    ///
    /// Raised when an edge endpoint or an analysis entry point names a node
    /// outside the graph. The message identifies the offending reference.
    #[error("{0}")]
    GraphError(String),
}

/// Result type alias used throughout this crate.
pub type Result<T> = std::result::Result<T, Error>;
