//! Trait definitions for graph abstractions.
//!
//! This module defines the core traits that enable the dominator analysis to
//! work with different graph implementations. By programming against these
//! traits, the algorithms can be reused across various control-flow-graph
//! representations without modification.
//!
//! # Architecture
//!
//! The trait hierarchy is designed to be minimal and composable:
//!
//! - [`GraphBase`] - Core properties: node count and node iteration
//! - [`Successors`] - Forward edge traversal (outgoing edges)
//! - [`Predecessors`] - Backward edge traversal (incoming edges)
//! - [`RootedGraph`] - Graphs with a designated entry node (for dominator computation)
//!
//! # Design Principles
//!
//! ## Iterator-Based Traversal
//!
//! All adjacency queries return iterators rather than collections, enabling
//! lazy evaluation and avoiding unnecessary allocations for simple traversals.
//!
//! ## Stable Successor Order
//!
//! [`Successors::successors`] must yield successors in a stable order: two
//! calls for the same node on the same graph see the same sequence. The
//! dominator analysis numbers vertices depth-first along this order, so the
//! internal numbering (though not the resulting dominance relation) depends
//! on it.
//!
//! ## Minimal Requirements
//!
//! Each trait requires only what is necessary for its purpose. The dominator
//! analysis itself needs no more than [`Successors`]; predecessor sets are
//! collected during its own traversal.

use crate::graph::NodeId;

/// Base trait providing core graph properties.
///
/// This trait defines the fundamental properties that all graphs must have:
/// the number of nodes and the ability to iterate over all node identifiers.
///
/// The node count is an upper bound on the number of *reachable* nodes;
/// analyses pre-size their per-node state from it.
///
/// # Required Methods
///
/// - [`node_count`](GraphBase::node_count) - Returns the total number of nodes
/// - [`node_ids`](GraphBase::node_ids) - Returns an iterator over all node IDs
pub trait GraphBase {
    /// Returns the number of nodes in the graph.
    ///
    /// This count includes all nodes that have been added to the graph,
    /// regardless of their connectivity.
    fn node_count(&self) -> usize;

    /// Returns an iterator over all node identifiers in the graph.
    ///
    /// The iteration order is typically the order in which nodes were added
    /// to the graph (i.e., by ascending `NodeId` index).
    fn node_ids(&self) -> impl Iterator<Item = NodeId>;
}

/// Trait for graphs that support forward edge traversal.
///
/// This trait provides access to the successor nodes of any given node,
/// enabling forward graph traversal and algorithms that follow edges in
/// their natural direction. It is the single capability the dominator
/// analysis requires of a control flow graph.
///
/// # Required Methods
///
/// - [`successors`](Successors::successors) - Returns an iterator over successor nodes
///
/// # Examples
///
/// ```rust
/// use domscope::graph::{DirectedGraph, NodeId, Successors};
///
/// let mut graph: DirectedGraph<&str, ()> = DirectedGraph::new();
/// let a = graph.add_node("A");
/// let b = graph.add_node("B");
/// let c = graph.add_node("C");
///
/// graph.add_edge(a, b, ()).unwrap();
/// graph.add_edge(a, c, ()).unwrap();
///
/// let successors: Vec<NodeId> = graph.successors(a).collect();
/// assert_eq!(successors, vec![b, c]);
/// ```
pub trait Successors: GraphBase {
    /// Returns an iterator over the successor nodes of the given node.
    ///
    /// Successors are nodes that are targets of edges originating from the
    /// specified node. For a directed edge `(u, v)`, node `v` is a successor
    /// of `u`. Each outgoing edge is yielded exactly once per call, in a
    /// stable order.
    ///
    /// # Arguments
    ///
    /// * `node` - The node whose successors to iterate
    ///
    /// # Returns
    ///
    /// An iterator yielding the `NodeId` of each successor node.
    ///
    /// # Panics
    ///
    /// May panic if `node` is not a valid node in the graph.
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId>;
}

/// Trait for graphs that support backward edge traversal.
///
/// This trait provides access to the predecessor nodes of any given node,
/// enabling backward graph traversal and algorithms that need to follow edges
/// in reverse.
///
/// # Required Methods
///
/// - [`predecessors`](Predecessors::predecessors) - Returns an iterator over predecessor nodes
pub trait Predecessors: GraphBase {
    /// Returns an iterator over the predecessor nodes of the given node.
    ///
    /// Predecessors are nodes that are sources of edges targeting the
    /// specified node. For a directed edge `(u, v)`, node `u` is a
    /// predecessor of `v`.
    ///
    /// # Arguments
    ///
    /// * `node` - The node whose predecessors to iterate
    ///
    /// # Returns
    ///
    /// An iterator yielding the `NodeId` of each predecessor node.
    ///
    /// # Panics
    ///
    /// May panic if `node` is not a valid node in the graph.
    fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId>;
}

/// Trait for graphs with a designated entry (root) node.
///
/// This trait extends [`Successors`] to indicate that the graph has a single
/// distinguished entry point. This is essential for algorithms like dominator
/// computation that require a well-defined starting point.
///
/// # Required Methods
///
/// - [`entry`](RootedGraph::entry) - Returns the entry node of the graph
///
/// # Use Cases
///
/// - **Control Flow Graphs**: The entry node is the first basic block
/// - **Call Graphs**: The entry could be the main/entry point method
/// - **Dependency Graphs**: The entry represents the root dependency
pub trait RootedGraph: Successors {
    /// Returns the entry (root) node of the graph.
    ///
    /// The entry node is the designated starting point for forward traversals
    /// and the root for dominator tree computation. In a control flow graph,
    /// this is typically the first basic block of a function.
    ///
    /// # Returns
    ///
    /// The `NodeId` of the entry node.
    fn entry(&self) -> NodeId;
}
