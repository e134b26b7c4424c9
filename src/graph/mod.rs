//! Directed graph infrastructure and the dominator analysis built on it.
//!
//! This module provides a reusable directed graph implementation together
//! with the dominator analysis that is the point of this crate. The
//! implementation prioritizes correctness, clear semantics, and efficient
//! algorithms over raw performance.
//!
//! # Architecture
//!
//! The graph module is organized into several components:
//!
//! - **Core Types**: [`NodeId`], [`EdgeId`], and [`DirectedGraph`] provide the
//!   fundamental building blocks for graph representation
//! - **Keyed Graphs**: [`IndexedGraph`] maps arbitrary hashable vertex
//!   identities onto the core types
//! - **Traits**: [`GraphBase`], [`Successors`], [`Predecessors`] and
//!   [`RootedGraph`] let the algorithms run over foreign graph types
//! - **Algorithms**: traversal and dominator computation in [`algorithms`]
//! - **Visualization**: DOT output in [`dot`]
//!
//! # Design Principles
//!
//! ## Strongly-Typed Identifiers
//!
//! Node and edge identifiers use newtype wrappers to prevent accidental
//! mixing of indices and provide type safety at compile time.
//!
//! ## Immutable After Construction
//!
//! Graphs are built incrementally during construction, then treated as
//! immutable for analysis. This enables safe concurrent access without
//! locks; the analysis results themselves are likewise read-only.
//!
//! ## Stable Enumeration Order
//!
//! Successor enumeration follows edge-insertion order. Analyses observe the
//! same order on every run over an unchanged graph, so their results are
//! deterministic.
//!
//! # Usage Examples
//!
//! ## Creating a Graph and Computing Dominators
//!
//! ```rust
//! use domscope::graph::{algorithms::compute_dominators, DirectedGraph};
//!
//! // Diamond-shaped graph: A -> B, A -> C, B -> D, C -> D
//! let mut graph: DirectedGraph<&str, ()> = DirectedGraph::new();
//!
//! let a = graph.add_node("A");
//! let b = graph.add_node("B");
//! let c = graph.add_node("C");
//! let d = graph.add_node("D");
//!
//! graph.add_edge(a, b, ()).unwrap();
//! graph.add_edge(a, c, ()).unwrap();
//! graph.add_edge(b, d, ()).unwrap();
//! graph.add_edge(c, d, ()).unwrap();
//!
//! let tree = compute_dominators(&graph, a).unwrap();
//! assert_eq!(tree.immediate_dominator(d), Some(a));
//! ```
//!
//! ## Traversing a Graph
//!
//! ```rust
//! use domscope::graph::{algorithms, DirectedGraph, NodeId};
//!
//! let mut graph: DirectedGraph<&str, ()> = DirectedGraph::new();
//! let a = graph.add_node("A");
//! let b = graph.add_node("B");
//! let c = graph.add_node("C");
//! graph.add_edge(a, b, ()).unwrap();
//! graph.add_edge(b, c, ()).unwrap();
//!
//! let order: Vec<NodeId> = algorithms::dfs(&graph, a).collect();
//! assert_eq!(order, vec![a, b, c]);
//! ```
//!
//! # Thread Safety
//!
//! All types in this module implement [`Send`] and [`Sync`] when their
//! generic parameters do, enabling safe concurrent access for analysis
//! operations.

mod directed;
mod ids;
mod indexed;
mod traits;

pub mod algorithms;
pub mod dot;

// Re-export core types at module level
pub use directed::DirectedGraph;
pub use ids::{EdgeId, NodeId};
pub use indexed::IndexedGraph;
pub use traits::{GraphBase, Predecessors, RootedGraph, Successors};
