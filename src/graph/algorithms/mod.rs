//! Graph algorithms for control-flow analysis.
//!
//! This module hosts the analysis passes that run over the graph types of
//! this crate (or any type implementing the [`Successors`](crate::graph::Successors)
//! seam).
//!
//! # Available Algorithms
//!
//! ## Traversal
//!
//! - [`dfs`] - Depth-first preorder traversal
//! - [`bfs`] - Breadth-first traversal
//!
//! ## Dominator Analysis
//!
//! - [`compute_dominators`] - Lengauer-Tarjan dominator computation
//! - [`compute_dominators_rooted`] - Same, entry taken from a [`RootedGraph`](crate::graph::RootedGraph)
//! - [`DominatorTree`] - Result of dominator computation, with dominance queries
//!
//! # Algorithm Selection
//!
//! | Algorithm | Time Complexity | Use Case |
//! |-----------|-----------------|----------|
//! | DFS/BFS | O(V + E) | General traversal, reachability |
//! | Dominators | O(E α(V)) | Control-flow structure, dominance queries |
//!
//! # Examples
//!
//! ```rust
//! use domscope::graph::{algorithms, DirectedGraph};
//!
//! let mut graph: DirectedGraph<&str, ()> = DirectedGraph::new();
//! let entry = graph.add_node("entry");
//! let a = graph.add_node("A");
//! let b = graph.add_node("B");
//! let exit = graph.add_node("exit");
//!
//! graph.add_edge(entry, a, ()).unwrap();
//! graph.add_edge(entry, b, ()).unwrap();
//! graph.add_edge(a, exit, ()).unwrap();
//! graph.add_edge(b, exit, ()).unwrap();
//!
//! let tree = algorithms::compute_dominators(&graph, entry).unwrap();
//! assert!(tree.dominates(entry, exit));
//! assert!(!tree.dominates(a, exit));
//! ```

mod dominators;
mod traversal;

// Re-export all public items
pub use dominators::{compute_dominators, compute_dominators_rooted, DominatorTree};
pub use traversal::{bfs, dfs, Bfs, Dfs};
