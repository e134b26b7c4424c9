//! # domscope Prelude
//!
//! This module provides a convenient prelude for the most commonly used types
//! from the domscope library. Import this module to get quick access to the
//! essential types for dominator analysis.
//!
//! # Usage
//!
//! ```rust
//! use domscope::prelude::*;
//!
//! let mut graph: DirectedGraph<&str, ()> = DirectedGraph::new();
//! let entry = graph.add_node("entry");
//! let exit = graph.add_node("exit");
//! graph.add_edge(entry, exit, ()).unwrap();
//!
//! let tree = compute_dominators(&graph, entry).unwrap();
//! assert!(tree.dominates(entry, exit));
//! ```

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all domscope operations
pub use crate::Error;

/// The result type used throughout domscope
pub use crate::Result;

// ================================================================================================
// Graph Types
// ================================================================================================

/// The core directed graph and its typed identifiers
pub use crate::graph::{DirectedGraph, EdgeId, IndexedGraph, NodeId};

/// Graph capability traits for plugging in foreign CFG types
pub use crate::graph::{GraphBase, Predecessors, RootedGraph, Successors};

// ================================================================================================
// Dominator Analysis
// ================================================================================================

/// Dominator computation entry points and result type
pub use crate::graph::algorithms::{
    compute_dominators, compute_dominators_rooted, DominatorTree,
};
