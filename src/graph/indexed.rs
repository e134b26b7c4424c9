//! Indexed graph wrapper for domain-typed vertices.
//!
//! This module provides [`IndexedGraph`], a convenience wrapper around
//! [`DirectedGraph`] that automatically handles the mapping between domain
//! types (basic-block labels, instruction addresses, interned names) and
//! internal [`NodeId`] indices.
//!
//! # Motivation
//!
//! When computing dominators over a real control flow graph, callers often
//! need to:
//! 1. Build a graph from domain-specific vertex identities
//! 2. Run the analysis, which works with `NodeId`
//! 3. Map results back to the domain identities
//!
//! `IndexedGraph` encapsulates this pattern. Any `Hash + Eq + Clone` type
//! serves as a vertex identity.
//!
//! # Examples
//!
//! ```rust
//! use domscope::graph::IndexedGraph;
//!
//! let mut graph: IndexedGraph<&str, ()> = IndexedGraph::new();
//!
//! // Nodes are created on first use.
//! graph.add_edge("entry", "loop", ()).unwrap();
//! graph.add_edge("loop", "loop", ()).unwrap();
//! graph.add_edge("loop", "exit", ()).unwrap();
//!
//! let tree = graph.compute_dominators_from(&"entry").unwrap();
//! let entry = graph.get_node_id(&"entry").unwrap();
//! let exit = graph.get_node_id(&"exit").unwrap();
//! assert!(tree.dominates(entry, exit));
//! ```

use std::collections::HashMap;
use std::hash::Hash;

use crate::{
    graph::{
        algorithms::{compute_dominators, DominatorTree},
        DirectedGraph, NodeId,
    },
    Error, Result,
};

/// A graph wrapper that provides automatic mapping between domain types and
/// `NodeId`.
///
/// `IndexedGraph<K, E>` stores nodes indexed by keys of type `K` (which must
/// be `Hash + Eq + Clone`) and edges with data of type `E`. It maintains
/// bidirectional mappings for efficient lookups in both directions.
///
/// # Type Parameters
///
/// * `K` - The domain key type for vertices (e.g. a block label)
/// * `E` - The edge data type
///
/// # Thread Safety
///
/// `IndexedGraph<K, E>` is `Send` and `Sync` when both `K` and `E` are.
#[derive(Debug, Clone)]
pub struct IndexedGraph<K, E>
where
    K: Hash + Eq + Clone,
{
    /// The underlying directed graph (nodes store unit type, keys are separate)
    graph: DirectedGraph<(), E>,
    /// Map from domain key to `NodeId`
    key_to_node: HashMap<K, NodeId>,
    /// Map from `NodeId` to domain key
    node_to_key: HashMap<NodeId, K>,
}

impl<K, E> Default for IndexedGraph<K, E>
where
    K: Hash + Eq + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, E> IndexedGraph<K, E>
where
    K: Hash + Eq + Clone,
{
    /// Creates a new empty indexed graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            graph: DirectedGraph::new(),
            key_to_node: HashMap::new(),
            node_to_key: HashMap::new(),
        }
    }

    /// Creates a new indexed graph with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(node_capacity: usize, edge_capacity: usize) -> Self {
        Self {
            graph: DirectedGraph::with_capacity(node_capacity, edge_capacity),
            key_to_node: HashMap::with_capacity(node_capacity),
            node_to_key: HashMap::with_capacity(node_capacity),
        }
    }

    /// Adds a node with the given key, or returns the existing `NodeId` if
    /// already present.
    ///
    /// This method is idempotent - calling it multiple times with the same
    /// key will always return the same `NodeId`.
    ///
    /// # Arguments
    ///
    /// * `key` - The domain key for this node
    ///
    /// # Returns
    ///
    /// The `NodeId` associated with this key.
    pub fn add_node(&mut self, key: K) -> NodeId {
        if let Some(&node_id) = self.key_to_node.get(&key) {
            return node_id;
        }

        let node_id = self.graph.add_node(());
        self.key_to_node.insert(key.clone(), node_id);
        self.node_to_key.insert(node_id, key);
        node_id
    }

    /// Adds a directed edge between two nodes identified by their keys.
    ///
    /// If either node doesn't exist, it will be created automatically.
    /// Parallel edges are allowed, matching the underlying graph.
    ///
    /// # Arguments
    ///
    /// * `from` - The source node key
    /// * `to` - The target node key
    /// * `data` - The edge data
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying graph operation fails.
    pub fn add_edge(&mut self, from: K, to: K, data: E) -> Result<()> {
        let from_node = self.add_node(from);
        let to_node = self.add_node(to);
        self.graph.add_edge(from_node, to_node, data)?;
        Ok(())
    }

    /// Returns the `NodeId` for a given key, if it exists.
    #[must_use]
    pub fn get_node_id(&self, key: &K) -> Option<NodeId> {
        self.key_to_node.get(key).copied()
    }

    /// Returns the key for a given `NodeId`, if it exists.
    #[must_use]
    pub fn get_key(&self, node_id: NodeId) -> Option<&K> {
        self.node_to_key.get(&node_id)
    }

    /// Returns the number of nodes in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of edges in the graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns `true` if the graph contains no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// Returns a reference to the underlying `DirectedGraph`.
    ///
    /// This is useful when you need to pass the graph to algorithms that
    /// work with `DirectedGraph` directly.
    #[must_use]
    pub fn inner(&self) -> &DirectedGraph<(), E> {
        &self.graph
    }

    /// Returns an iterator over all keys in the graph.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.key_to_node.keys()
    }

    /// Maps a slice of `NodeId`s back to domain keys.
    ///
    /// Nodes that don't have a corresponding key are skipped.
    #[must_use]
    pub fn map_nodes_to_keys(&self, nodes: &[NodeId]) -> Vec<K> {
        nodes
            .iter()
            .filter_map(|node_id| self.node_to_key.get(node_id).cloned())
            .collect()
    }
}

// Dominator convenience methods
impl<K, E> IndexedGraph<K, E>
where
    K: Hash + Eq + Clone,
{
    /// Computes the dominator tree of this graph starting from the vertex
    /// with the given key.
    ///
    /// Query results speak [`NodeId`]; use [`get_node_id`](Self::get_node_id),
    /// [`get_key`](Self::get_key) and [`map_nodes_to_keys`](Self::map_nodes_to_keys)
    /// to translate. The successor enumeration order (and with it the DFS
    /// numbering) is the edge-insertion order.
    ///
    /// # Arguments
    ///
    /// * `entry` - The key of the designated entry vertex
    ///
    /// # Errors
    ///
    /// Returns [`Error::GraphError`] if `entry` is not a key of this graph,
    /// and [`Error::EmptyGraph`] if the graph has no nodes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use domscope::graph::IndexedGraph;
    ///
    /// let mut graph: IndexedGraph<&str, ()> = IndexedGraph::new();
    /// graph.add_edge("A", "B", ()).unwrap();
    /// graph.add_edge("A", "C", ()).unwrap();
    /// graph.add_edge("B", "D", ()).unwrap();
    /// graph.add_edge("C", "D", ()).unwrap();
    ///
    /// let tree = graph.compute_dominators_from(&"A").unwrap();
    /// let d = graph.get_node_id(&"D").unwrap();
    /// let dominators = graph.map_nodes_to_keys(&tree.dominators_of(d));
    /// assert_eq!(dominators, vec!["A"]);
    /// ```
    pub fn compute_dominators_from(&self, entry: &K) -> Result<DominatorTree> {
        let entry_node = self.get_node_id(entry).ok_or_else(|| {
            Error::GraphError("entry key does not name a node of this graph".to_string())
        })?;
        compute_dominators(&self.graph, entry_node)
    }
}
