//! Core directed graph implementation.
//!
//! This module provides [`DirectedGraph`], the primary graph data structure of
//! the crate. The implementation uses adjacency lists for efficient traversal
//! while maintaining full edge data access. Adjacency lists preserve insertion
//! order, which gives the analysis algorithms the stable successor enumeration
//! they require.

use crate::{
    graph::{
        ids::{EdgeId, NodeId},
        traits::{GraphBase, Predecessors, Successors},
    },
    Error, Result,
};

/// Internal storage for edge data and endpoints.
#[derive(Debug, Clone)]
struct EdgeData<E> {
    /// Source node of the edge
    source: NodeId,
    /// Target node of the edge
    target: NodeId,
    /// User-provided edge data
    data: E,
}

/// A directed graph with typed node and edge data.
///
/// `DirectedGraph` provides a flexible, efficient graph implementation
/// suitable for control-flow analysis. It supports:
///
/// - Generic node data (`N`) - Store any data associated with each node
/// - Generic edge data (`E`) - Store any data associated with each edge
/// - Efficient adjacency queries via adjacency lists
/// - Both forward (successors) and backward (predecessors) traversal
/// - Parallel edges and self-loops (multigraph semantics)
///
/// # Memory Layout
///
/// The graph uses separate storage for nodes and edges:
///
/// - Node data is stored in a vector indexed by `NodeId`
/// - Edges are stored in a contiguous vector indexed by `EdgeId`
/// - Adjacency lists (outgoing/incoming) store `EdgeId` references
///
/// This design provides O(1) node/edge access and efficient iteration.
///
/// # Successor Order
///
/// [`successors`](Self::successors) yields targets in the order the edges
/// were added. Re-running an analysis over an unchanged graph therefore
/// observes the same enumeration and produces identical results.
///
/// # Thread Safety
///
/// `DirectedGraph<N, E>` is [`Send`] and [`Sync`] when both `N` and `E` are,
/// enabling safe concurrent read access after construction. The graph does
/// not support concurrent modification; build the graph single-threaded,
/// then use it immutably from multiple threads.
///
/// # Examples
///
/// ```rust
/// use domscope::graph::DirectedGraph;
///
/// let mut graph: DirectedGraph<&str, i32> = DirectedGraph::new();
///
/// let a = graph.add_node("A");
/// let b = graph.add_node("B");
/// let c = graph.add_node("C");
///
/// graph.add_edge(a, b, 10).unwrap();
/// graph.add_edge(b, c, 20).unwrap();
/// graph.add_edge(a, c, 30).unwrap();
///
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DirectedGraph<N, E> {
    /// Node data storage
    nodes: Vec<N>,
    /// Edge data storage
    edges: Vec<EdgeData<E>>,
    /// Outgoing edges per node (adjacency list for successors)
    outgoing: Vec<Vec<EdgeId>>,
    /// Incoming edges per node (adjacency list for predecessors)
    incoming: Vec<Vec<EdgeId>>,
}

impl<N, E> Default for DirectedGraph<N, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, E> DirectedGraph<N, E> {
    /// Creates a new empty directed graph.
    ///
    /// The graph starts with no nodes or edges. Use [`add_node`](Self::add_node)
    /// and [`add_edge`](Self::add_edge) to build up the graph structure.
    #[must_use]
    pub fn new() -> Self {
        DirectedGraph {
            nodes: Vec::new(),
            edges: Vec::new(),
            outgoing: Vec::new(),
            incoming: Vec::new(),
        }
    }

    /// Creates a new directed graph with pre-allocated capacity.
    ///
    /// Pre-allocating capacity can improve performance when the approximate
    /// size of the graph is known in advance, by avoiding reallocations
    /// during construction.
    ///
    /// # Arguments
    ///
    /// * `node_capacity` - Expected number of nodes
    /// * `edge_capacity` - Expected number of edges
    #[must_use]
    pub fn with_capacity(node_capacity: usize, edge_capacity: usize) -> Self {
        DirectedGraph {
            nodes: Vec::with_capacity(node_capacity),
            edges: Vec::with_capacity(edge_capacity),
            outgoing: Vec::with_capacity(node_capacity),
            incoming: Vec::with_capacity(node_capacity),
        }
    }

    /// Adds a new node with the given data to the graph.
    ///
    /// The node is assigned the next sequential `NodeId`, starting from 0.
    /// The returned `NodeId` can be used to reference this node when adding
    /// edges or querying the graph.
    ///
    /// # Arguments
    ///
    /// * `data` - The data to associate with this node
    ///
    /// # Returns
    ///
    /// The `NodeId` assigned to the new node.
    pub fn add_node(&mut self, data: N) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(data);
        self.outgoing.push(Vec::new());
        self.incoming.push(Vec::new());
        id
    }

    /// Adds a directed edge from `source` to `target` with the given data.
    ///
    /// The edge is assigned the next sequential `EdgeId`, starting from 0.
    /// Multiple edges between the same pair of nodes are allowed (multigraph),
    /// as are self-loops.
    ///
    /// # Arguments
    ///
    /// * `source` - The source node of the edge
    /// * `target` - The target node of the edge
    /// * `data` - The data to associate with this edge
    ///
    /// # Returns
    ///
    /// The `EdgeId` assigned to the new edge.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GraphError`] if either `source` or `target` node does
    /// not exist in the graph.
    pub fn add_edge(&mut self, source: NodeId, target: NodeId, data: E) -> Result<EdgeId> {
        if source.index() >= self.nodes.len() {
            return Err(Error::GraphError(format!(
                "source node {} does not exist in graph with {} nodes",
                source,
                self.nodes.len()
            )));
        }
        if target.index() >= self.nodes.len() {
            return Err(Error::GraphError(format!(
                "target node {} does not exist in graph with {} nodes",
                target,
                self.nodes.len()
            )));
        }

        let id = EdgeId::new(self.edges.len());
        self.edges.push(EdgeData {
            source,
            target,
            data,
        });

        self.outgoing[source.index()].push(id);
        self.incoming[target.index()].push(id);

        Ok(id)
    }

    /// Returns a reference to the data associated with the given node.
    ///
    /// # Arguments
    ///
    /// * `node` - The node to look up
    ///
    /// # Returns
    ///
    /// `Some(&N)` if the node exists, `None` otherwise.
    #[must_use]
    pub fn node(&self, node: NodeId) -> Option<&N> {
        self.nodes.get(node.index())
    }

    /// Returns a mutable reference to the data associated with the given node.
    ///
    /// # Arguments
    ///
    /// * `node` - The node to look up
    ///
    /// # Returns
    ///
    /// `Some(&mut N)` if the node exists, `None` otherwise.
    pub fn node_mut(&mut self, node: NodeId) -> Option<&mut N> {
        self.nodes.get_mut(node.index())
    }

    /// Returns the number of nodes in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns an iterator over all node identifiers in the graph.
    ///
    /// Nodes are yielded in the order they were added (ascending `NodeId`).
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId::new)
    }

    /// Returns an iterator over all nodes with their identifiers.
    ///
    /// This is useful when you need both the node data and its identifier.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &N)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, data)| (NodeId::new(i), data))
    }

    /// Returns a reference to the data associated with the given edge.
    ///
    /// # Arguments
    ///
    /// * `edge` - The edge to look up
    ///
    /// # Returns
    ///
    /// `Some(&E)` if the edge exists, `None` otherwise.
    #[must_use]
    pub fn edge(&self, edge: EdgeId) -> Option<&E> {
        self.edges.get(edge.index()).map(|e| &e.data)
    }

    /// Returns the source and target nodes of the given edge.
    ///
    /// # Arguments
    ///
    /// * `edge` - The edge to look up
    ///
    /// # Returns
    ///
    /// `Some((source, target))` if the edge exists, `None` otherwise.
    #[must_use]
    pub fn edge_endpoints(&self, edge: EdgeId) -> Option<(NodeId, NodeId)> {
        self.edges.get(edge.index()).map(|e| (e.source, e.target))
    }

    /// Returns the number of edges in the graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns an iterator over all edge identifiers in the graph.
    ///
    /// Edges are yielded in the order they were added (ascending `EdgeId`).
    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
        (0..self.edges.len()).map(EdgeId::new)
    }

    /// Returns an iterator over the successors of the given node.
    ///
    /// Successors are nodes that are targets of edges originating from this
    /// node, yielded in edge-insertion order. A node with two parallel edges
    /// to the same target yields that target twice.
    ///
    /// # Arguments
    ///
    /// * `node` - The node whose successors to iterate
    ///
    /// # Panics
    ///
    /// Panics if `node` is not a valid node in the graph.
    pub fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.outgoing[node.index()]
            .iter()
            .map(|&edge_id| self.edges[edge_id.index()].target)
    }

    /// Returns an iterator over the predecessors of the given node.
    ///
    /// Predecessors are nodes that are sources of edges targeting this node,
    /// yielded in edge-insertion order.
    ///
    /// # Arguments
    ///
    /// * `node` - The node whose predecessors to iterate
    ///
    /// # Panics
    ///
    /// Panics if `node` is not a valid node in the graph.
    pub fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.incoming[node.index()]
            .iter()
            .map(|&edge_id| self.edges[edge_id.index()].source)
    }

    /// Returns an iterator over outgoing edges from the given node.
    ///
    /// This provides access to both the edge ID and edge data for more
    /// detailed edge inspection than [`successors`](Self::successors).
    ///
    /// # Panics
    ///
    /// Panics if `node` is not a valid node in the graph.
    pub fn outgoing_edges(&self, node: NodeId) -> impl Iterator<Item = (EdgeId, &E)> + '_ {
        self.outgoing[node.index()]
            .iter()
            .map(|&edge_id| (edge_id, &self.edges[edge_id.index()].data))
    }

    /// Returns an iterator over incoming edges to the given node.
    ///
    /// This provides access to both the edge ID and edge data for more
    /// detailed edge inspection than [`predecessors`](Self::predecessors).
    ///
    /// # Panics
    ///
    /// Panics if `node` is not a valid node in the graph.
    pub fn incoming_edges(&self, node: NodeId) -> impl Iterator<Item = (EdgeId, &E)> + '_ {
        self.incoming[node.index()]
            .iter()
            .map(|&edge_id| (edge_id, &self.edges[edge_id.index()].data))
    }

    /// Returns the out-degree (number of outgoing edges) of a node.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not a valid node in the graph.
    #[must_use]
    pub fn out_degree(&self, node: NodeId) -> usize {
        self.outgoing[node.index()].len()
    }

    /// Returns the in-degree (number of incoming edges) of a node.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not a valid node in the graph.
    #[must_use]
    pub fn in_degree(&self, node: NodeId) -> usize {
        self.incoming[node.index()].len()
    }

    /// Returns `true` if the graph contains no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns an iterator over entry nodes (nodes with no incoming edges).
    ///
    /// Entry nodes have in-degree of zero and are potential starting points
    /// for graph traversal.
    pub fn entry_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.node_ids().filter(|&node| self.in_degree(node) == 0)
    }

    /// Returns an iterator over exit nodes (nodes with no outgoing edges).
    ///
    /// Exit nodes have out-degree of zero and represent terminal points
    /// in the graph.
    pub fn exit_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.node_ids().filter(|&node| self.out_degree(node) == 0)
    }

    /// Checks if the given node ID is valid for this graph.
    ///
    /// # Arguments
    ///
    /// * `node` - The node ID to check
    ///
    /// # Returns
    ///
    /// `true` if the node exists in the graph, `false` otherwise.
    #[must_use]
    pub fn contains_node(&self, node: NodeId) -> bool {
        node.index() < self.nodes.len()
    }

    /// Checks if the given edge ID is valid for this graph.
    ///
    /// # Arguments
    ///
    /// * `edge` - The edge ID to check
    ///
    /// # Returns
    ///
    /// `true` if the edge exists in the graph, `false` otherwise.
    #[must_use]
    pub fn contains_edge(&self, edge: EdgeId) -> bool {
        edge.index() < self.edges.len()
    }
}

impl<N, E> GraphBase for DirectedGraph<N, E> {
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId::new)
    }
}

impl<N, E> Successors for DirectedGraph<N, E> {
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.outgoing[node.index()]
            .iter()
            .map(|&edge_id| self.edges[edge_id.index()].target)
    }
}

impl<N, E> Predecessors for DirectedGraph<N, E> {
    fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.incoming[node.index()]
            .iter()
            .map(|&edge_id| self.edges[edge_id.index()].source)
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::{
        directed::DirectedGraph,
        ids::{EdgeId, NodeId},
        traits::{GraphBase, Predecessors, Successors},
    };

    /// Creates a simple linear graph: A -> B -> C
    fn create_linear_graph() -> DirectedGraph<&'static str, ()> {
        let mut graph = DirectedGraph::new();
        let a = graph.add_node("A");
        let b = graph.add_node("B");
        let c = graph.add_node("C");
        graph.add_edge(a, b, ()).unwrap();
        graph.add_edge(b, c, ()).unwrap();
        graph
    }

    /// Creates a diamond graph: A -> B, A -> C, B -> D, C -> D
    fn create_diamond_graph() -> DirectedGraph<&'static str, ()> {
        let mut graph = DirectedGraph::new();
        let a = graph.add_node("A");
        let b = graph.add_node("B");
        let c = graph.add_node("C");
        let d = graph.add_node("D");
        graph.add_edge(a, b, ()).unwrap();
        graph.add_edge(a, c, ()).unwrap();
        graph.add_edge(b, d, ()).unwrap();
        graph.add_edge(c, d, ()).unwrap();
        graph
    }

    #[test]
    fn test_new_graph_is_empty() {
        let graph: DirectedGraph<(), ()> = DirectedGraph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_default() {
        let graph: DirectedGraph<(), ()> = DirectedGraph::default();
        assert!(graph.is_empty());
    }

    #[test]
    fn test_add_node() {
        let mut graph: DirectedGraph<&str, ()> = DirectedGraph::new();

        let a = graph.add_node("A");
        assert_eq!(a, NodeId::new(0));
        assert_eq!(graph.node_count(), 1);

        let b = graph.add_node("B");
        assert_eq!(b, NodeId::new(1));
        assert_eq!(graph.node_count(), 2);
    }

    #[test]
    fn test_node_access() {
        let mut graph: DirectedGraph<&str, ()> = DirectedGraph::new();
        let a = graph.add_node("hello");

        assert_eq!(graph.node(a), Some(&"hello"));
        assert_eq!(graph.node(NodeId::new(999)), None);
    }

    #[test]
    fn test_node_mut() {
        let mut graph: DirectedGraph<String, ()> = DirectedGraph::new();
        let a = graph.add_node(String::from("hello"));

        if let Some(data) = graph.node_mut(a) {
            data.push_str(" world");
        }

        assert_eq!(graph.node(a), Some(&String::from("hello world")));
    }

    #[test]
    fn test_add_edge() {
        let mut graph: DirectedGraph<&str, &str> = DirectedGraph::new();
        let a = graph.add_node("A");
        let b = graph.add_node("B");

        let edge = graph.add_edge(a, b, "A->B").unwrap();
        assert_eq!(edge, EdgeId::new(0));
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edge(edge), Some(&"A->B"));
        assert_eq!(graph.edge_endpoints(edge), Some((a, b)));
    }

    #[test]
    fn test_add_edge_invalid_endpoints() {
        let mut graph: DirectedGraph<(), ()> = DirectedGraph::new();
        let a = graph.add_node(());

        let result = graph.add_edge(NodeId::new(999), a, ());
        assert!(result.unwrap_err().to_string().contains("source node"));

        let result = graph.add_edge(a, NodeId::new(999), ());
        assert!(result.unwrap_err().to_string().contains("target node"));
    }

    #[test]
    fn test_multiple_edges() {
        let mut graph: DirectedGraph<&str, i32> = DirectedGraph::new();
        let a = graph.add_node("A");
        let b = graph.add_node("B");

        // Parallel edges between the same nodes are allowed (multigraph)
        let e1 = graph.add_edge(a, b, 1).unwrap();
        let e2 = graph.add_edge(a, b, 2).unwrap();

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.edge(e1), Some(&1));
        assert_eq!(graph.edge(e2), Some(&2));
    }

    #[test]
    fn test_self_loop() {
        let mut graph: DirectedGraph<&str, ()> = DirectedGraph::new();
        let a = graph.add_node("A");

        let edge = graph.add_edge(a, a, ()).unwrap();
        assert_eq!(graph.edge_endpoints(edge), Some((a, a)));
        assert_eq!(graph.out_degree(a), 1);
        assert_eq!(graph.in_degree(a), 1);
    }

    #[test]
    fn test_successors_are_in_insertion_order() {
        let mut graph: DirectedGraph<&str, ()> = DirectedGraph::new();
        let a = graph.add_node("A");
        let b = graph.add_node("B");
        let c = graph.add_node("C");

        graph.add_edge(a, c, ()).unwrap();
        graph.add_edge(a, b, ()).unwrap();

        let successors: Vec<NodeId> = graph.successors(a).collect();
        assert_eq!(successors, vec![c, b]);
    }

    #[test]
    fn test_predecessors() {
        let graph = create_diamond_graph();
        let d = NodeId::new(3);

        let predecessors: Vec<NodeId> = graph.predecessors(d).collect();
        assert_eq!(predecessors, vec![NodeId::new(1), NodeId::new(2)]);
    }

    #[test]
    fn test_outgoing_and_incoming_edges() {
        let mut graph: DirectedGraph<&str, i32> = DirectedGraph::new();
        let a = graph.add_node("A");
        let b = graph.add_node("B");
        let c = graph.add_node("C");

        graph.add_edge(a, b, 10).unwrap();
        graph.add_edge(a, c, 20).unwrap();
        graph.add_edge(b, c, 30).unwrap();

        let weights: Vec<i32> = graph.outgoing_edges(a).map(|(_, &w)| w).collect();
        assert_eq!(weights, vec![10, 20]);

        let weights: Vec<i32> = graph.incoming_edges(c).map(|(_, &w)| w).collect();
        assert_eq!(weights, vec![20, 30]);
    }

    #[test]
    fn test_degrees() {
        let graph = create_diamond_graph();

        assert_eq!(graph.out_degree(NodeId::new(0)), 2);
        assert_eq!(graph.out_degree(NodeId::new(3)), 0);
        assert_eq!(graph.in_degree(NodeId::new(0)), 0);
        assert_eq!(graph.in_degree(NodeId::new(3)), 2);
    }

    #[test]
    fn test_entry_and_exit_nodes() {
        let graph = create_diamond_graph();

        let entries: Vec<NodeId> = graph.entry_nodes().collect();
        assert_eq!(entries, vec![NodeId::new(0)]);

        let exits: Vec<NodeId> = graph.exit_nodes().collect();
        assert_eq!(exits, vec![NodeId::new(3)]);
    }

    #[test]
    fn test_contains() {
        let mut graph: DirectedGraph<(), ()> = DirectedGraph::new();
        let a = graph.add_node(());
        let b = graph.add_node(());
        let edge = graph.add_edge(a, b, ()).unwrap();

        assert!(graph.contains_node(a));
        assert!(!graph.contains_node(NodeId::new(999)));
        assert!(graph.contains_edge(edge));
        assert!(!graph.contains_edge(EdgeId::new(999)));
    }

    #[test]
    fn test_trait_impls() {
        fn reach<G: Successors>(g: &G, node: NodeId) -> Vec<NodeId> {
            g.successors(node).collect()
        }
        fn back<G: Predecessors>(g: &G, node: NodeId) -> Vec<NodeId> {
            g.predecessors(node).collect()
        }

        let graph = create_linear_graph();
        assert_eq!(GraphBase::node_count(&graph), 3);
        assert_eq!(reach(&graph, NodeId::new(0)), vec![NodeId::new(1)]);
        assert_eq!(back(&graph, NodeId::new(2)), vec![NodeId::new(1)]);
    }

    #[test]
    fn test_large_graph() {
        let mut graph: DirectedGraph<usize, ()> = DirectedGraph::with_capacity(1000, 999);

        for i in 0..1000 {
            graph.add_node(i);
        }
        for i in 0..999 {
            graph
                .add_edge(NodeId::new(i), NodeId::new(i + 1), ())
                .unwrap();
        }

        assert_eq!(graph.node_count(), 1000);
        assert_eq!(graph.edge_count(), 999);
        assert_eq!(graph.out_degree(NodeId::new(999)), 0);
        assert_eq!(graph.in_degree(NodeId::new(0)), 0);
    }
}
