//! Graph traversal algorithms.
//!
//! This module provides depth-first and breadth-first traversal iterators for
//! directed graphs. Both visit each reachable node exactly once and skip
//! nodes the start cannot reach.
//!
//! The preorder produced by [`dfs`] follows successor enumeration order, the
//! same order the dominator analysis uses for its internal numbering, so
//! `dfs(&graph, entry)` yields exactly the sequence reported by
//! [`DominatorTree::vertices`](crate::graph::algorithms::DominatorTree::vertices).

use std::collections::VecDeque;

use crate::graph::{NodeId, Successors};

/// Depth-first preorder iterator over graph nodes.
///
/// Performs an iterative (non-recursive) depth-first traversal from a given
/// start node, yielding each node before any of its descendants. Created by
/// [`dfs`].
pub struct Dfs<'g, G: Successors> {
    graph: &'g G,
    stack: Vec<NodeId>,
    visited: Vec<bool>,
}

impl<G: Successors> Iterator for Dfs<'_, G> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        // Nodes are marked when popped, not when pushed; a node reachable on
        // two paths may sit on the stack twice, and skipping the stale entry
        // here is what makes the yield order agree with recursive preorder.
        loop {
            let node = self.stack.pop()?;
            if self.visited[node.index()] {
                continue;
            }
            self.visited[node.index()] = true;

            // Push successors in reverse so they pop in enumeration order.
            let successors: Vec<NodeId> = self.graph.successors(node).collect();
            for &succ in successors.iter().rev() {
                if !self.visited[succ.index()] {
                    self.stack.push(succ);
                }
            }

            return Some(node);
        }
    }
}

/// Returns a depth-first preorder iterator starting from the given node.
///
/// Each node reachable from `start` is yielded exactly once, parents before
/// children, siblings in successor enumeration order. A `start` that is not
/// a valid node yields nothing.
///
/// # Arguments
///
/// * `graph` - The graph to traverse
/// * `start` - The starting node for traversal
///
/// # Complexity
///
/// O(V + E) time, O(V) space for the visited set and stack.
///
/// # Examples
///
/// ```rust
/// use domscope::graph::{algorithms::dfs, DirectedGraph, NodeId};
///
/// let mut graph: DirectedGraph<&str, ()> = DirectedGraph::new();
/// let a = graph.add_node("A");
/// let b = graph.add_node("B");
/// let c = graph.add_node("C");
/// graph.add_edge(a, b, ()).unwrap();
/// graph.add_edge(b, c, ()).unwrap();
///
/// let order: Vec<NodeId> = dfs(&graph, a).collect();
/// assert_eq!(order, vec![a, b, c]);
/// ```
pub fn dfs<G: Successors>(graph: &G, start: NodeId) -> Dfs<'_, G> {
    let node_count = graph.node_count();
    if start.index() >= node_count {
        return Dfs {
            graph,
            stack: Vec::new(),
            visited: Vec::new(),
        };
    }

    Dfs {
        graph,
        stack: vec![start],
        visited: vec![false; node_count],
    }
}

/// Breadth-first iterator over graph nodes.
///
/// Performs a breadth-first traversal from a given start node, visiting all
/// nodes at distance `d` before any node at distance `d + 1`. Created by
/// [`bfs`].
pub struct Bfs<'g, G: Successors> {
    graph: &'g G,
    queue: VecDeque<NodeId>,
    visited: Vec<bool>,
}

impl<G: Successors> Iterator for Bfs<'_, G> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;

        for succ in self.graph.successors(node) {
            if !self.visited[succ.index()] {
                self.visited[succ.index()] = true;
                self.queue.push_back(succ);
            }
        }

        Some(node)
    }
}

/// Returns a breadth-first iterator starting from the given node.
///
/// Each node reachable from `start` is yielded exactly once, in order of
/// increasing distance from the start. A `start` that is not a valid node
/// yields nothing.
///
/// # Arguments
///
/// * `graph` - The graph to traverse
/// * `start` - The starting node for traversal
///
/// # Complexity
///
/// O(V + E) time, O(V) space for the visited set and queue.
///
/// # Examples
///
/// ```rust
/// use domscope::graph::{algorithms::bfs, DirectedGraph, NodeId};
///
/// let mut graph: DirectedGraph<&str, ()> = DirectedGraph::new();
/// let a = graph.add_node("A");
/// let b = graph.add_node("B");
/// let c = graph.add_node("C");
/// let d = graph.add_node("D");
/// graph.add_edge(a, b, ()).unwrap();
/// graph.add_edge(a, c, ()).unwrap();
/// graph.add_edge(b, d, ()).unwrap();
///
/// let order: Vec<NodeId> = bfs(&graph, a).collect();
/// assert_eq!(order, vec![a, b, c, d]);
/// ```
pub fn bfs<G: Successors>(graph: &G, start: NodeId) -> Bfs<'_, G> {
    let node_count = graph.node_count();
    if start.index() >= node_count {
        return Bfs {
            graph,
            queue: VecDeque::new(),
            visited: Vec::new(),
        };
    }

    let mut visited = vec![false; node_count];
    visited[start.index()] = true;

    let mut queue = VecDeque::new();
    queue.push_back(start);

    Bfs {
        graph,
        queue,
        visited,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DirectedGraph;

    fn diamond() -> DirectedGraph<&'static str, ()> {
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
    fn test_dfs_preorder() {
        let graph = diamond();
        let order: Vec<NodeId> = dfs(&graph, NodeId::new(0)).collect();
        // A, then the B branch down to D, then C.
        assert_eq!(
            order,
            vec![
                NodeId::new(0),
                NodeId::new(1),
                NodeId::new(3),
                NodeId::new(2)
            ]
        );
    }

    #[test]
    fn test_bfs_levels() {
        let graph = diamond();
        let order: Vec<NodeId> = bfs(&graph, NodeId::new(0)).collect();
        assert_eq!(
            order,
            vec![
                NodeId::new(0),
                NodeId::new(1),
                NodeId::new(2),
                NodeId::new(3)
            ]
        );
    }

    #[test]
    fn test_dfs_prefers_deep_paths_over_pending_siblings() {
        // C is reachable both as a direct sibling of B and through B;
        // preorder must reach it through B first.
        let mut graph: DirectedGraph<(), ()> = DirectedGraph::new();
        let a = graph.add_node(());
        let b = graph.add_node(());
        let c = graph.add_node(());
        let d = graph.add_node(());
        graph.add_edge(a, b, ()).unwrap();
        graph.add_edge(a, c, ()).unwrap();
        graph.add_edge(b, c, ()).unwrap();
        graph.add_edge(b, d, ()).unwrap();

        let order: Vec<NodeId> = dfs(&graph, a).collect();
        assert_eq!(order, vec![a, b, c, d]);
    }

    #[test]
    fn test_traversal_skips_unreachable() {
        let mut graph: DirectedGraph<(), ()> = DirectedGraph::new();
        let a = graph.add_node(());
        let b = graph.add_node(());
        graph.add_node(()); // disconnected
        graph.add_edge(a, b, ()).unwrap();

        assert_eq!(dfs(&graph, a).count(), 2);
        assert_eq!(bfs(&graph, a).count(), 2);
    }

    #[test]
    fn test_traversal_handles_cycles() {
        let mut graph: DirectedGraph<(), ()> = DirectedGraph::new();
        let a = graph.add_node(());
        let b = graph.add_node(());
        let c = graph.add_node(());
        graph.add_edge(a, b, ()).unwrap();
        graph.add_edge(b, c, ()).unwrap();
        graph.add_edge(c, a, ()).unwrap();

        let order: Vec<NodeId> = dfs(&graph, a).collect();
        assert_eq!(order.len(), 3);
    }

    #[test]
    fn test_traversal_invalid_start() {
        let graph: DirectedGraph<(), ()> = DirectedGraph::new();
        assert_eq!(dfs(&graph, NodeId::new(5)).count(), 0);
        assert_eq!(bfs(&graph, NodeId::new(5)).count(), 0);
    }

    #[test]
    fn test_dfs_matches_dominator_numbering() {
        use crate::graph::algorithms::compute_dominators;

        let mut graph: DirectedGraph<u32, ()> = DirectedGraph::new();
        for i in 0..6 {
            graph.add_node(i);
        }
        for &(s, t) in &[(0, 2), (0, 1), (2, 3), (1, 3), (3, 4), (4, 2), (3, 5)] {
            graph
                .add_edge(NodeId::new(s), NodeId::new(t), ())
                .unwrap();
        }

        let tree = compute_dominators(&graph, NodeId::new(0)).unwrap();
        let preorder: Vec<NodeId> = dfs(&graph, NodeId::new(0)).collect();
        assert_eq!(tree.vertices(), preorder.as_slice());
    }
}
