//! DOT format utilities for graph visualization.
//!
//! This module provides utilities for generating DOT format output,
//! which can be rendered using Graphviz tools. The dominator tree has its
//! own renderer ([`DominatorTree::to_dot`](crate::graph::algorithms::DominatorTree::to_dot));
//! the helpers here serve any graph whose node data implements [`std::fmt::Display`].

use std::fmt::Display;

use crate::graph::DirectedGraph;

/// Escapes a string for safe use in DOT format labels and identifiers.
///
/// This function handles all characters that have special meaning in DOT
/// format, including quotes, backslashes, newlines, and angle brackets.
///
/// # Arguments
///
/// * `s` - The string to escape
///
/// # Returns
///
/// A new string with all special characters properly escaped.
///
/// # Examples
///
/// ```rust
/// use domscope::graph::dot::escape_dot;
///
/// let escaped = escape_dot("Block<T>");
/// assert_eq!(escaped, "Block\\<T\\>");
/// ```
#[must_use]
pub fn escape_dot(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "")
        .replace('<', "\\<")
        .replace('>', "\\>")
}

/// Renders a [`DirectedGraph`] in DOT format.
///
/// Nodes are labeled with the display form of their data and identified by
/// their raw node index; one edge line is emitted per graph edge, in
/// insertion order.
///
/// # Arguments
///
/// * `graph` - The graph to render
/// * `name` - The name of the emitted digraph
///
/// # Examples
///
/// ```rust
/// use domscope::graph::{dot::graph_to_dot, DirectedGraph};
///
/// let mut graph: DirectedGraph<&str, ()> = DirectedGraph::new();
/// let a = graph.add_node("entry");
/// let b = graph.add_node("exit");
/// graph.add_edge(a, b, ()).unwrap();
///
/// let dot = graph_to_dot(&graph, "cfg");
/// assert!(dot.contains("digraph cfg {"));
/// assert!(dot.contains("0 -> 1;"));
/// ```
#[must_use]
pub fn graph_to_dot<N: Display, E>(graph: &DirectedGraph<N, E>, name: &str) -> String {
    let mut out = format!("digraph {} {{\n", escape_dot(name));
    for (id, data) in graph.nodes() {
        out.push_str(&format!(
            "    {} [label=\"{}\"];\n",
            id.index(),
            escape_dot(&data.to_string())
        ));
    }
    for edge in graph.edge_ids() {
        if let Some((source, target)) = graph.edge_endpoints(edge) {
            out.push_str(&format!("    {} -> {};\n", source.index(), target.index()));
        }
    }
    out.push('}');
    out.push('\n');
    out
}
