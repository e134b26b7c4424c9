// Copyright 2025-2026 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]

//! # domscope
//!
//! [![Crates.io](https://img.shields.io/crates/v/domscope.svg)](https://crates.io/crates/domscope)
//! [![Documentation](https://docs.rs/domscope/badge.svg)](https://docs.rs/domscope)
//! [![License](https://img.shields.io/badge/license-Apache--2.0-blue.svg)](https://github.com/BinFlip/domscope/blob/main/LICENSE-APACHE)
//!
//! Dominator analysis for directed control-flow graphs. Given a graph and a
//! designated entry vertex, `domscope` computes the immediate dominator of
//! every reachable vertex with the Lengauer-Tarjan algorithm and exposes the
//! derived dominator tree together with dominance queries.
//!
//! # Architecture
//!
//! The library is organized into a small number of modules that work together:
//!
//! - **Graph Layer**: Adjacency-list [`graph::DirectedGraph`] with typed
//!   [`graph::NodeId`]/[`graph::EdgeId`] identifiers, plus
//!   [`graph::IndexedGraph`] for graphs keyed by arbitrary hashable vertex
//!   identities
//! - **Trait Seam**: [`graph::Successors`] and friends, so the analysis can
//!   run over foreign CFG representations without conversion
//! - **Analysis Layer**: [`graph::algorithms::compute_dominators`] and the
//!   [`graph::algorithms::DominatorTree`] it produces
//! - **Visualization**: DOT (Graphviz) rendering of graphs and dominator
//!   trees in [`graph::dot`]
//!
//! ## Key Components
//!
//! - [`graph::algorithms::compute_dominators`] - Main entry point for the analysis
//! - [`graph::algorithms::DominatorTree`] - Dominance queries over the result
//! - [`crate::prelude`] - Convenient re-exports of commonly used types
//! - [`crate::Error`] and [`crate::Result`] - Error handling
//!
//! # Algorithm
//!
//! The analysis is the "simple" variant of Lengauer and Tarjan's 1979
//! algorithm: depth-first numbering, semi-dominator computation over a
//! path-compressed link-eval forest, and a final fix-up pass, with the
//! bucket-processing reordering due to Georgiadis, Tarjan and Werneck. It
//! runs in near-linear time on arbitrary flow graphs, reducible or not, and
//! both of its recursions are converted to explicit stacks so degenerate
//! inputs cannot overflow the native stack.
//!
//! # Usage Examples
//!
//! ## Quick Start
//!
//! Add `domscope` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! domscope = "0.2.0"
//! ```
//!
//! ### Using the Prelude
//!
//! ```rust
//! use domscope::prelude::*;
//!
//! // Build a CFG with a loop: entry -> header -> body -> header, header -> exit
//! let mut cfg: DirectedGraph<&str, ()> = DirectedGraph::new();
//! let entry = cfg.add_node("entry");
//! let header = cfg.add_node("header");
//! let body = cfg.add_node("body");
//! let exit = cfg.add_node("exit");
//!
//! cfg.add_edge(entry, header, ())?;
//! cfg.add_edge(header, body, ())?;
//! cfg.add_edge(body, header, ())?;
//! cfg.add_edge(header, exit, ())?;
//!
//! let tree = compute_dominators(&cfg, entry)?;
//!
//! // The loop header dominates both the body and the exit.
//! assert!(tree.dominates(header, body));
//! assert!(tree.dominates(header, exit));
//! // The back edge does not make the body dominate the header.
//! assert!(!tree.strictly_dominates(body, header));
//! # Ok::<(), domscope::Error>(())
//! ```
//!
//! ### Domain-Keyed Vertices
//!
//! Any `Hash + Eq + Clone` type can serve as the vertex identity through
//! [`graph::IndexedGraph`]:
//!
//! ```rust
//! use domscope::graph::IndexedGraph;
//!
//! let mut cfg: IndexedGraph<&str, ()> = IndexedGraph::new();
//! cfg.add_edge("A", "B", ())?;
//! cfg.add_edge("A", "C", ())?;
//! cfg.add_edge("B", "D", ())?;
//! cfg.add_edge("C", "D", ())?;
//!
//! let tree = cfg.compute_dominators_from(&"A")?;
//! let d = cfg.get_node_id(&"D").unwrap();
//!
//! // Strict dominators, entry first.
//! assert_eq!(cfg.map_nodes_to_keys(&tree.dominators_of(d)), vec!["A"]);
//! # Ok::<(), domscope::Error>(())
//! ```
//!
//! ### Foreign Graph Types
//!
//! The analysis only requires successor enumeration. Implement
//! [`graph::Successors`] (and optionally [`graph::RootedGraph`]) for your
//! own CFG type and pass it directly; see the trait documentation for an
//! example.
//!
//! # Error Handling
//!
//! Construction-time misuse returns [`Result<T, Error>`](Result):
//!
//! ```rust
//! use domscope::{graph::{algorithms::compute_dominators, DirectedGraph, NodeId}, Error};
//!
//! let empty: DirectedGraph<(), ()> = DirectedGraph::new();
//! assert!(matches!(
//!     compute_dominators(&empty, NodeId::new(0)),
//!     Err(Error::EmptyGraph)
//! ));
//! ```
//!
//! Queries against a finished [`graph::algorithms::DominatorTree`] panic when
//! given a vertex the analysis never reached; that is a caller bug, kept
//! distinct from a negative answer.
//!
//! # Scope
//!
//! `domscope` computes dominators and answers dominance queries. It does not
//! compute post-dominators, dominance frontiers, loops, or SSA form, and it
//! has no incremental update protocol: re-run the analysis after changing
//! the graph.
//!
//! # Thread Safety
//!
//! All public types are [`std::marker::Send`] and [`std::marker::Sync`] when
//! their generic parameters are. Graphs and dominator trees are immutable
//! after construction and safe to share across threads.

pub(crate) mod error;

/// Convenient re-exports of the most commonly used types and traits.
///
/// This module provides a curated selection of the most frequently used
/// types from across the domscope library, allowing for convenient glob
/// imports.
///
/// # Usage Examples
///
/// ```rust
/// use domscope::prelude::*;
///
/// let mut graph: DirectedGraph<(), ()> = DirectedGraph::new();
/// let entry = graph.add_node(());
/// let tree = compute_dominators(&graph, entry)?;
/// assert_eq!(tree.entry(), entry);
/// # Ok::<(), domscope::Error>(())
/// ```
pub mod prelude;

/// Graph types, capability traits, and the dominator analysis.
///
/// This is the heart of the crate: the [`graph::DirectedGraph`] and
/// [`graph::IndexedGraph`] containers, the [`graph::Successors`] trait seam
/// for foreign CFG types, and the [`graph::algorithms`] module with the
/// Lengauer-Tarjan dominator computation and traversal utilities.
pub mod graph;

pub use error::{Error, Result};
