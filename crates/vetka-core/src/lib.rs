//! # Vetka Core
//!
//! Generic in-memory graph container with incremental DAG enforcement.
//!
//! A [`Graph`] stores vertices and directed adjacency edges behind
//! caller-supplied identity and payload types. Graphs built with
//! [`GraphKind::Dag`] reject, at insertion time, any edge that would create a
//! cycle and roll the tentative edge back, so the container is never
//! observably cyclic between operations. Depth-first traversal ([`dfs`]) and
//! cycle detection ([`is_cyclic`]) run over the same adjacency contract using
//! explicit stacks, so deep graphs cannot exhaust the call stack.
//!
//! ## Quick Start
//!
//! ```rust
//! use vetka_core::{dfs, Error, Graph, GraphKind};
//!
//! let mut graph = Graph::new(GraphKind::Dag);
//! graph.add_vertex(1)?;
//! graph.add_vertex(2)?;
//! graph.add_vertex(3)?;
//! graph.add_edge(&1, &2, "a", true)?;
//! graph.add_edge(&2, &3, "b", true)?;
//!
//! // Closing the loop would create a cycle; the edge is rolled back.
//! assert_eq!(graph.add_edge(&3, &1, "c", true), Err(Error::CycleViolation));
//! assert_eq!(graph.num_edges(), 2);
//!
//! let order: Vec<i32> = dfs(&graph, &1)?.copied().collect();
//! assert_eq!(order, vec![1, 2, 3]);
//! # Ok::<(), vetka_core::Error>(())
//! ```
//!
//! ## Concurrency
//!
//! The container is single-threaded by design: no internal locking is
//! provided, and callers sharing a graph across threads must impose external
//! mutual exclusion around any sequence that includes a mutation.

#![warn(missing_docs)]

pub mod error;
pub mod graph;

pub use error::{Error, Result};
pub use graph::{dfs, is_cyclic, Dfs, Graph, GraphKind};
