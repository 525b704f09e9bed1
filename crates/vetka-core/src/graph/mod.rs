//! In-memory graph container and its embedded algorithms.
//!
//! Provides the adjacency-list [`Graph`] store plus the two algorithms tied
//! to its iteration contract: pre-order depth-first traversal ([`dfs`]) and
//! directed cycle detection ([`is_cyclic`]). Cycle detection also runs
//! synchronously inside DAG edge insertion, which keeps the acyclicity
//! invariant incremental rather than re-derived from scratch by callers.
//!
//! # Example
//!
//! ```rust
//! use vetka_core::{Graph, GraphKind};
//!
//! let mut graph = Graph::new(GraphKind::General);
//! graph.add_vertex("amber").unwrap();
//! graph.add_vertex("birch").unwrap();
//!
//! // An undirected edge is a pair of directed entries, inserted atomically.
//! graph.add_edge_with_direction(&"amber", &"birch", 7u32, false, false).unwrap();
//! assert!(graph.has_edge(&"amber", &"birch"));
//! assert!(graph.has_edge(&"birch", &"amber"));
//! assert_eq!(graph.num_edges(), 2);
//! ```

mod cycle;
mod store;
mod traversal;


pub use cycle::is_cyclic;
pub use store::{Graph, GraphKind};
pub use traversal::{dfs, Dfs};
