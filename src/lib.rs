//! trueno-clique: seeded clique analysis for small undirected networks
//!
//! # Overview
//!
//! trueno-clique answers per-vertex structural questions about a small,
//! immutable, undirected graph: who are my neighbors, which triangles am I
//! part of, and what is the largest group of mutually connected vertices
//! that includes me.
//!
//! # Quick Start
//!
//! ```
//! use trueno_clique::{find_triangles, max_clique, UndirectedGraph};
//!
//! // Build graph from edge list
//! let graph = UndirectedGraph::from_edge_list(&[("A", "B"), ("B", "C"), ("C", "A"), ("C", "D")])?;
//!
//! // Neighbor lookup never fails; unknown vertices have no neighbors
//! assert_eq!(graph.neighbors(&"A").len(), 2);
//!
//! // Rooted triangles, reported once per orientation
//! assert_eq!(find_triangles(&graph, &"A").len(), 2);
//!
//! // Largest clique containing the seed
//! assert_eq!(max_clique(&graph, &"A").len(), 3);
//! # Ok::<(), trueno_clique::Error>(())
//! ```
//!
//! # Architecture
//!
//! - **Storage**: ordered adjacency sets (`BTreeMap<V, BTreeSet<V>>`), built once
//! - **Algorithms**: rooted triangle enumeration, seeded Bron–Kerbosch
//! - **Reference data**: compiled-in 16-vertex network (`reference` feature)
//!
//! The graph is never mutated after construction, so it can be shared across
//! threads and queried concurrently without locking.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod algorithms;
pub mod storage;

#[cfg(feature = "reference")]
pub mod reference;

// Re-export core types
pub use algorithms::{
    count_triangles, find_triangles, max_clique, seeded_maximal_cliques, unique_triangles,
    CliqueOutcome, CliqueSearch, Triangle,
};
pub use storage::{GraphError, UndirectedGraph, Vertex};

// Error type
pub use anyhow::{Error, Result};
