//! Graph storage layer
//!
//! Provides the immutable undirected adjacency-set graph the queries run on.

pub mod adjacency;

pub use adjacency::{GraphError, UndirectedGraph, Vertex};
