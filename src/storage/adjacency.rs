//! Undirected adjacency-set graph
//!
//! Every vertex maps to the ordered set of vertices it shares an edge with.
//!
//! ```text
//! Edges: A-B, B-C, C-A, C-D
//!
//! Adjacency:
//!   A: {B, C}
//!   B: {A, C}
//!   C: {A, B, D}
//!   D: {C}
//! ```
//!
//! Sets are `BTreeSet`s so that every query result iterates in a stable order.

use anyhow::Result;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;
use thiserror::Error;
use tracing::debug;

/// Vertex identifier
///
/// Any cloneable, totally ordered value works: string labels, integers,
/// newtypes. Implemented for every such type.
pub trait Vertex: Clone + Ord + Debug {}

impl<T: Clone + Ord + Debug> Vertex for T {}

/// Graph construction errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    /// An edge joined a vertex to itself
    #[error("self-loop on vertex {0}: edges must join two distinct vertices")]
    SelfLoop(String),
}

/// Simple undirected graph built once from an edge list
///
/// Invariants:
/// - adjacency is symmetric (`b ∈ N(a)` iff `a ∈ N(b)`)
/// - no vertex is adjacent to itself
/// - the vertex set is exactly the set of edge endpoints
///
/// # Example
///
/// ```
/// use trueno_clique::UndirectedGraph;
///
/// let graph = UndirectedGraph::from_edge_list(&[("A", "B"), ("B", "C"), ("C", "A")]).unwrap();
///
/// assert_eq!(graph.num_vertices(), 3);
/// assert_eq!(graph.num_edges(), 3);
/// assert!(graph.neighbors(&"A").contains(&"B"));
/// assert!(graph.neighbors(&"Z").is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct UndirectedGraph<V: Vertex> {
    /// Vertex -> adjacent vertices
    adjacency: BTreeMap<V, BTreeSet<V>>,

    /// Returned for vertices with no recorded edges
    empty: BTreeSet<V>,

    /// Number of distinct undirected edges
    num_edges: usize,
}

impl<V: Vertex> UndirectedGraph<V> {
    /// Create new empty graph
    #[must_use]
    pub const fn new() -> Self {
        Self {
            adjacency: BTreeMap::new(),
            empty: BTreeSet::new(),
            num_edges: 0,
        }
    }

    /// Create graph from edge list
    ///
    /// Duplicate edges, in either orientation, collapse into one relation.
    ///
    /// # Arguments
    ///
    /// * `edges` - List of (endpoint, endpoint) pairs
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::SelfLoop`] if an edge joins a vertex to itself
    pub fn from_edge_list(edges: &[(V, V)]) -> Result<Self> {
        let mut graph = Self::new();

        for (a, b) in edges {
            graph.insert_edge(a, b)?;
        }

        debug!(
            vertices = graph.num_vertices(),
            edges = graph.num_edges,
            input_edges = edges.len(),
            "built undirected graph"
        );

        Ok(graph)
    }

    fn insert_edge(&mut self, a: &V, b: &V) -> Result<()> {
        if a == b {
            return Err(GraphError::SelfLoop(format!("{a:?}")).into());
        }

        let inserted = self.adjacency.entry(a.clone()).or_default().insert(b.clone());
        self.adjacency.entry(b.clone()).or_default().insert(a.clone());

        if inserted {
            self.num_edges += 1;
        }

        Ok(())
    }

    /// Get the vertices adjacent to `vertex`
    ///
    /// Unknown vertices have no neighbors; this never fails.
    #[must_use]
    pub fn neighbors(&self, vertex: &V) -> &BTreeSet<V> {
        self.adjacency.get(vertex).unwrap_or(&self.empty)
    }

    /// Check whether `vertex` is an endpoint of some edge
    #[must_use]
    pub fn contains(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Number of neighbors of `vertex` (0 if unknown)
    #[must_use]
    pub fn degree(&self, vertex: &V) -> usize {
        self.neighbors(vertex).len()
    }

    /// Check whether `a` and `b` share an edge
    #[must_use]
    pub fn has_edge(&self, a: &V, b: &V) -> bool {
        self.neighbors(a).contains(b)
    }

    /// Check whether every pair of `vertices` is adjacent
    ///
    /// Sets of zero or one vertex are trivially cliques.
    pub fn is_clique<'a>(&self, vertices: impl IntoIterator<Item = &'a V>) -> bool
    where
        V: 'a,
    {
        let members: Vec<&V> = vertices.into_iter().collect();

        members.iter().enumerate().all(|(i, a)| {
            members[i + 1..]
                .iter()
                .all(|b| a == b || self.has_edge(a, b))
        })
    }

    /// Iterate over vertices in ascending order
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.adjacency.keys()
    }

    /// Iterate over edges, each reported once as `(smaller, larger)`
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V)> + '_ {
        self.adjacency.iter().flat_map(|(a, neighbors)| {
            neighbors
                .range((std::ops::Bound::Excluded(a), std::ops::Bound::Unbounded))
                .map(move |b| (a, b))
        })
    }

    /// Get number of vertices
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.adjacency.len()
    }

    /// Get number of distinct undirected edges
    #[must_use]
    pub const fn num_edges(&self) -> usize {
        self.num_edges
    }
}

impl<V: Vertex> Default for UndirectedGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> UndirectedGraph<&'static str> {
        UndirectedGraph::from_edge_list(&[("A", "B"), ("B", "C"), ("C", "A"), ("C", "D")]).unwrap()
    }

    #[test]
    fn test_empty_graph() {
        let graph: UndirectedGraph<u32> = UndirectedGraph::new();
        assert_eq!(graph.num_vertices(), 0);
        assert_eq!(graph.num_edges(), 0);
        assert!(graph.neighbors(&0).is_empty());
    }

    #[test]
    fn test_from_empty_edge_list() {
        let graph: UndirectedGraph<u32> = UndirectedGraph::from_edge_list(&[]).unwrap();
        assert_eq!(graph.num_vertices(), 0);
        assert_eq!(graph.edges().count(), 0);
    }

    #[test]
    fn test_neighbors_fixture() {
        let graph = fixture();

        let expected: BTreeSet<_> = ["B", "C"].into_iter().collect();
        assert_eq!(graph.neighbors(&"A"), &expected);

        let expected: BTreeSet<_> = ["A", "B", "D"].into_iter().collect();
        assert_eq!(graph.neighbors(&"C"), &expected);
    }

    #[test]
    fn test_neighbors_unknown_vertex() {
        let graph = fixture();
        assert!(graph.neighbors(&"Q").is_empty());
        assert_eq!(graph.degree(&"Q"), 0);
        assert!(!graph.contains(&"Q"));
    }

    #[test]
    fn test_adjacency_is_symmetric() {
        let graph = fixture();

        for a in graph.vertices() {
            for b in graph.neighbors(a) {
                assert!(graph.neighbors(b).contains(a), "{a} -> {b} has no reverse");
            }
        }
    }

    #[test]
    fn test_duplicate_edges_collapse() {
        let graph =
            UndirectedGraph::from_edge_list(&[("A", "B"), ("B", "A"), ("A", "B")]).unwrap();

        assert_eq!(graph.num_vertices(), 2);
        assert_eq!(graph.num_edges(), 1);
        assert_eq!(graph.degree(&"A"), 1);
        assert_eq!(graph.degree(&"B"), 1);
    }

    #[test]
    fn test_self_loop_rejected() {
        let err = UndirectedGraph::from_edge_list(&[("A", "B"), ("C", "C")]).unwrap_err();

        assert_eq!(
            err.downcast_ref::<GraphError>(),
            Some(&GraphError::SelfLoop("\"C\"".to_string()))
        );
    }

    #[test]
    fn test_edges_reported_once() {
        let graph = fixture();
        let edges: Vec<_> = graph.edges().map(|(a, b)| (*a, *b)).collect();

        assert_eq!(edges, vec![("A", "B"), ("A", "C"), ("B", "C"), ("C", "D")]);
        assert_eq!(graph.num_edges(), edges.len());
    }

    #[test]
    fn test_vertices_sorted() {
        let graph = UndirectedGraph::from_edge_list(&[(3, 1), (2, 3)]).unwrap();
        let vertices: Vec<_> = graph.vertices().copied().collect();
        assert_eq!(vertices, vec![1, 2, 3]);
    }

    #[test]
    fn test_has_edge() {
        let graph = fixture();
        assert!(graph.has_edge(&"A", &"B"));
        assert!(graph.has_edge(&"B", &"A"));
        assert!(!graph.has_edge(&"A", &"D"));
        assert!(!graph.has_edge(&"A", &"A"));
    }

    #[test]
    fn test_is_clique() {
        let graph = fixture();
        assert!(graph.is_clique(&["A", "B", "C"]));
        assert!(graph.is_clique(&["C", "D"]));
        assert!(graph.is_clique(&["D"]));
        assert!(graph.is_clique(&[]));
        assert!(!graph.is_clique(&["A", "B", "C", "D"]));
        assert!(!graph.is_clique(&["A", "D"]));
    }
}
