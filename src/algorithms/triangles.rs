//! Triangle enumeration around a single vertex
//!
//! A triangle is three mutually adjacent vertices. Queries are rooted: every
//! triangle returned starts with the queried vertex.
//!
//! # References
//! - Schank & Wagner (2005): "Finding, Counting and Listing all Triangles in Large Graphs"

use crate::storage::{UndirectedGraph, Vertex};

/// Rooted triangle `[v, a, b]`
pub type Triangle<V> = [V; 3];

/// Find every triangle containing `vertex`
///
/// For each ordered pair `(a, b)` of distinct neighbors with `a` adjacent to
/// `b`, emits `[vertex, a, b]`. Every triangle is therefore reported twice,
/// once per orientation of its far edge. Use [`unique_triangles`] for one
/// entry per triangle.
///
/// Runs O(deg(v)²) adjacency checks. Unknown or isolated vertices yield an
/// empty list.
///
/// # Example
///
/// ```
/// use trueno_clique::{find_triangles, UndirectedGraph};
///
/// let graph = UndirectedGraph::from_edge_list(&[("A", "B"), ("B", "C"), ("C", "A"), ("C", "D")]).unwrap();
///
/// assert_eq!(find_triangles(&graph, &"A"), vec![["A", "B", "C"], ["A", "C", "B"]]);
/// assert!(find_triangles(&graph, &"D").is_empty());
/// ```
#[must_use]
pub fn find_triangles<V: Vertex>(graph: &UndirectedGraph<V>, vertex: &V) -> Vec<Triangle<V>> {
    let neighbors = graph.neighbors(vertex);
    let mut triangles = Vec::new();

    for a in neighbors {
        for b in neighbors {
            if a != b && graph.has_edge(a, b) {
                triangles.push([vertex.clone(), a.clone(), b.clone()]);
            }
        }
    }

    triangles
}

/// Find every triangle containing `vertex`, each reported once
///
/// Triangles come out as `[vertex, a, b]` with `a < b`.
#[must_use]
pub fn unique_triangles<V: Vertex>(graph: &UndirectedGraph<V>, vertex: &V) -> Vec<Triangle<V>> {
    let neighbors = graph.neighbors(vertex);
    let mut triangles = Vec::new();

    for a in neighbors {
        for b in neighbors.range((std::ops::Bound::Excluded(a), std::ops::Bound::Unbounded)) {
            if graph.has_edge(a, b) {
                triangles.push([vertex.clone(), a.clone(), b.clone()]);
            }
        }
    }

    triangles
}

/// Local triangle count: number of distinct triangles through `vertex`
#[must_use]
pub fn count_triangles<V: Vertex>(graph: &UndirectedGraph<V>, vertex: &V) -> usize {
    let neighbors = graph.neighbors(vertex);

    neighbors
        .iter()
        .map(|a| {
            neighbors
                .range((std::ops::Bound::Excluded(a), std::ops::Bound::Unbounded))
                .filter(|b| graph.has_edge(a, b))
                .count()
        })
        .sum()
}
