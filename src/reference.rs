//! Compiled-in reference network
//!
//! A small computer network: 16 machines labelled with two-letter names and
//! 31 direct links between them. `co`, `de`, `ka` and `ta` are all linked to
//! each other, so their seeded clique has four members; every other machine
//! tops out at a triangle or a single link.

use crate::storage::UndirectedGraph;

/// Number of distinct machines in [`NETWORK_EDGES`]
pub const NETWORK_VERTICES: usize = 16;

/// Links of the reference network
pub const NETWORK_EDGES: [(&str, &str); 31] = [
    ("kh", "tc"),
    ("qp", "kh"),
    ("de", "cg"),
    ("ka", "co"),
    ("yn", "aq"),
    ("qp", "ub"),
    ("cg", "tb"),
    ("vc", "aq"),
    ("tb", "ka"),
    ("wh", "tc"),
    ("yn", "cg"),
    ("kh", "ub"),
    ("ta", "co"),
    ("de", "co"),
    ("tc", "td"),
    ("tb", "wq"),
    ("wh", "td"),
    ("ta", "ka"),
    ("td", "qp"),
    ("aq", "cg"),
    ("wq", "ub"),
    ("ub", "vc"),
    ("de", "ta"),
    ("wq", "aq"),
    ("wq", "vc"),
    ("wh", "yn"),
    ("ka", "de"),
    ("kh", "ta"),
    ("co", "tc"),
    ("wh", "qp"),
    ("tb", "vc"),
];

/// Build the reference network
///
/// # Panics
///
/// Never: [`NETWORK_EDGES`] contains no self-loops.
#[must_use]
#[allow(clippy::expect_used)] // Static data, covered by tests
pub fn network() -> UndirectedGraph<&'static str> {
    UndirectedGraph::from_edge_list(&NETWORK_EDGES).expect("reference network has no self-loops")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{find_triangles, max_clique};
    use std::collections::BTreeSet;

    #[test]
    fn test_network_shape() {
        let graph = network();
        assert_eq!(graph.num_vertices(), NETWORK_VERTICES);
        assert_eq!(graph.num_edges(), NETWORK_EDGES.len());
    }

    #[test]
    fn test_network_has_four_clique() {
        let graph = network();
        let expected: BTreeSet<_> = ["co", "de", "ka", "ta"].into_iter().collect();

        for seed in ["co", "de", "ka", "ta"] {
            assert_eq!(max_clique(&graph, &seed), expected, "seed {seed}");
        }
    }

    #[test]
    fn test_network_triangles_through_co() {
        let graph = network();
        // 3 distinct triangles, each reported in both orientations
        assert_eq!(find_triangles(&graph, &"co").len(), 6);
    }
}
