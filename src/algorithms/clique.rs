//! Seeded maximum clique search
//!
//! Bron–Kerbosch enumeration restricted to cliques containing a seed vertex.
//! The search starts from `R = {v}`, `P = N(v)`, `X = ∅`, so it never leaves
//! the closed neighborhood of `v`. Worst case is exponential in `deg(v)`, which
//! is fine for the small, sparse neighborhoods this is meant for.
//!
//! # References
//! - Bron & Kerbosch (1973): "Algorithm 457: Finding All Cliques of an Undirected Graph"
//! - Tomita et al. (2006): "The worst-case time complexity for generating all maximal cliques"

use crate::storage::{UndirectedGraph, Vertex};
use std::collections::BTreeSet;
use tracing::debug;

/// Clique search configuration
///
/// The default configuration is unbounded and matches [`max_clique`].
///
/// # Example
///
/// ```
/// use trueno_clique::{CliqueSearch, UndirectedGraph};
///
/// let graph = UndirectedGraph::from_edge_list(&[(1, 2), (2, 3), (3, 1)]).unwrap();
///
/// let outcome = CliqueSearch::new().with_depth_limit(1).max_clique(&graph, &1);
/// assert!(outcome.truncated);
/// assert_eq!(outcome.clique.len(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CliqueSearch {
    /// Maximum number of vertices added to the seed (None = unbounded)
    pub depth_limit: Option<usize>,
}

/// Result of a configured clique search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliqueOutcome<V: Vertex> {
    /// Largest clique found (always contains the seed)
    pub clique: BTreeSet<V>,

    /// Number of candidate cliques recorded during the search
    pub candidates: usize,

    /// True if the depth limit cut at least one branch short
    pub truncated: bool,
}

impl CliqueSearch {
    /// Create an unbounded search
    #[must_use]
    pub const fn new() -> Self {
        Self { depth_limit: None }
    }

    /// Stop growing a clique once `limit` vertices have been added to the seed
    #[must_use]
    pub const fn with_depth_limit(mut self, limit: usize) -> Self {
        self.depth_limit = Some(limit);
        self
    }

    /// Enumerate candidate cliques containing `seed`
    ///
    /// Returns the candidates in discovery order and whether the depth limit
    /// truncated any branch. Without a limit every candidate is a maximal
    /// clique of the graph.
    #[must_use]
    pub fn maximal_cliques<V: Vertex>(
        &self,
        graph: &UndirectedGraph<V>,
        seed: &V,
    ) -> (Vec<BTreeSet<V>>, bool) {
        let mut search = Search {
            graph,
            depth_limit: self.depth_limit,
            candidates: Vec::new(),
            truncated: false,
        };

        let r = BTreeSet::from([seed.clone()]);
        let p = graph.neighbors(seed).clone();
        search.expand(r, p, BTreeSet::new(), 0);

        (search.candidates, search.truncated)
    }

    /// Find the largest clique containing `seed`
    ///
    /// Ties between equally large cliques go to the lexicographically
    /// smallest set.
    #[must_use]
    pub fn max_clique<V: Vertex>(&self, graph: &UndirectedGraph<V>, seed: &V) -> CliqueOutcome<V> {
        let (candidates, truncated) = self.maximal_cliques(graph, seed);
        let count = candidates.len();

        let clique = candidates
            .into_iter()
            .max_by(|a, b| a.len().cmp(&b.len()).then_with(|| b.cmp(a)))
            .unwrap_or_else(|| BTreeSet::from([seed.clone()]));

        debug!(
            seed = ?seed,
            candidates = count,
            size = clique.len(),
            truncated,
            "seeded clique search finished"
        );

        CliqueOutcome {
            clique,
            candidates: count,
            truncated,
        }
    }
}

/// Per-query search state; R/P/X live on the recursion frames
struct Search<'g, V: Vertex> {
    graph: &'g UndirectedGraph<V>,
    depth_limit: Option<usize>,
    candidates: Vec<BTreeSet<V>>,
    truncated: bool,
}

impl<V: Vertex> Search<'_, V> {
    fn expand(&mut self, r: BTreeSet<V>, mut p: BTreeSet<V>, mut x: BTreeSet<V>, depth: usize) {
        if p.is_empty() && x.is_empty() {
            self.candidates.push(r);
            return;
        }

        if !p.is_empty() && self.depth_limit.is_some_and(|limit| depth >= limit) {
            self.truncated = true;
            self.candidates.push(r);
            return;
        }

        // Snapshot: P shrinks as each candidate moves to X
        let snapshot: Vec<V> = p.iter().cloned().collect();

        for u in snapshot {
            let neighbors = self.graph.neighbors(&u);

            let mut next_r = r.clone();
            next_r.insert(u.clone());
            let next_p = p.intersection(neighbors).cloned().collect();
            let next_x = x.intersection(neighbors).cloned().collect();

            self.expand(next_r, next_p, next_x, depth + 1);

            p.remove(&u);
            x.insert(u);
        }
    }
}

/// Find the largest clique containing `vertex`
///
/// Seeded Bron–Kerbosch over `vertex`'s neighborhood. The result always
/// contains `vertex`; an isolated or unknown vertex yields `{vertex}`. Among
/// several maximum cliques the lexicographically smallest set is returned.
///
/// # Example
///
/// ```
/// use trueno_clique::{max_clique, UndirectedGraph};
///
/// let graph = UndirectedGraph::from_edge_list(&[("A", "B"), ("B", "C"), ("C", "A"), ("C", "D")]).unwrap();
///
/// assert_eq!(max_clique(&graph, &"A").into_iter().collect::<Vec<_>>(), vec!["A", "B", "C"]);
/// assert_eq!(max_clique(&graph, &"D").into_iter().collect::<Vec<_>>(), vec!["C", "D"]);
/// ```
#[must_use]
pub fn max_clique<V: Vertex>(graph: &UndirectedGraph<V>, vertex: &V) -> BTreeSet<V> {
    CliqueSearch::new().max_clique(graph, vertex).clique
}

/// Enumerate every maximal clique containing `vertex`
#[must_use]
pub fn seeded_maximal_cliques<V: Vertex>(graph: &UndirectedGraph<V>, vertex: &V) -> Vec<BTreeSet<V>> {
    CliqueSearch::new().maximal_cliques(graph, vertex).0
}
