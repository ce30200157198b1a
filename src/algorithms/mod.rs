//! Graph algorithms (triangle enumeration, seeded clique search)
//!
//! All queries are read-only, keyed by a single vertex, and total: unknown
//! vertices produce empty or singleton results rather than errors.

pub mod clique;
pub mod triangles;

pub use clique::{max_clique, seeded_maximal_cliques, CliqueOutcome, CliqueSearch};
pub use triangles::{count_triangles, find_triangles, unique_triangles, Triangle};
