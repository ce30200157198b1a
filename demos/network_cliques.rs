//! Walk the reference network and report each machine's triangles and clique
//!
//! Run with: cargo run --example network_cliques
//! Set `RUST_LOG=trueno_clique=debug` to see search diagnostics.

use tracing_subscriber::EnvFilter;
use trueno_clique::{count_triangles, find_triangles, max_clique, reference};

fn main() -> trueno_clique::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Building reference network...");
    let graph = reference::network();
    println!(
        "  Graph built: {} vertices, {} edges\n",
        graph.num_vertices(),
        graph.num_edges()
    );

    for v in graph.vertices() {
        let neighbors: Vec<_> = graph.neighbors(v).iter().copied().collect();
        let clique: Vec<_> = max_clique(&graph, v).into_iter().collect();

        println!("{v}: neighbors {}", neighbors.join(","));
        println!(
            "    triangles: {} distinct ({} rooted)",
            count_triangles(&graph, v),
            find_triangles(&graph, v).len()
        );
        println!("    largest clique: {} ({})", clique.join(","), clique.len());
    }

    let largest = graph
        .vertices()
        .map(|v| max_clique(&graph, v))
        .max_by_key(std::collections::BTreeSet::len);

    if let Some(clique) = largest {
        let members: Vec<_> = clique.into_iter().collect();
        println!("\nLargest clique in the network: {}", members.join(","));
    }

    Ok(())
}
