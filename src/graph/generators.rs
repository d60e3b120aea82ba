use crate::graph::DirectedGraph;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Generates a random directed graph with `nodes` nodes and roughly
/// `edge_factor * nodes` edges, weights drawn from `0..=max_weight`.
///
/// The same seed always yields the same graph.
pub fn generate_random(
    nodes: usize,
    edge_factor: f64,
    max_weight: u64,
    seed: u64,
) -> DirectedGraph<u64> {
    let mut graph = DirectedGraph::with_nodes(nodes);
    if nodes == 0 {
        return graph;
    }
    let mut rng = StdRng::seed_from_u64(seed);

    let num_edges = (edge_factor * nodes as f64) as usize;
    for _ in 0..num_edges {
        let from = rng.gen_range(1..=nodes);
        let to = rng.gen_range(1..=nodes);
        // Avoid self-loops
        if from != to {
            let weight = rng.gen_range(0..=max_weight);
            // Endpoints are drawn from 1..=nodes
            let _ = graph.add_edge(from, to, weight);
        }
    }

    graph
}

/// Generates a `width` x `height` grid with edges in both directions between
/// horizontal and vertical neighbours. Horizontal moves cost `horizontal`,
/// vertical moves cost `vertical`.
///
/// Node `(x, y)` is `y * width + x + 1`.
pub fn generate_grid(
    width: usize,
    height: usize,
    horizontal: u64,
    vertical: u64,
) -> DirectedGraph<u64> {
    let mut graph = DirectedGraph::with_nodes(width * height);
    let node = |x: usize, y: usize| y * width + x + 1;

    for y in 0..height {
        for x in 0..width {
            let current = node(x, y);
            let mut link = |other: usize, weight: u64| {
                let _ = graph.add_edge(current, other, weight);
            };
            if x > 0 {
                link(node(x - 1, y), horizontal);
            }
            if x + 1 < width {
                link(node(x + 1, y), horizontal);
            }
            if y > 0 {
                link(node(x, y - 1), vertical);
            }
            if y + 1 < height {
                link(node(x, y + 1), vertical);
            }
        }
    }

    graph
}
