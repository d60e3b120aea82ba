use std::time::Duration;

use dial_sssp::graph::generators::generate_random;
use dial_sssp::graph::{DirectedGraph, Graph};
use dial_sssp::Strategy;

// Runs one strategy and reports the reachable count
fn benchmark_strategy(
    strategy: Strategy,
    graph: &DirectedGraph<u64>,
    source: usize,
) -> Option<Duration> {
    println!("Running {} on graph with {} nodes...", strategy, graph.node_count());

    match strategy.run_timed::<u64, _>(graph, source) {
        Ok((labels, duration)) => {
            println!("  - Found {} reachable nodes in {:?}", labels.reached_count(), duration);
            Some(duration)
        }
        Err(err) => {
            eprintln!("  - {} failed: {}", strategy, err);
            None
        }
    }
}

fn main() {
    env_logger::init();

    let graph_sizes = [1_000, 5_000, 10_000, 20_000];

    // Average number of edges per node
    let edge_factor = 4.0;
    let max_weight = 100;

    println!("=====================================================");
    println!("Benchmark: Dial vs Dijkstra vs ArrayScan");
    println!("Edge factor: {} edges per node, weights 0..={}", edge_factor, max_weight);
    println!("=====================================================");

    let mut results = Vec::new();

    for (seed, &size) in graph_sizes.iter().enumerate() {
        println!("\nGenerating random graph with {} nodes...", size);
        let graph = generate_random(size, edge_factor, max_weight, seed as u64);
        println!("Graph has {} nodes and {} edges", graph.node_count(), graph.edge_count());

        let times: Vec<Option<Duration>> = Strategy::ALL
            .iter()
            .map(|&strategy| benchmark_strategy(strategy, &graph, 1))
            .collect();
        results.push((size, times));
    }

    println!("\n=====================================================");
    println!("Summary of Results (ms)");
    println!("=====================================================");
    println!("{:<10} | {:<12} | {:<12} | {:<12}", "Nodes", "Dial", "Dijkstra", "ArrayScan");
    println!("-----------------------------------------------------");

    for (size, times) in &results {
        let cells: Vec<String> = times
            .iter()
            .map(|t| {
                t.map_or_else(
                    || "failed".to_string(),
                    |d| format!("{:.3}", d.as_secs_f64() * 1000.0),
                )
            })
            .collect();
        println!("{:<10} | {:<12} | {:<12} | {:<12}", size, cells[0], cells[1], cells[2]);
    }
}
