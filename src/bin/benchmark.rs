use std::time::{Duration, Instant};

use labeled_sssp::graph::generators::{generate_random, vertex_label};
use labeled_sssp::{DirectedGraph, Graph, ShortestPathResult, Strategy, Vertex};

// Function to benchmark a strategy on a graph
fn benchmark_strategy(
    strategy: Strategy,
    graph: &DirectedGraph<i64>,
    source: &Vertex,
) -> (Duration, ShortestPathResult<i64>) {
    println!("Running {} on graph with {} vertices...", strategy, graph.vertex_count());

    let start = Instant::now();
    let result = strategy
        .run(graph, source)
        .expect("source vertex is part of the generated graph");
    let duration = start.elapsed();

    println!("  - Found {} reachable vertices in {:?}", result.reachable_count(), duration);

    (duration, result)
}

fn main() {
    env_logger::init();

    // The linear scan is quadratic, so sizes stay moderate
    let graph_sizes = vec![1_000, 5_000, 10_000, 20_000];

    // Edge factor: average number of edges per vertex
    let edge_factor = 4;

    println!("=====================================================");
    println!("Benchmark: indexed heap vs priority queue vs linear scan");
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} vertices...", size);
        let graph = generate_random(size, size * edge_factor, 100, size as u64);
        let source = Vertex::from(vertex_label(0));

        let runs: Vec<(Duration, ShortestPathResult<i64>)> = Strategy::ALL
            .iter()
            .map(|&strategy| benchmark_strategy(strategy, &graph, &source))
            .collect();

        // Every strategy must agree on every distance
        let reference = &runs[0].1;
        for (strategy, (_, result)) in Strategy::ALL.iter().zip(&runs).skip(1) {
            let mismatches = graph
                .vertices()
                .filter(|v| result.distance(v) != reference.distance(v))
                .count();
            if mismatches > 0 {
                println!("  ! {} disagrees with {} on {} vertices", strategy, Strategy::ALL[0], mismatches);
            }
        }

        results.push((size, runs[0].0, runs[1].0, runs[2].0));
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<10} | {:<15} | {:<15} | {:<15}",
        "Vertices", "Heap (ms)", "Queue (ms)", "Scan (ms)"
    );
    println!("-----------------------------------------------------");

    for (size, heap_time, queue_time, scan_time) in &results {
        println!(
            "{:<10} | {:<15} | {:<15} | {:<15}",
            size,
            heap_time.as_millis(),
            queue_time.as_millis(),
            scan_time.as_millis()
        );
    }
}
