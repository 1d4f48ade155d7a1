use crate::graph::{DirectedGraph, MutableGraph};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

/// Cost of a horizontal or vertical grid move
pub const CARDINAL_COST: i64 = 10;

/// Cost of a diagonal grid move
pub const DIAGONAL_COST: i64 = 14;

/// Label used for vertex number `index` in generated graphs
pub fn vertex_label(index: usize) -> String {
    index.to_string()
}

/// Label used for the grid cell at column `x`, row `y`
pub fn grid_label(x: usize, y: usize) -> String {
    format!("{}:{}", x, y)
}

/// Generates a random directed graph with `n` vertices and up to `m` distinct edges
///
/// Weights are drawn uniformly from `1..=max_weight`. The same seed always yields
/// the same graph, so failures in differential tests can be replayed.
pub fn generate_random(n: usize, m: usize, max_weight: i64, seed: u64) -> DirectedGraph<i64> {
    assert!(max_weight > 0, "max_weight must be positive");

    let mut graph = DirectedGraph::new();
    let mut rng = StdRng::seed_from_u64(seed);

    for i in 0..n {
        graph.add_vertex(vertex_label(i));
    }
    if n < 2 {
        return graph;
    }

    // Cap at the number of distinct non-loop pairs
    let target_edges = m.min(n * (n - 1));
    let mut added = HashSet::with_capacity(target_edges);

    while added.len() < target_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v && added.insert((u, v)) {
            let weight = rng.gen_range(1..=max_weight);
            graph.add_edge(vertex_label(u), vertex_label(v), weight);
        }
    }

    graph
}

/// Generates a width x height grid with 8-connectivity
///
/// Cells listed in `blocked` get a vertex but no edges in or out, so they act
/// as obstacles.
pub fn generate_grid(width: usize, height: usize, blocked: &HashSet<(usize, usize)>) -> DirectedGraph<i64> {
    let mut graph = DirectedGraph::new();

    for y in 0..height {
        for x in 0..width {
            graph.add_vertex(grid_label(x, y));
        }
    }

    let directions: [(isize, isize, i64); 8] = [
        // Cardinal directions (N, E, S, W)
        (0, -1, CARDINAL_COST), (1, 0, CARDINAL_COST), (0, 1, CARDINAL_COST), (-1, 0, CARDINAL_COST),
        // Diagonal directions (NE, SE, SW, NW)
        (1, -1, DIAGONAL_COST), (1, 1, DIAGONAL_COST), (-1, 1, DIAGONAL_COST), (-1, -1, DIAGONAL_COST),
    ];

    for y in 0..height {
        for x in 0..width {
            if blocked.contains(&(x, y)) {
                continue;
            }
            for &(dx, dy, cost) in &directions {
                let nx = x as isize + dx;
                let ny = y as isize + dy;
                if nx < 0 || ny < 0 || nx >= width as isize || ny >= height as isize {
                    continue;
                }
                let (nx, ny) = (nx as usize, ny as usize);
                if !blocked.contains(&(nx, ny)) {
                    graph.add_edge(grid_label(x, y), grid_label(nx, ny), cost);
                }
            }
        }
    }

    graph
}
