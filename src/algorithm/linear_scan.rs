use crate::algorithm::search::SearchState;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{Graph, Vertex, Weight};
use crate::Result;

/// Dijkstra's algorithm that picks the next vertex by scanning every unvisited one
///
/// No priority structure at all; each round is a linear search, so it runs
/// in O(V^2). Equal distances are resolved by label, the same order the
/// heap-based strategies use. Useful as a reference for them.
#[derive(Debug, Default, Clone, Copy)]
pub struct LinearScanDijkstra;

impl LinearScanDijkstra {
    const NAME: &'static str = "LinearScanDijkstra";

    /// Creates a new instance
    pub fn new() -> Self {
        LinearScanDijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for LinearScanDijkstra
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn compute_shortest_paths(&self, graph: &G, source: &Vertex) -> Result<ShortestPathResult<W>> {
        let mut state: SearchState<'_, W> = SearchState::start(graph, source)?;
        let mut unvisited: Vec<&Vertex> = graph.vertices().collect();

        loop {
            // Find the unvisited vertex with the smallest (distance, vertex)
            let mut best: Option<(usize, W, &Vertex)> = None;
            for (index, &vertex) in unvisited.iter().enumerate() {
                if let Some(distance) = state.distance(vertex).value() {
                    if best.map_or(true, |(_, min, min_vertex)| (distance, vertex) < (min, min_vertex)) {
                        best = Some((index, distance, vertex));
                    }
                }
            }

            // Everything left is unreachable
            let Some((index, _, _)) = best else {
                break;
            };

            let current = unvisited.swap_remove(index);
            if !state.finalize(current) {
                continue;
            }

            for (neighbor, weight) in graph.neighbors(current) {
                state.relax(current, neighbor, weight);
            }
        }

        Ok(state.finish(Self::NAME))
    }
}
