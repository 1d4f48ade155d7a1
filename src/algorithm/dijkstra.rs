use log::debug;

use crate::algorithm::search::SearchState;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::LazyPriorityQueue;
use crate::graph::{Graph, Vertex, Weight};
use crate::Result;

/// Dijkstra's algorithm over a plain priority queue with lazy deletion
///
/// Every improvement pushes a new entry, so a vertex can be queued several
/// times; entries for vertices that are already finalized are discarded when
/// popped. Entries order by `(distance, vertex)`. Runs in O((V + E) log E).
#[derive(Debug, Default, Clone, Copy)]
pub struct PriorityQueueDijkstra;

impl PriorityQueueDijkstra {
    const NAME: &'static str = "PriorityQueueDijkstra";

    /// Creates a new instance
    pub fn new() -> Self {
        PriorityQueueDijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for PriorityQueueDijkstra
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn compute_shortest_paths(&self, graph: &G, source: &Vertex) -> Result<ShortestPathResult<W>> {
        let mut state: SearchState<'_, W> = SearchState::start(graph, source)?;

        // Initialize priority queue
        let mut queue = LazyPriorityQueue::new();
        queue.push(state.source(), W::zero());

        // Main Dijkstra loop
        while let Some((current, _)) = queue.pop_fresh(|vertex| !state.is_finalized(vertex)) {
            state.finalize(current);

            // Relax all outgoing edges
            for (neighbor, weight) in graph.neighbors(current) {
                if let Some(distance) = state.relax(current, neighbor, weight) {
                    queue.push(neighbor, distance);
                }
            }
        }

        debug!("{}: discarded {} stale queue entries", Self::NAME, queue.discarded());
        Ok(state.finish(Self::NAME))
    }
}
