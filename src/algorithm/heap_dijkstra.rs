use crate::algorithm::search::SearchState;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::IndexedMinHeap;
use crate::graph::{Graph, Vertex, Weight};
use crate::Result;

/// Dijkstra's algorithm driven by an indexed min-heap with decrease-key
///
/// Each vertex is queued at most once and its key is lowered in place when a
/// shorter path is found. Keys are `(distance, vertex)` so equal distances pop
/// in label order. Runs in O((V + E) log V).
#[derive(Debug, Default, Clone, Copy)]
pub struct IndexedHeapDijkstra;

impl IndexedHeapDijkstra {
    const NAME: &'static str = "IndexedHeapDijkstra";

    /// Creates a new instance
    pub fn new() -> Self {
        IndexedHeapDijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for IndexedHeapDijkstra
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn compute_shortest_paths(&self, graph: &G, source: &Vertex) -> Result<ShortestPathResult<W>> {
        let mut state: SearchState<'_, W> = SearchState::start(graph, source)?;

        let mut heap = IndexedMinHeap::with_capacity(graph.vertex_count());
        heap.insert(state.source(), (W::zero(), state.source()));

        while let Some(current) = heap.extract_min() {
            if !state.finalize(current) {
                continue;
            }

            for (neighbor, weight) in graph.neighbors(current) {
                if let Some(distance) = state.relax(current, neighbor, weight) {
                    // First discovery inserts, later improvements lower the key
                    heap.decrease_key(neighbor, (distance, neighbor));
                }
            }
        }

        Ok(state.finish(Self::NAME))
    }
}
