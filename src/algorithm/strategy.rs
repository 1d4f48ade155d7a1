use std::fmt;
use std::str::FromStr;

use crate::algorithm::{
    IndexedHeapDijkstra, LinearScanDijkstra, PriorityQueueDijkstra, ShortestPathAlgorithm,
    ShortestPathResult,
};
use crate::graph::{Graph, Vertex, Weight};
use crate::{Error, Result};

/// Caller-selected vertex selection mechanic
///
/// All variants produce the same distances; they differ only in cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Indexed binary heap with decrease-key
    #[default]
    IndexedHeap,
    /// Priority queue with duplicate entries and lazy deletion
    PriorityQueue,
    /// Linear scan over the unvisited vertices
    LinearScan,
}

impl Strategy {
    /// Every strategy, in declaration order
    pub const ALL: [Strategy; 3] = [Strategy::IndexedHeap, Strategy::PriorityQueue, Strategy::LinearScan];

    /// Command-line name of the strategy
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::IndexedHeap => "indexed-heap",
            Strategy::PriorityQueue => "priority-queue",
            Strategy::LinearScan => "linear-scan",
        }
    }

    /// Runs this strategy from `source`
    pub fn run<W, G>(self, graph: &G, source: &Vertex) -> Result<ShortestPathResult<W>>
    where
        W: Weight,
        G: Graph<W>,
    {
        match self {
            Strategy::IndexedHeap => IndexedHeapDijkstra::new().compute_shortest_paths(graph, source),
            Strategy::PriorityQueue => PriorityQueueDijkstra::new().compute_shortest_paths(graph, source),
            Strategy::LinearScan => LinearScanDijkstra::new().compute_shortest_paths(graph, source),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownStrategy(s.to_string()))
    }
}
