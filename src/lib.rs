//! Labeled SSSP - single-source shortest paths over label-keyed directed graphs
//!
//! Three interchangeable Dijkstra strategies share one contract and one result type:
//! an indexed binary heap with decrease-key, a plain priority queue with lazy
//! deletion, and a linear scan over unvisited vertices. They are expected to agree
//! on every distance, which makes them useful for differential testing.
//!
//! Edge weights are integers and must be non-negative for results to be meaningful.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod io;
pub mod report;

pub use algorithm::{
    Distance, IndexedHeapDijkstra, LinearScanDijkstra, PriorityQueueDijkstra,
    ShortestPathAlgorithm, ShortestPathResult, Strategy,
};
/// Re-export main types for convenient use
pub use graph::{DirectedGraph, Graph, MutableGraph, Vertex};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Source vertex {0} not found in graph")]
    SourceNotFound(String),

    #[error("Unknown vertex: {0}")]
    UnknownVertex(String),

    #[error("Negative edge weight {weight} on {from} -> {to}")]
    NegativeWeight { from: String, to: String, weight: i128 },

    #[error("Unknown strategy: {0}")]
    UnknownStrategy(String),

    #[error("Failed to read graph: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed graph document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
