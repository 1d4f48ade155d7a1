pub mod distance;
pub mod traits;
pub mod dijkstra;
pub mod heap_dijkstra;
pub mod linear_scan;
pub mod strategy;
mod search;

pub use distance::Distance;
pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
pub use dijkstra::PriorityQueueDijkstra;
pub use heap_dijkstra::IndexedHeapDijkstra;
pub use linear_scan::LinearScanDijkstra;
pub use strategy::Strategy;
