pub mod traits;
pub mod vertex;
pub mod directed;
pub mod generators;

pub use traits::{Graph, MutableGraph, Weight};
pub use vertex::Vertex;
pub use directed::DirectedGraph;
