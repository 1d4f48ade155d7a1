use std::fmt::{Debug, Display};
use num_traits::PrimInt;

use crate::graph::Vertex;

/// Integer edge weight usable by every graph and algorithm in this crate
pub trait Weight: PrimInt + Debug + Display {}

impl<T> Weight for T where T: PrimInt + Debug + Display {}

/// Trait representing a weighted directed graph with labelled vertices
///
/// This is the read-only surface consumed by the shortest path algorithms.
/// Implementations must not change while a query is running against them.
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns all vertices in ascending label order
    fn vertices(&self) -> Box<dyn Iterator<Item = &Vertex> + '_>;

    /// Returns the outgoing edges of a vertex, empty if the vertex is unknown
    fn neighbors(&self, vertex: &Vertex) -> Box<dyn Iterator<Item = (&Vertex, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn contains(&self, vertex: &Vertex) -> bool;

    /// Returns the graph-owned vertex with the given label
    fn lookup(&self, label: &str) -> Option<&Vertex>;

    /// Gets the weight of an edge if it exists
    fn edge_weight(&self, from: &Vertex, to: &Vertex) -> Option<W>;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: &Vertex, to: &Vertex) -> bool {
        self.edge_weight(from, to).is_some()
    }
}

/// Trait for building a graph before it is queried
pub trait MutableGraph<W>: Graph<W>
where
    W: Weight,
{
    /// Adds a vertex, returning false if one with the same label already existed
    fn add_vertex(&mut self, vertex: impl Into<Vertex>) -> bool;

    /// Adds or overwrites a directed edge, creating missing endpoints.
    ///
    /// Returns the weight that was replaced, if any. Negative weights are
    /// accepted here; the algorithms assume they never occur.
    fn add_edge(&mut self, source: impl Into<Vertex>, target: impl Into<Vertex>, weight: W) -> Option<W>;
}
