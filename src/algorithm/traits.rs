use std::collections::HashMap;

use log::warn;

use crate::algorithm::Distance;
use crate::graph::{Graph, Vertex, Weight};
use crate::Result;

/// Result of a shortest path algorithm execution
///
/// Owns its distance and predecessor maps; nothing in it points back into
/// the query that produced it.
#[derive(Debug, Clone)]
pub struct ShortestPathResult<W>
where
    W: Weight,
{
    /// Source vertex of the query
    source: Vertex,

    /// Distance from the source for every vertex the query enumerated
    distances: HashMap<Vertex, Distance<W>>,

    /// Immediate predecessor on the shortest path, absent for the source and unreachable vertices
    predecessors: HashMap<Vertex, Vertex>,
}

impl<W> ShortestPathResult<W>
where
    W: Weight,
{
    /// Assembles a result from its parts
    pub fn new(
        source: Vertex,
        distances: HashMap<Vertex, Distance<W>>,
        predecessors: HashMap<Vertex, Vertex>,
    ) -> Self {
        ShortestPathResult {
            source,
            distances,
            predecessors,
        }
    }

    /// Source vertex ID
    pub fn source(&self) -> &Vertex {
        &self.source
    }

    /// Shortest distance to a vertex; unknown vertices are unreachable
    pub fn distance(&self, vertex: &Vertex) -> Distance<W> {
        self.distances
            .get(vertex)
            .copied()
            .unwrap_or(Distance::Unreachable)
    }

    /// Returns true if the vertex has a finite distance
    pub fn is_reachable(&self, vertex: &Vertex) -> bool {
        self.distance(vertex).is_finite()
    }

    /// Immediate predecessor of a vertex on its shortest path
    pub fn predecessor(&self, vertex: &Vertex) -> Option<&Vertex> {
        self.predecessors.get(vertex)
    }

    /// Number of vertices with a finite distance, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.values().filter(|d| d.is_finite()).count()
    }

    /// Iterates over every reachable vertex and its distance, in no particular order
    pub fn distances(&self) -> impl Iterator<Item = (&Vertex, W)> + '_ {
        self.distances
            .iter()
            .filter_map(|(vertex, distance)| distance.value().map(|d| (vertex, d)))
    }

    /// Get the shortest path from source to target as a sequence of vertices
    ///
    /// Empty when the target is unreachable; `[source]` when the target is the source.
    pub fn path(&self, target: &Vertex) -> Vec<Vertex> {
        if !self.is_reachable(target) {
            return Vec::new();
        }

        // Build path in reverse order
        let mut path = vec![target.clone()];
        let mut current = target;
        while let Some(pred) = self.predecessors.get(current) {
            if path.len() > self.distances.len() {
                warn!("Cycle detected in predecessor chain of {}", target);
                return Vec::new();
            }
            path.push(pred.clone());
            current = pred;
        }

        if *current != self.source {
            warn!("Predecessor chain of {} ends at {} instead of the source", target, current);
            return Vec::new();
        }

        path.reverse();
        path
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Weight,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    ///
    /// Fails only if the source is not a vertex of the graph. Edge weights
    /// must be non-negative; results are unspecified otherwise.
    fn compute_shortest_paths(&self, graph: &G, source: &Vertex) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(label: &str) -> Vertex {
        Vertex::from(label)
    }

    fn chain_result() -> ShortestPathResult<i64> {
        let distances = HashMap::from([
            (v("A"), Distance::Finite(0)),
            (v("B"), Distance::Finite(1)),
            (v("C"), Distance::Finite(3)),
            (v("E"), Distance::Unreachable),
        ]);
        let predecessors = HashMap::from([(v("B"), v("A")), (v("C"), v("B"))]);
        ShortestPathResult::new(v("A"), distances, predecessors)
    }

    #[test]
    fn path_walks_predecessors_from_source() {
        let result = chain_result();
        assert_eq!(result.path(&v("C")), vec![v("A"), v("B"), v("C")]);
        assert_eq!(result.path(&v("A")), vec![v("A")]);
        assert_eq!(result.predecessor(&v("C")), Some(&v("B")));
        assert_eq!(result.predecessor(&v("A")), None);
    }

    #[test]
    fn unreachable_and_unknown_vertices_have_empty_paths() {
        let result = chain_result();
        assert!(result.path(&v("E")).is_empty());
        assert!(result.path(&v("nowhere")).is_empty());
        assert_eq!(result.distance(&v("nowhere")), Distance::Unreachable);
        assert_eq!(result.reachable_count(), 3);
    }

    #[test]
    fn broken_chain_yields_empty_path() {
        let distances = HashMap::from([
            (v("A"), Distance::Finite(0)),
            (v("B"), Distance::Finite(1)),
            (v("C"), Distance::Finite(2)),
        ]);
        // C -> B -> C never reaches A
        let predecessors = HashMap::from([(v("B"), v("C")), (v("C"), v("B"))]);
        let result = ShortestPathResult::new(v("A"), distances, predecessors);
        assert!(result.path(&v("C")).is_empty());
    }
}
