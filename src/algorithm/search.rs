use std::collections::{HashMap, HashSet};

use log::{debug, trace};

use crate::algorithm::{Distance, ShortestPathResult};
use crate::graph::{Graph, Vertex, Weight};
use crate::{Error, Result};

/// Per-query bookkeeping shared by the Dijkstra strategies
///
/// Holds references into the graph only; it is consumed by `finish` once the
/// query is done.
#[derive(Debug)]
pub(crate) struct SearchState<'g, W>
where
    W: Weight,
{
    source: &'g Vertex,
    distances: HashMap<&'g Vertex, Distance<W>>,
    predecessors: HashMap<&'g Vertex, &'g Vertex>,
    visited: HashSet<&'g Vertex>,
}

impl<'g, W> SearchState<'g, W>
where
    W: Weight,
{
    /// Sets every vertex to unreachable except the source, which starts at zero
    pub(crate) fn start<G>(graph: &'g G, source: &Vertex) -> Result<Self>
    where
        G: Graph<W>,
    {
        let source = graph
            .lookup(source.label())
            .ok_or_else(|| Error::SourceNotFound(source.to_string()))?;

        let mut distances: HashMap<&'g Vertex, Distance<W>> = graph
            .vertices()
            .map(|v| (v, Distance::Unreachable))
            .collect();
        distances.insert(source, Distance::zero());

        Ok(SearchState {
            source,
            distances,
            predecessors: HashMap::new(),
            visited: HashSet::with_capacity(graph.vertex_count()),
        })
    }

    /// Graph-owned source vertex
    pub(crate) fn source(&self) -> &'g Vertex {
        self.source
    }

    /// Current tentative distance of a vertex
    pub(crate) fn distance(&self, vertex: &Vertex) -> Distance<W> {
        self.distances
            .get(vertex)
            .copied()
            .unwrap_or(Distance::Unreachable)
    }

    /// True once the vertex has been finalized
    pub(crate) fn is_finalized(&self, vertex: &Vertex) -> bool {
        self.visited.contains(vertex)
    }

    /// Marks a vertex as finalized. Returns false if it already was, in which
    /// case the caller must skip it.
    pub(crate) fn finalize(&mut self, vertex: &'g Vertex) -> bool {
        if !self.visited.insert(vertex) {
            trace!("skipping stale entry for {}", vertex);
            return false;
        }
        trace!("finalized {} at {}", vertex, self.distance(vertex));
        true
    }

    /// Relaxes the edge `from -> to`.
    ///
    /// Returns the improved distance of `to`, or `None` if the edge did not
    /// shorten it. Finalized targets are never touched.
    pub(crate) fn relax(&mut self, from: &'g Vertex, to: &'g Vertex, weight: W) -> Option<W> {
        if self.visited.contains(to) {
            return None;
        }

        let candidate = self.distance(from).extend(weight);
        if candidate >= self.distance(to) {
            return None;
        }

        self.distances.insert(to, candidate);
        self.predecessors.insert(to, from);
        candidate.value()
    }

    /// Converts the query state into an owned result
    pub(crate) fn finish(self, algorithm: &str) -> ShortestPathResult<W> {
        debug!(
            "{}: finalized {} of {} vertices from {}",
            algorithm,
            self.visited.len(),
            self.distances.len(),
            self.source
        );

        let distances = self
            .distances
            .into_iter()
            .map(|(vertex, distance)| (vertex.clone(), distance))
            .collect();
        let predecessors = self
            .predecessors
            .into_iter()
            .map(|(vertex, pred)| (vertex.clone(), pred.clone()))
            .collect();

        ShortestPathResult::new(self.source.clone(), distances, predecessors)
    }
}
