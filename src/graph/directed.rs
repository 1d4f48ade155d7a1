use std::collections::BTreeMap;
use std::fmt;

use crate::graph::traits::{Graph, MutableGraph, Weight};
use crate::graph::Vertex;
use crate::{Error, Result};

/// A directed graph implementation using label-ordered adjacency maps
#[derive(Debug, Clone)]
pub struct DirectedGraph<W>
where
    W: Weight,
{
    /// Outgoing edges for each vertex: vertex -> {target -> weight}
    adjacency: BTreeMap<Vertex, BTreeMap<Vertex, W>>,
}

impl<W> DirectedGraph<W>
where
    W: Weight,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            adjacency: BTreeMap::new(),
        }
    }

    /// Creates a graph from `(source, target, weight)` triples
    pub fn from_edges<I, S, T>(edges: I) -> Self
    where
        I: IntoIterator<Item = (S, T, W)>,
        S: Into<Vertex>,
        T: Into<Vertex>,
    {
        let mut graph = DirectedGraph::new();
        for (source, target, weight) in edges {
            graph.add_edge(source, target, weight);
        }
        graph
    }

    /// Validate that the graph doesn't have negative weights
    pub fn validate_non_negative(&self) -> Result<()> {
        for (source, edges) in &self.adjacency {
            for (target, weight) in edges {
                if *weight < W::zero() {
                    return Err(Error::NegativeWeight {
                        from: source.to_string(),
                        to: target.to_string(),
                        weight: weight.to_i128().unwrap_or_default(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl<W> Default for DirectedGraph<W>
where
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.adjacency.values().map(|edges| edges.len()).sum()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &Vertex> + '_> {
        Box::new(self.adjacency.keys())
    }

    fn neighbors(&self, vertex: &Vertex) -> Box<dyn Iterator<Item = (&Vertex, W)> + '_> {
        if let Some(edges) = self.adjacency.get(vertex) {
            Box::new(edges.iter().map(|(target, weight)| (target, *weight)))
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn contains(&self, vertex: &Vertex) -> bool {
        self.adjacency.contains_key(vertex)
    }

    fn lookup(&self, label: &str) -> Option<&Vertex> {
        self.adjacency.get_key_value(label).map(|(vertex, _)| vertex)
    }

    fn edge_weight(&self, from: &Vertex, to: &Vertex) -> Option<W> {
        self.adjacency.get(from).and_then(|edges| edges.get(to)).copied()
    }
}

impl<W> MutableGraph<W> for DirectedGraph<W>
where
    W: Weight,
{
    fn add_vertex(&mut self, vertex: impl Into<Vertex>) -> bool {
        let vertex = vertex.into();
        if self.adjacency.contains_key(&vertex) {
            return false;
        }
        self.adjacency.insert(vertex, BTreeMap::new());
        true
    }

    fn add_edge(&mut self, source: impl Into<Vertex>, target: impl Into<Vertex>, weight: W) -> Option<W> {
        let target = target.into();
        self.add_vertex(target.clone());

        // Last write wins for a repeated (source, target) pair
        self.adjacency
            .entry(source.into())
            .or_default()
            .insert(target, weight)
    }
}

impl<W> fmt::Display for DirectedGraph<W>
where
    W: Weight,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Graph with {} vertices:", self.vertex_count())?;
        for (vertex, edges) in &self.adjacency {
            write!(f, "{} -> ", vertex)?;
            for (target, weight) in edges {
                write!(f, "{}({}) ", target, weight)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
