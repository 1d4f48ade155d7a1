//! Loading graphs from JSON node/edge documents
//!
//! ```json
//! { "nodes": [{ "id": "0" }, { "id": "1" }],
//!   "edges": [{ "source": "0", "target": "1", "weight": 7 }] }
//! ```

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::graph::{DirectedGraph, Graph, MutableGraph};
use crate::Result;

/// A vertex entry of a graph document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: String,
}

/// A weighted edge entry of a graph document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub source: String,
    pub target: String,
    pub weight: i64,
}

/// Serialized form of a weighted directed graph
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphDocument {
    #[serde(default)]
    pub nodes: Vec<NodeRecord>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

impl GraphDocument {
    /// Builds the graph: all nodes first, then edges in document order
    pub fn into_graph(self) -> DirectedGraph<i64> {
        let mut graph = DirectedGraph::new();
        for node in self.nodes {
            graph.add_vertex(node.id);
        }
        for edge in self.edges {
            graph.add_edge(edge.source, edge.target, edge.weight);
        }
        graph
    }

    /// Captures a graph as a document, vertices and edges in label order
    pub fn from_graph(graph: &DirectedGraph<i64>) -> Self {
        let nodes = graph
            .vertices()
            .map(|v| NodeRecord { id: v.to_string() })
            .collect();
        let edges = graph
            .vertices()
            .flat_map(|source| {
                graph.neighbors(source).map(move |(target, weight)| EdgeRecord {
                    source: source.to_string(),
                    target: target.to_string(),
                    weight,
                })
            })
            .collect();
        GraphDocument { nodes, edges }
    }
}

/// Parses a graph from a JSON document
pub fn parse_graph(json: &str) -> Result<DirectedGraph<i64>> {
    let document: GraphDocument = serde_json::from_str(json)?;
    Ok(document.into_graph())
}

/// Reads and parses a graph from a JSON file
pub fn load_graph(path: impl AsRef<Path>) -> Result<DirectedGraph<i64>> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)?;
    let graph = parse_graph(&json)?;
    debug!(
        "loaded {} vertices and {} edges from {}",
        graph.vertex_count(),
        graph.edge_count(),
        path.display()
    );
    Ok(graph)
}

/// Writes a graph to a JSON file
pub fn save_graph(graph: &DirectedGraph<i64>, path: impl AsRef<Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(&GraphDocument::from_graph(graph))?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Vertex;
    use crate::Error;

    #[test]
    fn parses_nodes_and_edges() {
        let graph = parse_graph(
            r#"{
                "nodes": [{"id": "0"}, {"id": "1"}, {"id": "2"}],
                "edges": [
                    {"source": "0", "target": "1", "weight": 4},
                    {"source": "0", "target": "1", "weight": 2}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edge_weight(&Vertex::from("0"), &Vertex::from("1")), Some(2));
    }

    #[test]
    fn edges_may_introduce_vertices() {
        let graph = parse_graph(r#"{"edges": [{"source": "a", "target": "b", "weight": 1}]}"#).unwrap();
        assert!(graph.lookup("a").is_some());
        assert!(graph.lookup("b").is_some());
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let err = parse_graph(r#"{"edges": [{"source": "a"}]}"#).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_graph("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn saved_graph_loads_back() {
        let graph = DirectedGraph::from_edges([("A", "B", 1), ("B", "C", 2), ("D", "D", 0)]);
        let path = std::env::temp_dir().join(format!("labeled_sssp_io_{}.json", std::process::id()));

        save_graph(&graph, &path).unwrap();
        let loaded = load_graph(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(loaded.to_string(), graph.to_string());
    }
}
