//! Plain-text rendering of a shortest path query

use std::fmt::Display;
use std::io::{self, Write};

use crate::algorithm::ShortestPathResult;
use crate::graph::{Graph, Weight};

/// Switches for the text report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Print the graph's adjacency listing before the paths
    pub print_graph: bool,
    /// List unreachable vertices as `NO PATH` instead of omitting them
    pub print_no_path: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        ReportOptions {
            print_graph: false,
            print_no_path: true,
        }
    }
}

/// Writes one line per vertex of the graph, in label order
///
/// `shortest path to D: A B C D: cost = 4` for reachable vertices and
/// `shortest path to E: NO PATH` for the rest.
pub fn write_report<W, G, O>(
    out: &mut O,
    graph: &G,
    result: &ShortestPathResult<W>,
    options: ReportOptions,
) -> io::Result<()>
where
    W: Weight,
    G: Graph<W> + Display,
    O: Write,
{
    if options.print_graph {
        writeln!(out, "{}", graph)?;
    }

    for vertex in graph.vertices() {
        let path = result.path(vertex);
        if path.is_empty() {
            if options.print_no_path {
                writeln!(out, "shortest path to {}: NO PATH", vertex)?;
            }
            continue;
        }

        let labels: Vec<&str> = path.iter().map(|v| v.label()).collect();
        writeln!(
            out,
            "shortest path to {}: {}: cost = {}",
            vertex,
            labels.join(" "),
            result.distance(vertex)
        )?;
    }

    Ok(())
}

/// Renders the report into a string
pub fn render_report<W, G>(graph: &G, result: &ShortestPathResult<W>, options: ReportOptions) -> String
where
    W: Weight,
    G: Graph<W> + Display,
{
    let mut buffer = Vec::new();
    write_report(&mut buffer, graph, result, options).expect("writing to a Vec cannot fail");
    String::from_utf8_lossy(&buffer).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::Strategy;
    use crate::graph::{DirectedGraph, MutableGraph, Vertex};

    fn sample() -> DirectedGraph<i64> {
        let mut graph = DirectedGraph::from_edges([
            ("A", "B", 1),
            ("A", "C", 4),
            ("B", "C", 2),
            ("B", "D", 5),
            ("C", "D", 1),
        ]);
        graph.add_vertex("E");
        graph
    }

    #[test]
    fn reports_paths_and_unreachable_vertices() {
        let graph = sample();
        let result = Strategy::IndexedHeap.run(&graph, &Vertex::from("A")).unwrap();
        let text = render_report(&graph, &result, ReportOptions::default());

        assert_eq!(
            text,
            "shortest path to A: A: cost = 0\n\
             shortest path to B: A B: cost = 1\n\
             shortest path to C: A B C: cost = 3\n\
             shortest path to D: A B C D: cost = 4\n\
             shortest path to E: NO PATH\n"
        );
    }

    #[test]
    fn can_hide_unreachable_and_print_graph() {
        let graph = sample();
        let result = Strategy::LinearScan.run(&graph, &Vertex::from("A")).unwrap();
        let options = ReportOptions {
            print_graph: true,
            print_no_path: false,
        };
        let text = render_report(&graph, &result, options);

        assert!(text.starts_with("Graph with 5 vertices:\n"));
        assert!(!text.contains("NO PATH"));
        assert!(text.ends_with("shortest path to D: A B C D: cost = 4\n"));
    }
}
