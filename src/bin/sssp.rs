use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use labeled_sssp::io::load_graph;
use labeled_sssp::report::{write_report, ReportOptions};
use labeled_sssp::{Error, Graph, Strategy};
use log::info;

/// Shortest paths from one vertex of a JSON graph document to every other vertex
#[derive(Parser, Debug)]
#[command(name = "sssp")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Graph document to load
    file: PathBuf,

    /// Label of the source vertex
    #[arg(default_value = "0")]
    source: String,

    /// Vertex selection strategy: indexed-heap, priority-queue or linear-scan
    #[arg(long, short, default_value_t = Strategy::default())]
    strategy: Strategy,

    /// Print the graph before the report
    #[arg(long)]
    print_graph: bool,

    /// Omit vertices that cannot be reached
    #[arg(long)]
    hide_unreachable: bool,

    /// Refuse graphs that contain negative edge weights
    #[arg(long)]
    reject_negative: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();

    let graph = load_graph(&cli.file)?;
    if cli.reject_negative {
        graph.validate_non_negative()?;
    }

    let source = graph
        .lookup(&cli.source)
        .ok_or_else(|| Error::UnknownVertex(cli.source.clone()))?;

    let start = Instant::now();
    let result = cli.strategy.run(&graph, source)?;
    info!(
        "{} reached {} of {} vertices in {:?}",
        cli.strategy,
        result.reachable_count(),
        graph.vertex_count(),
        start.elapsed()
    );

    let options = ReportOptions {
        print_graph: cli.print_graph,
        print_no_path: !cli.hide_unreachable,
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &graph, &result, options)?;
    out.flush()?;

    Ok(())
}
