use clap::{Parser, Subcommand};
use cn_core::CnResult;
use cn_graph::{Graph, LoadReport};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod menu;
mod query;

use menu::Menu;
use query::Query;

#[derive(Parser)]
#[command(name = "cn-cli")]
#[command(about = "charnet CLI - character relationship network queries", long_about = None)]
struct Cli {
    /// Edge-list file, one `name1,name2,weight` record per line
    #[arg(short, long, global = true, default_value = "network.txt")]
    graph: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show vertex and edge counts and any skipped records
    Stats {
        /// Also list every character in index order
        #[arg(long)]
        list: bool,
    },
    /// Check whether a directed path exists
    HasPath { from: String, to: String },
    /// Print every simple path from a character within the given limits
    Paths {
        /// Maximum number of edges per path
        #[arg(long, allow_negative_numbers = true)]
        max_hops: i64,
        /// Minimum number of characters per path
        #[arg(long, allow_negative_numbers = true)]
        min_vertices: i64,
        start: String,
    },
    /// Fewest edges between two characters
    Shortest { from: String, to: String },
    /// Count simple directed paths between two characters
    CountPaths { from: String, to: String },
    /// Weight-ordered breadth-first walk
    Bfs { from: String, to: String },
    /// Index-ordered depth-first walk
    Dfs { from: String, to: String },
    /// Number of characters reachable from one character
    Component { of: String },
    /// Numbered query menu on stdin
    Interactive,
}

/// Load the network, falling back to an empty graph when the file cannot be read.
fn load_network(path: &Path) -> (Graph, LoadReport) {
    Graph::from_path(path).unwrap_or_else(|error| {
        tracing::error!(path = %path.display(), %error, "could not read network; continuing empty");
        (Graph::new(), LoadReport::default())
    })
}

fn main() -> CnResult<()> {
    // Initialize tracing; diagnostics go to stderr so query output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let (graph, report) = load_network(&cli.graph);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let request = match cli.command {
        Commands::Stats { list } => {
            writeln!(out, "Network: {}", cli.graph.display())?;
            writeln!(out, "  Characters: {}", graph.vertex_count())?;
            writeln!(out, "  Edges: {}", graph.edge_count())?;
            writeln!(out, "  Lines read: {}", report.lines)?;
            writeln!(out, "  Skipped: {}", report.skipped.len())?;
            for skipped in &report.skipped {
                writeln!(out, "    {}", skipped.reason.clone().at_line(skipped.line))?;
            }
            if list {
                writeln!(out, "\nCharacters:")?;
                for name in graph.vertex_names() {
                    writeln!(out, "  {}", name)?;
                }
            }
            return Ok(());
        }
        Commands::Interactive => {
            let stdin = io::stdin();
            Menu::new(stdin.lock(), out).run(&graph)?;
            return Ok(());
        }
        Commands::HasPath { from, to } => Query::HasPath { from, to },
        Commands::Paths {
            max_hops,
            min_vertices,
            start,
        } => Query::PathsUpTo {
            max_hops,
            min_vertices,
            start,
        },
        Commands::Shortest { from, to } => Query::ShortestHops { from, to },
        Commands::CountPaths { from, to } => Query::CountPaths { from, to },
        Commands::Bfs { from, to } => Query::Bfs { from, to },
        Commands::Dfs { from, to } => Query::Dfs { from, to },
        Commands::Component { of } => Query::ComponentSize { of },
    };

    query::run(&graph, &request, &mut out)?;
    Ok(())
}
