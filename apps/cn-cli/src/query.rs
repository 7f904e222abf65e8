//! Query dispatch shared by the subcommands and the interactive menu.

use std::io::{self, Write};

use cn_graph::{Graph, format_path};

/// One user-level query against a loaded network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    HasPath { from: String, to: String },
    PathsUpTo {
        max_hops: i64,
        min_vertices: i64,
        start: String,
    },
    ShortestHops { from: String, to: String },
    CountPaths { from: String, to: String },
    Bfs { from: String, to: String },
    Dfs { from: String, to: String },
    ComponentSize { of: String },
}

/// Run `query` and print its result.
pub fn run(graph: &Graph, query: &Query, out: &mut impl Write) -> io::Result<()> {
    match query {
        Query::HasPath { from, to } => {
            writeln!(out, "IsThereAPath({}, {}): {}", from, to, graph.has_path(from, to))
        }
        Query::PathsUpTo {
            max_hops,
            min_vertices,
            start,
        } => {
            let mut result = Ok(());
            graph.each_path_up_to(*max_hops, *min_vertices, start, |path| {
                if result.is_ok() {
                    result = writeln!(out, "{}", format_path(path));
                }
            });
            result
        }
        Query::ShortestHops { from, to } => writeln!(
            out,
            "ShortestPathLengthFromTo({}, {}): {}",
            from,
            to,
            graph.shortest_hop_count(from, to)
        ),
        Query::CountPaths { from, to } => writeln!(
            out,
            "NoOfPathsFromTo({}, {}): {}",
            from,
            to,
            graph.count_paths(from, to)
        ),
        Query::Bfs { from, to } => {
            let trail = graph.bfs_from(from, to);
            writeln!(out, "BFSfromTo({}, {}): {}", from, to, format_path(&trail.names))
        }
        Query::Dfs { from, to } => {
            let trail = graph.dfs_from(from, to);
            let mut line = format_path(&trail.names);
            if !trail.reached {
                if !line.is_empty() {
                    line.push_str(", ");
                }
                line.push_str("No path");
            }
            writeln!(out, "DFSfromTo({}, {}): {}", from, to, line)
        }
        Query::ComponentSize { of } => writeln!(
            out,
            "NoOfVerticesInComponent({}): {}",
            of,
            graph.component_size(of)
        ),
    }
}
