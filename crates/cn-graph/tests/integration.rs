//! Integration tests for cn-graph.

use cn_graph::{Graph, HopCount, RecordError, format_path, traversal};

const NETWORK: &str = "\
Jon,Ygritte,3
Ygritte,Jon,1
Jon,Sam,2
Sam,Gilly,4
Gilly,Sam,4
Arya,Jon,5
Jon,Ygritte
Tyrion,,2
Bran,Hodor,many
Bran,Hodor,7
";

fn network() -> Graph {
    let (graph, _) = Graph::from_reader(NETWORK.as_bytes()).unwrap();
    graph
}

#[test]
fn load_reports_skipped_lines() {
    let (graph, report) = Graph::from_reader(NETWORK.as_bytes()).unwrap();

    assert_eq!(report.lines, 10);
    assert_eq!(report.edges, 7);
    let skipped: Vec<usize> = report.skipped.iter().map(|s| s.line).collect();
    assert_eq!(skipped, [7, 8, 9]);
    assert_eq!(report.skipped[0].reason, RecordError::FieldCount { found: 2 });
    assert_eq!(report.skipped[1].reason, RecordError::BlankName { field: 2 });

    // Tyrion only appears on a skipped line, so he was never registered.
    assert_eq!(graph.vertex_count(), 7);
    assert!(graph.locate("Tyrion").is_err());
}

#[test]
fn two_character_example() {
    let mut graph = Graph::new();
    graph.load(["Jon,Ygritte,3", "Ygritte,Jon,1"]);

    assert!(graph.has_path("Jon", "Ygritte"));
    assert!(graph.has_path("Ygritte", "Jon"));
    assert_eq!(graph.shortest_hop_count("Jon", "Ygritte"), HopCount::Finite(1));
    assert_eq!(graph.count_paths("Jon", "Ygritte"), 1);
}

#[test]
fn malformed_line_leaves_vertex_count() {
    let mut graph = Graph::new();
    graph.load(["Jon,Ygritte,3"]);
    let before = graph.vertex_count();
    let report = graph.load(["Jon,Ygritte", "Robb,Talisa"]);
    assert_eq!(report.skipped.len(), 2);
    assert_eq!(graph.vertex_count(), before);
}

#[test]
fn three_cycle_example() {
    let mut graph = Graph::new();
    graph.load(["A,B,1", "B,C,1", "C,A,1"]);

    assert_eq!(graph.component_size("A"), 3);
    assert!(graph.has_path("A", "A"));
    assert_eq!(graph.count_paths("A", "A"), 1);
    assert_eq!(graph.shortest_hop_count("A", "A"), HopCount::Finite(0));
}

#[test]
fn unknown_query_does_not_panic() {
    let graph = network();
    assert!(!graph.has_path("Unknown", "Jon"));
    assert_eq!(graph.shortest_hop_count("Unknown", "Jon").to_string(), "infinity");
}

#[test]
fn directed_edges_stay_directed() {
    let graph = network();
    assert!(graph.has_path("Arya", "Gilly"));
    assert!(!graph.has_path("Gilly", "Arya"));
    assert!(!graph.has_path("Hodor", "Bran"));
    assert_eq!(graph.component_size("Arya"), 5);
    assert_eq!(graph.component_size("Hodor"), 1);
}

#[test]
fn hop_count_bounds() {
    let graph = network();
    assert_eq!(graph.shortest_hop_count("Arya", "Gilly"), HopCount::Finite(3));
    let n = graph.vertex_count();
    for a in graph.vertex_names() {
        for b in graph.vertex_names() {
            match graph.shortest_hop_count(a, b) {
                HopCount::Finite(0) => assert_eq!(a, b),
                HopCount::Finite(h) => assert!(h <= n - 1),
                HopCount::Infinite => assert!(!graph.has_path(a, b)),
            }
        }
    }
}

#[test]
fn path_enumeration_example() {
    let graph = network();
    let lines: Vec<String> = graph
        .all_paths_up_to(3, 3, "Arya")
        .iter()
        .map(|p| format_path(p))
        .collect();
    assert_eq!(
        lines,
        [
            "Arya, Jon, Ygritte",
            "Arya, Jon, Sam",
            "Arya, Jon, Sam, Gilly",
        ]
    );
}

#[test]
fn ordered_traversals_differ() {
    let graph = network();

    let bfs = graph.bfs_from("Jon", "Gilly");
    assert!(bfs.reached);
    assert_eq!(format_path(&bfs.names), "Jon, Sam, Ygritte, Gilly");

    let dfs = graph.dfs_from("Jon", "Gilly");
    assert!(dfs.reached);
    assert_eq!(format_path(&dfs.names), "Jon, Ygritte, Sam, Gilly");

    let dfs = graph.dfs_from("Hodor", "Bran");
    assert!(!dfs.reached);
}

#[test]
fn index_level_matches_name_level() {
    let graph = network();
    let jon = graph.locate("Jon").unwrap();
    let gilly = graph.locate("Gilly").unwrap();

    assert_eq!(
        traversal::count_paths(&graph, jon, gilly),
        graph.count_paths("Jon", "Gilly")
    );
    assert_eq!(
        traversal::component_size(&graph, jon),
        graph.component_size("Jon")
    );
}

#[test]
fn from_path_reads_file() {
    let path = std::env::temp_dir().join(format!("charnet-{}.txt", std::process::id()));
    std::fs::write(&path, "Ned,Cat,2\nCat,Robb,1\n").unwrap();

    let (graph, report) = Graph::from_path(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert!(report.is_clean());
    assert!(graph.has_path("Ned", "Robb"));
    assert_eq!(graph.count_paths("Ned", "Robb"), 1);
}
