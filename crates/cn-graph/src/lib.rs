//! cn-graph: graph engine for charnet.
//!
//! Provides:
//! - Vertex registry with stable, dense indices for character names
//! - Directed weighted adjacency storage with amortized growth
//! - Resilient edge-list loading (`name1,name2,weight` per line)
//! - Reachability, hop-count, path-counting, path-enumeration and ordered
//!   BFS/DFS queries
//!
//! # Example
//!
//! ```
//! use cn_graph::{Graph, HopCount};
//!
//! let mut graph = Graph::new();
//! let report = graph.load(["Jon,Ygritte,3", "Ygritte,Jon,1", "Jon,Ygritte"]);
//! assert_eq!(report.skipped.len(), 1);
//!
//! assert!(graph.has_path("Jon", "Ygritte"));
//! assert_eq!(graph.shortest_hop_count("Jon", "Ygritte"), HopCount::Finite(1));
//! assert_eq!(graph.count_paths("Jon", "Ygritte"), 1);
//! ```

pub mod error;
pub mod graph;
pub mod loader;
pub mod matrix;
pub mod query;
pub mod registry;
pub mod traversal;

// Re-exports for ergonomics
pub use error::RecordError;
pub use graph::{EdgeRecord, Graph};
pub use loader::{LoadReport, SkippedRecord, parse_record};
pub use matrix::AdjacencyMatrix;
pub use query::{Trail, format_path};
pub use registry::VertexRegistry;
pub use traversal::{HopCount, PathLimits, Walk};
