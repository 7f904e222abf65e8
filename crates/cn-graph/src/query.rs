//! Name-level query surface.
//!
//! These are the operations a front-end calls with raw user input. Names
//! are trimmed; a blank name, an unknown name or a negative limit is
//! logged at `warn` and answered with the operation's "not found" value
//! (false, 0, infinity, or nothing). No query fails.

use cn_core::{CnResult, VertexId};

use crate::graph::Graph;
use crate::traversal::{self, HopCount, PathLimits, Walk};

/// An ordered traversal, by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trail<'g> {
    pub names: Vec<&'g str>,
    /// Whether the traversal reached its target.
    pub reached: bool,
}

/// Render names as `A, B, C`.
pub fn format_path(names: &[&str]) -> String {
    names.join(", ")
}

fn recover<T>(op: &'static str, result: CnResult<T>, fallback: T) -> T {
    result.unwrap_or_else(|error| {
        tracing::warn!(op, %error, "query rejected");
        fallback
    })
}

impl Graph {
    fn locate_pair(&self, from: &str, to: &str) -> CnResult<(VertexId, VertexId)> {
        Ok((self.locate(from)?, self.locate(to)?))
    }

    fn trail(&self, walk: Walk) -> Trail<'_> {
        Trail {
            names: walk.order.into_iter().map(|v| self.name(v)).collect(),
            reached: walk.reached,
        }
    }

    /// Is there a directed path from `from` to `to`?
    pub fn has_path(&self, from: &str, to: &str) -> bool {
        let result = self
            .locate_pair(from, to)
            .map(|(a, b)| traversal::has_path(self, a, b));
        recover("has_path", result, false)
    }

    /// Fewest edges from `from` to `to`, or infinity.
    pub fn shortest_hop_count(&self, from: &str, to: &str) -> HopCount {
        let result = self
            .locate_pair(from, to)
            .map(|(a, b)| traversal::shortest_hop_count(self, a, b));
        recover("shortest_hop_count", result, HopCount::Infinite)
    }

    /// Number of simple directed paths from `from` to `to`.
    pub fn count_paths(&self, from: &str, to: &str) -> u64 {
        let result = self
            .locate_pair(from, to)
            .map(|(a, b)| traversal::count_paths(self, a, b));
        recover("count_paths", result, 0)
    }

    /// Stream every simple path from `start` with at most `max_hops` edges
    /// and at least `min_vertices` vertices, in discovery order.
    pub fn each_path_up_to<'g, F>(
        &'g self,
        max_hops: i64,
        min_vertices: i64,
        start: &str,
        mut emit: F,
    ) where
        F: FnMut(&[&'g str]),
    {
        let result = PathLimits::new(max_hops, min_vertices)
            .and_then(|limits| Ok((limits, self.locate(start)?)));
        let Some((limits, start)) = recover("all_paths_up_to", result.map(Some), None) else {
            return;
        };

        let mut names = Vec::new();
        traversal::for_each_path_up_to(self, start, limits, |path| {
            names.clear();
            names.extend(path.iter().map(|&v| self.name(v)));
            emit(&names);
        });
    }

    /// Collected form of [`Graph::each_path_up_to`].
    pub fn all_paths_up_to(&self, max_hops: i64, min_vertices: i64, start: &str) -> Vec<Vec<&str>> {
        let mut paths = Vec::new();
        self.each_path_up_to(max_hops, min_vertices, start, |p| paths.push(p.to_vec()));
        paths
    }

    /// Weight-ordered breadth-first walk from `from`, stopping at `to`.
    pub fn bfs_from(&self, from: &str, to: &str) -> Trail<'_> {
        let result = self
            .locate_pair(from, to)
            .map(|(a, b)| traversal::bfs_order(self, a, b));
        self.trail(recover("bfs_from", result, Walk::default()))
    }

    /// Index-ordered depth-first walk from `from`, stopping at `to`.
    pub fn dfs_from(&self, from: &str, to: &str) -> Trail<'_> {
        let result = self
            .locate_pair(from, to)
            .map(|(a, b)| traversal::dfs_order(self, a, b));
        self.trail(recover("dfs_from", result, Walk::default()))
    }

    /// Size of the forward-reachable set of `from`, itself included.
    pub fn component_size(&self, from: &str) -> usize {
        let result = self
            .locate(from)
            .map(|a| traversal::component_size(self, a));
        recover("component_size", result, 0)
    }
}
