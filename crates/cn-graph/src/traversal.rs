//! Index-level traversal and search algorithms.
//!
//! Every function takes the graph by reference and works on `VertexId`s
//! already resolved through [`Graph::locate`]. An edge i->j exists iff its
//! stored weight is > 0. Weights matter in exactly one place: [`bfs_order`]
//! sorts each vertex's successors by weight before enqueueing them. Hop
//! counts ignore weights entirely.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};
use std::fmt;

use cn_core::{CnError, CnResult, VertexId};

use crate::graph::Graph;

/// Minimum number of edges between two vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HopCount {
    Finite(usize),
    Infinite,
}

impl HopCount {
    pub fn is_finite(self) -> bool {
        matches!(self, HopCount::Finite(_))
    }

    pub fn finite(self) -> Option<usize> {
        match self {
            HopCount::Finite(n) => Some(n),
            HopCount::Infinite => None,
        }
    }
}

impl fmt::Display for HopCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HopCount::Finite(n) => write!(f, "{}", n),
            HopCount::Infinite => write!(f, "infinity"),
        }
    }
}

/// Visit order of an ordered traversal, and whether the target was hit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Walk {
    pub order: Vec<VertexId>,
    pub reached: bool,
}

/// Bounds for [`for_each_path_up_to`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathLimits {
    /// Paths with more edges than this are not reported or extended.
    pub max_hops: usize,
    /// Paths with fewer vertices than this are extended but not reported.
    pub min_vertices: usize,
}

impl PathLimits {
    /// Validate raw (possibly negative) limits.
    pub fn new(max_hops: i64, min_vertices: i64) -> CnResult<Self> {
        let max_hops = usize::try_from(max_hops).map_err(|_| CnError::InvalidArgument {
            what: "maximum hop count cannot be negative",
        })?;
        let min_vertices = usize::try_from(min_vertices).map_err(|_| CnError::InvalidArgument {
            what: "minimum vertex count cannot be negative",
        })?;
        Ok(Self {
            max_hops,
            min_vertices,
        })
    }
}

/// Does a directed path lead from `start` to `target`?
///
/// `start == target` is the trivial path and always true.
pub fn has_path(graph: &Graph, start: VertexId, target: VertexId) -> bool {
    let mut found = false;
    depth_first(graph, start, |v| {
        found = v == target;
        found
    });
    found
}

/// Number of vertices reachable from `start`, `start` included.
pub fn component_size(graph: &Graph, start: VertexId) -> usize {
    let mut count = 0;
    depth_first(graph, start, |_| {
        count += 1;
        false
    });
    count
}

/// Depth-first preorder from `start`, stopping at `target`.
///
/// Successors are expanded in index order. The visit order is the same as
/// the recursive formulation: a vertex is emitted when first entered, and
/// its lowest-indexed unvisited successor is entered next.
pub fn dfs_order(graph: &Graph, start: VertexId, target: VertexId) -> Walk {
    let mut walk = Walk::default();
    depth_first(graph, start, |v| {
        walk.order.push(v);
        walk.reached = v == target;
        walk.reached
    });
    walk
}

/// Breadth-first order from `start`, stopping once `target` is dequeued.
///
/// Each dequeued vertex is emitted. Its unvisited successors are enqueued
/// in ascending weight order (ties keep index order) and marked visited
/// on enqueue.
pub fn bfs_order(graph: &Graph, start: VertexId, target: VertexId) -> Walk {
    let mut walk = Walk::default();
    let mut visited = vec![false; graph.vertex_count()];
    let mut queue = VecDeque::new();

    if !mark(&mut visited, start) {
        return walk;
    }
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        walk.order.push(current);
        if current == target {
            walk.reached = true;
            break;
        }

        let mut next: Vec<(VertexId, u32)> = graph.successors(current).collect();
        next.sort_by_key(|&(_, w)| w);
        for (v, _) in next {
            if mark(&mut visited, v) {
                queue.push_back(v);
            }
        }
    }

    walk
}

/// Fewest edges on any directed path from `start` to `target`.
///
/// Priority-first expansion with unit edge cost; stored weights play no
/// part.
pub fn shortest_hop_count(graph: &Graph, start: VertexId, target: VertexId) -> HopCount {
    let mut dist = vec![usize::MAX; graph.vertex_count()];
    let Some(d) = dist.get_mut(start.slot()) else {
        return HopCount::Infinite;
    };
    *d = 0;

    let mut heap = BinaryHeap::new();
    heap.push(Reverse((0_usize, start)));

    while let Some(Reverse((hops, current))) = heap.pop() {
        if current == target {
            return HopCount::Finite(hops);
        }
        // Stale entry: a shorter route was already settled.
        if hops > dist[current.slot()] {
            continue;
        }

        for (v, _) in graph.successors(current) {
            let alt = hops + 1;
            if alt < dist[v.slot()] {
                dist[v.slot()] = alt;
                heap.push(Reverse((alt, v)));
            }
        }
    }

    HopCount::Infinite
}

/// Number of simple directed paths from `start` to `target`.
///
/// Exhaustive backtracking: worst case exponential in the vertex count,
/// so only suitable for small or sparse components. `start == target`
/// counts as exactly one path; cycles back to `start` are not explored.
pub fn count_paths(graph: &Graph, start: VertexId, target: VertexId) -> u64 {
    fn walk(graph: &Graph, current: VertexId, target: VertexId, on_path: &mut [bool]) -> u64 {
        if current == target {
            return 1;
        }

        on_path[current.slot()] = true;
        let mut paths = 0;
        for (v, _) in graph.successors(current) {
            if !on_path[v.slot()] {
                paths += walk(graph, v, target, on_path);
            }
        }
        on_path[current.slot()] = false;
        paths
    }

    if start.slot() >= graph.vertex_count() {
        return 0;
    }
    let mut on_path = vec![false; graph.vertex_count()];
    walk(graph, start, target, &mut on_path)
}

/// Report every simple path from `start` within `limits`, as discovered.
///
/// A path is reported when it has at least `min_vertices` vertices and at
/// most `max_hops` edges, at whatever depth that first holds, so a path
/// and its extensions may all be reported. A branch is not extended once
/// it has `max_hops` edges or more vertices than the graph has.
///
/// Exponential in the worst case, like [`count_paths`].
pub fn for_each_path_up_to<F>(graph: &Graph, start: VertexId, limits: PathLimits, mut visit: F)
where
    F: FnMut(&[VertexId]),
{
    struct Search<'a, F> {
        graph: &'a Graph,
        limits: PathLimits,
        path: Vec<VertexId>,
        on_path: Vec<bool>,
        visit: F,
    }

    impl<F: FnMut(&[VertexId])> Search<'_, F> {
        fn extend(&mut self, current: VertexId) {
            self.on_path[current.slot()] = true;
            let hops = self.path.len() - 1;

            if self.path.len() >= self.limits.min_vertices && hops <= self.limits.max_hops {
                (self.visit)(&self.path);
            }

            if hops < self.limits.max_hops && self.path.len() <= self.graph.vertex_count() {
                let graph = self.graph;
                for (v, _) in graph.successors(current) {
                    if !self.on_path[v.slot()] {
                        self.path.push(v);
                        self.extend(v);
                        self.path.pop();
                    }
                }
            }

            self.on_path[current.slot()] = false;
        }
    }

    if start.slot() >= graph.vertex_count() {
        return;
    }

    let mut search = Search {
        graph,
        limits,
        path: vec![start],
        on_path: vec![false; graph.vertex_count()],
        visit: &mut visit,
    };
    search.extend(start);
}

/// Iterative depth-first preorder shared by reachability, component
/// sizing and the ordered DFS.
///
/// `enter` is called once per vertex in preorder; returning `true` stops
/// the search. Visited marks are never cleared.
fn depth_first<F>(graph: &Graph, start: VertexId, mut enter: F)
where
    F: FnMut(VertexId) -> bool,
{
    let mut visited = vec![false; graph.vertex_count()];
    let mut stack = vec![start];

    while let Some(current) = stack.pop() {
        if !mark(&mut visited, current) {
            continue;
        }
        if enter(current) {
            return;
        }

        // Reverse push so the lowest index is popped first.
        let successors: Vec<VertexId> = graph.successors(current).map(|(v, _)| v).collect();
        for &v in successors.iter().rev() {
            if !visited[v.slot()] {
                stack.push(v);
            }
        }
    }
}

/// Mark `v` visited; false if it was already marked or out of range.
fn mark(visited: &mut [bool], v: VertexId) -> bool {
    match visited.get_mut(v.slot()) {
        Some(seen) if !*seen => {
            *seen = true;
            true
        }
        _ => false,
    }
}
