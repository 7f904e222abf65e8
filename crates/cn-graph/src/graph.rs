//! Core graph data structure.

use cn_core::{CnError, CnResult, VertexId};

use crate::matrix::AdjacencyMatrix;
use crate::registry::{self, VertexRegistry};

/// A validated edge-list record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRecord {
    pub source: String,
    pub target: String,
    /// Zero or below means "no edge".
    pub weight: i32,
}

/// The character network: a vertex registry plus a directed, weighted
/// adjacency matrix over its indices.
///
/// Populated during the bulk load (see [`crate::loader`]) and read-only
/// afterwards; every query borrows it immutably.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    registry: VertexRegistry,
    matrix: AdjacencyMatrix,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the directed edge source->target.
    ///
    /// Both names are checked before either is registered, so a failed
    /// call leaves the registry untouched. A weight of zero or below
    /// registers both names and leaves the cell empty. Re-adding an edge
    /// overwrites its weight, so a later non-positive record clears it.
    pub fn add_edge(&mut self, source: &str, target: &str, weight: i32) -> CnResult<()> {
        registry::normalize(source)?;
        registry::normalize(target)?;

        let from = self.registry.resolve(source)?;
        let to = self.registry.resolve(target)?;
        self.matrix.set(from, to, u32::try_from(weight).unwrap_or(0));
        Ok(())
    }

    /// Record a parsed edge-list record.
    pub fn add_record(&mut self, record: &EdgeRecord) -> CnResult<()> {
        self.add_edge(&record.source, &record.target, record.weight)
    }

    /// Resolve a query name to an existing vertex.
    ///
    /// Blank names are `InvalidArgument`; names never loaded are
    /// `UnknownVertex`.
    pub fn locate(&self, name: &str) -> CnResult<VertexId> {
        let name = registry::normalize(name)?;
        self.registry
            .lookup(name)
            .ok_or_else(|| CnError::UnknownVertex {
                name: name.to_owned(),
            })
    }

    /// Name of a vertex (empty string for a foreign id).
    pub fn name(&self, id: VertexId) -> &str {
        self.registry.name(id).unwrap_or_default()
    }

    /// Outgoing edges of `from` as (target, weight), in index order.
    pub fn successors(&self, from: VertexId) -> impl Iterator<Item = (VertexId, u32)> + '_ {
        self.matrix
            .row(from, self.vertex_count())
            .iter()
            .enumerate()
            .filter(|&(_, &w)| w > 0)
            .filter_map(|(i, &w)| Some((VertexId::from_index(u32::try_from(i).ok()?)?, w)))
    }

    /// Weight of edge from->to, if present.
    pub fn weight(&self, from: VertexId, to: VertexId) -> Option<u32> {
        match self.matrix.get(from, to) {
            0 => None,
            w => Some(w),
        }
    }

    /// All vertex ids in index order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.vertex_count()).filter_map(|i| VertexId::from_index(u32::try_from(i).ok()?))
    }

    /// All vertex names in index order.
    pub fn vertex_names(&self) -> impl Iterator<Item = &str> {
        self.registry.names()
    }

    pub fn vertex_count(&self) -> usize {
        self.registry.len()
    }

    pub fn edge_count(&self) -> usize {
        self.matrix.edge_count()
    }

    pub fn registry(&self) -> &VertexRegistry {
        &self.registry
    }
}
