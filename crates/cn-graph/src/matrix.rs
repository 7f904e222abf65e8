//! Square weighted adjacency matrix with amortized growth.

use cn_core::VertexId;

const MIN_DIM: usize = 8;

/// Dense `dim x dim` weight matrix stored row-major in one flat vector.
///
/// Cell `(i, j)` holds the weight of edge i->j; 0 means no edge.
/// Growth doubles the dimension and re-lays existing rows, so every
/// stored weight survives.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyMatrix {
    dim: usize,
    cells: Vec<u32>,
}

impl AdjacencyMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current dimension (rows == columns).
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Make room for at least `vertices` rows and columns.
    pub fn ensure_dim(&mut self, vertices: usize) {
        if vertices <= self.dim {
            return;
        }

        let new_dim = vertices.max(self.dim * 2).max(MIN_DIM);
        let mut cells = vec![0; new_dim * new_dim];
        for row in 0..self.dim {
            let old = &self.cells[row * self.dim..(row + 1) * self.dim];
            cells[row * new_dim..row * new_dim + self.dim].copy_from_slice(old);
        }

        tracing::debug!(from = self.dim, to = new_dim, "grew adjacency matrix");
        self.dim = new_dim;
        self.cells = cells;
    }

    /// Store `weight` for edge from->to, growing as needed.
    pub fn set(&mut self, from: VertexId, to: VertexId, weight: u32) {
        self.ensure_dim(from.slot().max(to.slot()) + 1);
        let dim = self.dim;
        self.cells[from.slot() * dim + to.slot()] = weight;
    }

    /// Weight of edge from->to, 0 if absent or out of range.
    pub fn get(&self, from: VertexId, to: VertexId) -> u32 {
        if from.slot() >= self.dim || to.slot() >= self.dim {
            return 0;
        }
        self.cells[from.slot() * self.dim + to.slot()]
    }

    /// The first `width` cells of `from`'s row (empty if out of range).
    pub fn row(&self, from: VertexId, width: usize) -> &[u32] {
        if from.slot() >= self.dim {
            return &[];
        }
        let start = from.slot() * self.dim;
        &self.cells[start..start + width.min(self.dim)]
    }

    /// Number of non-zero cells.
    pub fn edge_count(&self) -> usize {
        self.cells.iter().filter(|&&w| w > 0).count()
    }
}
