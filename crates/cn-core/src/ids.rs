use core::fmt;
use core::num::NonZeroU32;

/// Compact, stable identifier for a vertex in the network.
///
/// - `u32` keeps adjacency bookkeeping small
/// - `NonZero` enables `Option<VertexId>` to be pointer-optimized
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(NonZeroU32);

impl VertexId {
    /// Largest index a `VertexId` can carry.
    pub const MAX_INDEX: u32 = u32::MAX - 1;

    /// Create an id from a 0-based index by storing index+1.
    ///
    /// Returns `None` if `index` exceeds [`VertexId::MAX_INDEX`].
    pub fn from_index(index: u32) -> Option<Self> {
        index.checked_add(1).and_then(NonZeroU32::new).map(Self)
    }

    /// Recover the 0-based index.
    pub fn index(self) -> u32 {
        self.0.get() - 1
    }

    /// The 0-based index as a `usize`, for slice addressing.
    pub fn slot(self) -> usize {
        self.index() as usize
    }
}

impl fmt::Debug for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexId({})", self.index())
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}
