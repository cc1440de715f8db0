//! Identification of vertices inside a graph.
//!
//! Vertices live in an arena (the ordered vertex collection of a storage) and
//! are identified by their position in it. Parents in traversal trees are
//! stored as [`VertexId`]s rather than references, which keeps the vertex
//! records plain values with no ownership cycles.

use std::fmt;

/// Position of a vertex in the insertion order of its graph.
///
/// For the adjacency matrix storage, this is also the row and column index in
/// the weight matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct VertexId(usize);

impl VertexId {
    /// Converts an ID into the corresponding `usize`.
    #[inline]
    pub fn as_usize(&self) -> usize {
        self.0
    }

    /// Converts an `usize` into the corresponding ID.
    #[inline]
    pub fn from_usize(index: usize) -> Self {
        Self(index)
    }
}

impl From<usize> for VertexId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl From<VertexId> for usize {
    fn from(id: VertexId) -> Self {
        id.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Iterator over all vertex IDs of a graph in insertion order.
#[derive(Debug, Clone)]
pub struct VertexIds {
    range: std::ops::Range<usize>,
}

impl VertexIds {
    pub(crate) fn new(vertex_count: usize) -> Self {
        Self {
            range: 0..vertex_count,
        }
    }
}

impl Iterator for VertexIds {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        self.range.next().map(VertexId)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl ExactSizeIterator for VertexIds {}

impl DoubleEndedIterator for VertexIds {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.range.next_back().map(VertexId)
    }
}
