use super::id::VertexId;

/// Visitation marker used by the traversals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// Not discovered yet.
    #[default]
    Unvisited,
    /// Discovered, but its adjacency is not fully processed.
    InProgress,
    /// Discovered and its adjacency fully processed.
    Done,
}

/// Transient per-vertex state written by the algorithms.
///
/// The values are meaningful only after a run of the algorithm that sets
/// them. Every run overwrites what the previous one left behind, but only in
/// the fields that the algorithm uses. For example, a depth-first search
/// leaves the distances computed by a preceding breadth-first search intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexState<W> {
    pub color: Color,
    /// `None` stands for an infinite distance.
    pub distance: Option<W>,
    pub discovery_time: usize,
    pub finishing_time: usize,
    pub parent: Option<VertexId>,
}

impl<W> Default for VertexState<W> {
    fn default() -> Self {
        Self {
            color: Color::Unvisited,
            distance: None,
            discovery_time: 0,
            finishing_time: 0,
            parent: None,
        }
    }
}

/// A vertex record: the identity value together with the transient state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex<V, W> {
    value: V,
    pub(crate) state: VertexState<W>,
}

impl<V, W: Copy> Vertex<V, W> {
    pub fn new(value: V) -> Self {
        Self {
            value,
            state: VertexState::default(),
        }
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn into_value(self) -> V {
        self.value
    }

    pub fn color(&self) -> Color {
        self.state.color
    }

    /// Hop count after a breadth-first search, path cost after Dijkstra's
    /// algorithm or the weight of the connecting tree edge after Prim's
    /// algorithm. `None` means infinite.
    pub fn distance(&self) -> Option<W> {
        self.state.distance
    }

    pub fn discovery_time(&self) -> usize {
        self.state.discovery_time
    }

    pub fn finishing_time(&self) -> usize {
        self.state.finishing_time
    }

    /// Predecessor in the traversal tree built by the last run.
    pub fn parent(&self) -> Option<VertexId> {
        self.state.parent
    }

    pub fn state(&self) -> &VertexState<W> {
        &self.state
    }

    pub(crate) fn reindex_parent(&mut self, removed: VertexId) {
        self.state.parent = match self.state.parent {
            Some(parent) if parent == removed => None,
            Some(parent) if parent > removed => Some(VertexId::from_usize(parent.as_usize() - 1)),
            parent => parent,
        };
    }
}
