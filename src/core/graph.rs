use crate::algo::{self, AllPairs, ShortestPaths, SpanningForest};

use super::{
    error::GraphError,
    id::{VertexId, VertexIds},
    marker::EdgeType,
    vertex::{Vertex, VertexState},
    weight::Weight,
};

/// Read access to the ordered vertex collection.
pub trait Vertices<V, W: Weight> {
    type VerticesIter<'a>: Iterator<Item = &'a Vertex<V, W>>
    where
        Self: 'a,
        V: 'a,
        W: 'a;

    fn vertex_count(&self) -> usize;
    fn vertex(&self, id: VertexId) -> Option<&Vertex<V, W>>;
    fn vertex_mut(&mut self, id: VertexId) -> Option<&mut Vertex<V, W>>;

    /// Iterates over the vertices in insertion order.
    fn vertices(&self) -> Self::VerticesIter<'_>;

    fn vertex_ids(&self) -> VertexIds {
        VertexIds::new(self.vertex_count())
    }

    fn vertex_value<'a>(&'a self, id: VertexId) -> Option<&'a V>
    where
        W: 'a,
    {
        self.vertex(id).map(Vertex::value)
    }

    /// Finds the vertex with given value by linear scan.
    fn find_vertex(&self, value: &V) -> Option<VertexId>
    where
        V: PartialEq,
    {
        self.vertices()
            .position(|vertex| vertex.value() == value)
            .map(VertexId::from_usize)
    }

    /// Returns the vertex record with given value, `None` if there is no such
    /// vertex.
    fn get_vertex(&self, value: &V) -> Option<&Vertex<V, W>>
    where
        V: PartialEq,
    {
        self.vertices().find(|vertex| vertex.value() == value)
    }

    /// Like [`find_vertex`](Vertices::find_vertex), but turns the absence into
    /// an [`UnknownVertex`](GraphError::UnknownVertex) error.
    fn require_vertex(&self, value: &V) -> Result<VertexId, GraphError<V>>
    where
        V: PartialEq + Clone,
    {
        self.find_vertex(value)
            .ok_or_else(|| GraphError::unknown(value))
    }
}

/// Adjacency of vertices.
pub trait Neighbors<W: Weight> {
    type NeighborsIter<'a>: Iterator<Item = (VertexId, W)>
    where
        Self: 'a;

    /// Iterates over the outgoing edges of a vertex as `(neighbor, weight)`
    /// pairs in the natural order of the storage.
    ///
    /// # Panics
    ///
    /// Panics if the vertex does not exist.
    fn neighbors(&self, id: VertexId) -> Self::NeighborsIter<'_>;

    fn edge_weight(&self, src: VertexId, dst: VertexId) -> Option<W>;

    fn contains_edge(&self, src: VertexId, dst: VertexId) -> bool {
        self.edge_weight(src, dst).is_some()
    }

    /// Number of outgoing adjacency entries.
    fn degree(&self, id: VertexId) -> usize {
        self.neighbors(id).count()
    }
}

/// The operations shared by all graph storages.
///
/// Vertices are addressed by their values. The algorithms use the transient
/// state of the vertex records as their working memory and leave it readable
/// afterwards.
pub trait Graph<V: PartialEq + Clone, W: Weight>: Vertices<V, W> + Neighbors<W> {
    fn edge_type(&self) -> EdgeType;

    fn is_directed(&self) -> bool {
        self.edge_type().is_directed()
    }

    /// Number of edges. An undirected edge counts once.
    fn edge_count(&self) -> usize;

    /// Appends a new vertex at the end of the insertion order.
    fn add_vertex(&mut self, value: V) -> Result<VertexId, GraphError<V>>;

    /// Adds an edge from `src` to `dst`, and the mirror edge in undirected
    /// graphs.
    fn add_edge(&mut self, src: &V, dst: &V, weight: W) -> Result<(), GraphError<V>>;

    /// Removes the vertex and all edges incident to it, returning its value.
    fn remove_vertex(&mut self, value: &V) -> Result<V, GraphError<V>>;

    /// Removes the edge from `src` to `dst` (and the mirror edge in undirected
    /// graphs), returning its weight.
    fn remove_edge(&mut self, src: &V, dst: &V) -> Result<W, GraphError<V>>;

    /// Returns `true` if every vertex has at least one outgoing adjacency
    /// entry.
    ///
    /// This is a cheap necessary condition, not a reachability check. A
    /// directed graph with a vertex that has only incoming edges fails it even
    /// if everything else is reachable, and two disjoint components where
    /// every vertex has a neighbor pass it.
    fn is_connected(&self) -> bool {
        self.vertex_ids()
            .all(|id| self.neighbors(id).next().is_some())
    }

    /// Breadth-first search from `source`. See [`algo::bfs`].
    fn bfs(&mut self, source: &V) -> Result<(), GraphError<V>> {
        algo::bfs(self, source)
    }

    /// Depth-first search from `source`. See [`algo::dfs`].
    fn dfs(&mut self, source: &V) -> Result<(), GraphError<V>> {
        algo::dfs(self, source)
    }

    /// Single-source shortest paths. See [`algo::dijkstra`].
    fn dijkstra(&mut self, source: &V) -> Result<ShortestPaths<W>, GraphError<V>> {
        algo::dijkstra(self, source)
    }

    /// All-pairs shortest paths. See [`algo::floyd_warshall`].
    fn floyd_warshall(&self) -> AllPairs<W> {
        algo::floyd_warshall(self)
    }

    /// Minimum spanning forest. See [`algo::prim`].
    fn prim(&mut self, source: &V) -> Result<SpanningForest<W>, GraphError<V>> {
        algo::prim(self, source)
    }

    /// Snapshot of the transient state of all vertices in insertion order.
    fn states(&self) -> Vec<VertexState<W>> {
        self.vertices().map(|vertex| *vertex.state()).collect()
    }

    /// Overwrites the transient state of the vertices with the snapshot.
    ///
    /// Entries beyond the vertex count are ignored.
    fn commit_states(&mut self, states: Vec<VertexState<W>>) {
        for (id, state) in self.vertex_ids().zip(states) {
            if let Some(vertex) = self.vertex_mut(id) {
                vertex.state = state;
            }
        }
    }
}

/// Construction of empty graphs.
pub trait Create<V: PartialEq + Clone, W: Weight>: Graph<V, W> + Sized {
    fn with_capacity(edge_type: EdgeType, vertex_count: usize) -> Self;

    fn empty(edge_type: EdgeType) -> Self {
        Self::with_capacity(edge_type, 0)
    }
}
