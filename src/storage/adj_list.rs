use std::{hash::BuildHasherDefault, mem};

use indexmap::IndexMap;
use rustc_hash::FxHasher;
use tracing::debug;

use crate::core::{
    error::GraphError,
    id::VertexId,
    marker::{Directed, EdgeType, Undirected},
    vertex::Vertex,
    weight::Weight,
    Create, Graph, Neighbors, Vertices,
};

/// Neighbor to weight mapping that iterates in insertion order.
pub type NeighborMap<W> = IndexMap<VertexId, W, BuildHasherDefault<FxHasher>>;

/// Vertex record of the adjacency list together with its outgoing edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListVertex<V, W> {
    vertex: Vertex<V, W>,
    adjacent: NeighborMap<W>,
}

impl<V, W: Copy> ListVertex<V, W> {
    fn new(value: V) -> Self {
        Self {
            vertex: Vertex::new(value),
            adjacent: NeighborMap::default(),
        }
    }

    pub fn vertex(&self) -> &Vertex<V, W> {
        &self.vertex
    }

    pub fn adjacent(&self) -> &NeighborMap<W> {
        &self.adjacent
    }

    fn reindex(&mut self, removed: VertexId) {
        self.vertex.reindex_parent(removed);

        if self.adjacent.keys().any(|&id| id > removed) {
            self.adjacent = mem::take(&mut self.adjacent)
                .into_iter()
                .map(|(id, weight)| {
                    if id > removed {
                        (VertexId::from_usize(id.as_usize() - 1), weight)
                    } else {
                        (id, weight)
                    }
                })
                .collect();
        }
    }
}

/// Graph stored as a vector of vertices, each owning the map of its outgoing
/// edges.
///
/// Neighbors are enumerated in the order in which the edges were added. In
/// undirected graphs, both endpoints store the edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjList<V, W = i32> {
    vertices: Vec<ListVertex<V, W>>,
    edge_type: EdgeType,
    n_edges: usize,
}

impl<V, W> AdjList<V, W> {
    pub fn new(directed: bool) -> Self {
        Self::with_edge_type(directed.into(), 0)
    }

    pub fn new_directed() -> Self {
        Self::with_edge_type(Directed, 0)
    }

    pub fn new_undirected() -> Self {
        Self::with_edge_type(Undirected, 0)
    }

    fn with_edge_type(edge_type: EdgeType, capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
            edge_type,
            n_edges: 0,
        }
    }

    pub fn list_vertex(&self, id: VertexId) -> Option<&ListVertex<V, W>> {
        self.vertices.get(id.as_usize())
    }

    /// Outgoing edges of the vertex, `None` if the vertex does not exist.
    pub fn adjacent(&self, id: VertexId) -> Option<&NeighborMap<W>> {
        self.vertices.get(id.as_usize()).map(|vertex| &vertex.adjacent)
    }
}

impl<V, W> Default for AdjList<V, W> {
    fn default() -> Self {
        Self::new_undirected()
    }
}

impl<V, W: Weight> Vertices<V, W> for AdjList<V, W> {
    type VerticesIter<'a> = VerticesIter<'a, V, W>
    where
        Self: 'a,
        V: 'a,
        W: 'a;

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn vertex(&self, id: VertexId) -> Option<&Vertex<V, W>> {
        self.vertices.get(id.as_usize()).map(|vertex| &vertex.vertex)
    }

    fn vertex_mut(&mut self, id: VertexId) -> Option<&mut Vertex<V, W>> {
        self.vertices
            .get_mut(id.as_usize())
            .map(|vertex| &mut vertex.vertex)
    }

    fn vertices(&self) -> Self::VerticesIter<'_> {
        VerticesIter {
            inner: self.vertices.iter(),
        }
    }
}

impl<V, W: Weight> Neighbors<W> for AdjList<V, W> {
    type NeighborsIter<'a> = NeighborsIter<'a, W>
    where
        Self: 'a;

    fn neighbors(&self, id: VertexId) -> Self::NeighborsIter<'_> {
        NeighborsIter {
            inner: self.vertices[id.as_usize()].adjacent.iter(),
        }
    }

    fn edge_weight(&self, src: VertexId, dst: VertexId) -> Option<W> {
        self.vertices
            .get(src.as_usize())?
            .adjacent
            .get(&dst)
            .copied()
    }

    fn degree(&self, id: VertexId) -> usize {
        self.vertices[id.as_usize()].adjacent.len()
    }
}

impl<V: PartialEq + Clone, W: Weight> Graph<V, W> for AdjList<V, W> {
    fn edge_type(&self) -> EdgeType {
        self.edge_type
    }

    fn edge_count(&self) -> usize {
        self.n_edges
    }

    fn add_vertex(&mut self, value: V) -> Result<VertexId, GraphError<V>> {
        if self.find_vertex(&value).is_some() {
            return Err(GraphError::DuplicateVertex(value));
        }

        let id = VertexId::from_usize(self.vertices.len());
        self.vertices.push(ListVertex::new(value));

        debug!(%id, "added vertex");
        Ok(id)
    }

    fn add_edge(&mut self, src: &V, dst: &V, weight: W) -> Result<(), GraphError<V>> {
        let src_id = self.require_vertex(src)?;
        let dst_id = self.require_vertex(dst)?;

        if self.vertices[src_id.as_usize()]
            .adjacent
            .contains_key(&dst_id)
        {
            return Err(GraphError::duplicate_edge(src, dst));
        }

        self.vertices[src_id.as_usize()]
            .adjacent
            .insert(dst_id, weight);

        if !self.edge_type.is_directed() {
            self.vertices[dst_id.as_usize()]
                .adjacent
                .insert(src_id, weight);
        }

        self.n_edges += 1;

        debug!(src = %src_id, dst = %dst_id, ?weight, "added edge");
        Ok(())
    }

    fn remove_vertex(&mut self, value: &V) -> Result<V, GraphError<V>> {
        let id = self.require_vertex(value)?;
        let removed = self.vertices.remove(id.as_usize());

        // Outgoing edges of the removed vertex, and incoming ones which in the
        // undirected case are the same edges.
        let mut removed_edges = removed.adjacent.len();

        for vertex in self.vertices.iter_mut() {
            if vertex.adjacent.shift_remove(&id).is_some() && self.edge_type.is_directed() {
                removed_edges += 1;
            }

            vertex.reindex(id);
        }

        self.n_edges -= removed_edges;

        debug!(%id, removed_edges, "removed vertex");
        Ok(removed.vertex.into_value())
    }

    fn remove_edge(&mut self, src: &V, dst: &V) -> Result<W, GraphError<V>> {
        let src_id = self.require_vertex(src)?;
        let dst_id = self.require_vertex(dst)?;

        let weight = self.vertices[src_id.as_usize()]
            .adjacent
            .shift_remove(&dst_id)
            .ok_or_else(|| GraphError::edge_not_found(src, dst))?;

        if !self.edge_type.is_directed() {
            self.vertices[dst_id.as_usize()]
                .adjacent
                .shift_remove(&src_id);
        }

        self.n_edges -= 1;

        debug!(src = %src_id, dst = %dst_id, "removed edge");
        Ok(weight)
    }
}

impl<V: PartialEq + Clone, W: Weight> Create<V, W> for AdjList<V, W> {
    fn with_capacity(edge_type: EdgeType, vertex_count: usize) -> Self {
        Self::with_edge_type(edge_type, vertex_count)
    }
}

pub struct VerticesIter<'a, V, W> {
    inner: std::slice::Iter<'a, ListVertex<V, W>>,
}

impl<'a, V, W> Iterator for VerticesIter<'a, V, W> {
    type Item = &'a Vertex<V, W>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|vertex| &vertex.vertex)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

pub struct NeighborsIter<'a, W> {
    inner: indexmap::map::Iter<'a, VertexId, W>,
}

impl<W: Copy> Iterator for NeighborsIter<'_, W> {
    type Item = (VertexId, W);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(id, weight)| (*id, *weight))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
