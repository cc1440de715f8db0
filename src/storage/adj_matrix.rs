use tracing::debug;

use crate::core::{
    error::GraphError,
    id::VertexId,
    marker::{Directed, EdgeType, Undirected},
    vertex::Vertex,
    weight::Weight,
    Create, Graph, Neighbors, Vertices,
};

/// Meaning of a zero weight passed to [`AdjMatrix::add_edge`](Graph::add_edge).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ZeroWeight {
    /// Zero is an ordinary weight and creates an edge.
    #[default]
    Edge,
    /// Zero means "no edge". Adding an edge with zero weight succeeds but
    /// leaves the cell empty, which is how a raw integer matrix without
    /// presence information behaves.
    Absent,
}

/// Graph stored as a square matrix of weights indexed by vertex positions.
///
/// Presence of an edge is tracked separately from its weight, so every weight
/// including zero is a valid edge unless configured otherwise with
/// [`ZeroWeight`]. Neighbors are enumerated in ascending position order.
///
/// Vertices cannot be removed, [`remove_vertex`](Graph::remove_vertex) always
/// fails with [`UnsupportedOperation`](GraphError::UnsupportedOperation).
#[derive(Debug)]
pub struct AdjMatrix<V, W = i32> {
    vertices: Vec<Vertex<V, W>>,
    matrix: raw::Matrix<W>,
    zero_weight: ZeroWeight,
    n_edges: usize,
}

impl<V, W: Weight> AdjMatrix<V, W> {
    pub fn new(directed: bool) -> Self {
        Self::with_zero_weight(directed, ZeroWeight::default())
    }

    pub fn new_directed() -> Self {
        Self::with_edge_type(Directed, 0, ZeroWeight::default())
    }

    pub fn new_undirected() -> Self {
        Self::with_edge_type(Undirected, 0, ZeroWeight::default())
    }

    pub fn with_zero_weight(directed: bool, zero_weight: ZeroWeight) -> Self {
        Self::with_edge_type(directed.into(), 0, zero_weight)
    }

    fn with_edge_type(edge_type: EdgeType, capacity: usize, zero_weight: ZeroWeight) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
            matrix: raw::Matrix::with_capacity(edge_type, capacity),
            zero_weight,
            n_edges: 0,
        }
    }

    pub fn zero_weight(&self) -> ZeroWeight {
        self.zero_weight
    }

    /// The `N x N` weight matrix where `N` is the vertex count. Absent edges
    /// are reported as zero.
    pub fn adjacency_matrix(&self) -> Vec<Vec<W>> {
        let n = self.vertices.len();
        (0..n)
            .map(|row| {
                (0..n)
                    .map(|col| self.matrix.get(row, col).unwrap_or_else(W::zero))
                    .collect()
            })
            .collect()
    }

    /// Weight of the edge between two vertex values, `None` if either vertex or
    /// the edge does not exist.
    pub fn weight(&self, src: &V, dst: &V) -> Option<W>
    where
        V: PartialEq,
    {
        let src = self.find_vertex(src)?;
        let dst = self.find_vertex(dst)?;
        self.matrix.get(src.as_usize(), dst.as_usize())
    }
}

impl<V, W: Weight> Default for AdjMatrix<V, W> {
    fn default() -> Self {
        Self::new_undirected()
    }
}

impl<V, W: Weight> Vertices<V, W> for AdjMatrix<V, W> {
    type VerticesIter<'a> = std::slice::Iter<'a, Vertex<V, W>>
    where
        Self: 'a,
        V: 'a,
        W: 'a;

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn vertex(&self, id: VertexId) -> Option<&Vertex<V, W>> {
        self.vertices.get(id.as_usize())
    }

    fn vertex_mut(&mut self, id: VertexId) -> Option<&mut Vertex<V, W>> {
        self.vertices.get_mut(id.as_usize())
    }

    fn vertices(&self) -> Self::VerticesIter<'_> {
        self.vertices.iter()
    }
}

impl<V, W: Weight> Neighbors<W> for AdjMatrix<V, W> {
    type NeighborsIter<'a> = NeighborsIter<'a, W>
    where
        Self: 'a;

    fn neighbors(&self, id: VertexId) -> Self::NeighborsIter<'_> {
        assert!(id.as_usize() < self.vertices.len(), "vertex does not exist");

        NeighborsIter {
            matrix: &self.matrix,
            row: id.as_usize(),
            col: 0,
            end: self.vertices.len(),
        }
    }

    fn edge_weight(&self, src: VertexId, dst: VertexId) -> Option<W> {
        let n = self.vertices.len();
        if src.as_usize() >= n || dst.as_usize() >= n {
            return None;
        }

        self.matrix.get(src.as_usize(), dst.as_usize())
    }
}

impl<V: PartialEq + Clone, W: Weight> Graph<V, W> for AdjMatrix<V, W> {
    fn edge_type(&self) -> EdgeType {
        self.matrix.edge_type()
    }

    fn edge_count(&self) -> usize {
        self.n_edges
    }

    fn add_vertex(&mut self, value: V) -> Result<VertexId, GraphError<V>> {
        if self.find_vertex(&value).is_some() {
            return Err(GraphError::DuplicateVertex(value));
        }

        let id = VertexId::from_usize(self.vertices.len());
        self.matrix.ensure_capacity(self.vertices.len() + 1);
        self.vertices.push(Vertex::new(value));

        debug!(%id, capacity = self.matrix.capacity(), "added vertex");
        Ok(id)
    }

    fn add_edge(&mut self, src: &V, dst: &V, weight: W) -> Result<(), GraphError<V>> {
        let src_id = self.require_vertex(src)?;
        let dst_id = self.require_vertex(dst)?;
        let (row, col) = (src_id.as_usize(), dst_id.as_usize());

        if self.matrix.contains(row, col) {
            return Err(GraphError::duplicate_edge(src, dst));
        }

        if self.zero_weight == ZeroWeight::Absent && weight == W::zero() {
            debug!(src = %src_id, dst = %dst_id, "zero weight edge left absent");
            return Ok(());
        }

        // A single cell holds both directions of an undirected edge.
        self.matrix.insert(row, col, weight);
        self.n_edges += 1;

        debug!(src = %src_id, dst = %dst_id, ?weight, "added edge");
        Ok(())
    }

    fn remove_vertex(&mut self, _value: &V) -> Result<V, GraphError<V>> {
        Err(GraphError::UnsupportedOperation(
            "adjacency matrix does not support vertex removal",
        ))
    }

    fn remove_edge(&mut self, src: &V, dst: &V) -> Result<W, GraphError<V>> {
        let src_id = self.require_vertex(src)?;
        let dst_id = self.require_vertex(dst)?;

        let weight = self
            .matrix
            .remove(src_id.as_usize(), dst_id.as_usize())
            .ok_or_else(|| GraphError::edge_not_found(src, dst))?;

        self.n_edges -= 1;

        debug!(src = %src_id, dst = %dst_id, "removed edge");
        Ok(weight)
    }
}

impl<V: PartialEq + Clone, W: Weight> Create<V, W> for AdjMatrix<V, W> {
    fn with_capacity(edge_type: EdgeType, vertex_count: usize) -> Self {
        Self::with_edge_type(edge_type, vertex_count, ZeroWeight::default())
    }
}

pub struct NeighborsIter<'a, W> {
    matrix: &'a raw::Matrix<W>,
    row: usize,
    col: usize,
    end: usize,
}

impl<W: Weight> Iterator for NeighborsIter<'_, W> {
    type Item = (VertexId, W);

    fn next(&mut self) -> Option<Self::Item> {
        while self.col < self.end {
            let col = self.col;
            self.col += 1;

            if let Some(weight) = self.matrix.get(self.row, col) {
                return Some((VertexId::from_usize(col), weight));
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.end - self.col))
    }
}

mod raw {
    use bitvec::prelude::*;

    use crate::common::matrix::*;
    use crate::core::{marker::EdgeType, weight::Weight};

    /// Weights with a presence flag for each cell. Cells without the flag hold
    /// zero.
    #[derive(Debug)]
    struct FlaggedVec<W> {
        flags: BitVec,
        data: Vec<W>,
    }

    impl<W> Default for FlaggedVec<W> {
        fn default() -> Self {
            Self {
                flags: BitVec::new(),
                data: Vec::new(),
            }
        }
    }

    impl<W: Weight> FlaggedVec<W> {
        fn with_capacity(capacity: usize) -> Self {
            Self {
                flags: BitVec::with_capacity(capacity),
                data: Vec::with_capacity(capacity),
            }
        }

        fn resize(&mut self, new_len: usize) {
            self.flags.resize(new_len, false);
            self.data.resize(new_len, W::zero());
        }

        fn len(&self) -> usize {
            self.data.len()
        }

        fn contains(&self, index: usize) -> bool {
            self.flags[index]
        }

        fn get(&self, index: usize) -> Option<W> {
            self.flags[index].then(|| self.data[index])
        }

        fn push(&mut self, value: Option<W>) {
            self.flags.push(value.is_some());
            self.data.push(value.unwrap_or_else(W::zero));
        }

        fn insert(&mut self, index: usize, value: W) -> Option<W> {
            let prev = self.get(index);
            self.flags.set(index, true);
            self.data[index] = value;
            prev
        }

        fn remove(&mut self, index: usize) -> Option<W> {
            let prev = self.get(index);
            self.flags.set(index, false);
            self.data[index] = W::zero();
            prev
        }
    }

    pub struct FlaggedIter<W> {
        inner: std::iter::Zip<<BitVec as IntoIterator>::IntoIter, std::vec::IntoIter<W>>,
    }

    impl<W> Iterator for FlaggedIter<W> {
        type Item = Option<W>;

        fn next(&mut self) -> Option<Self::Item> {
            self.inner
                .next()
                .map(|(flag, value)| if flag { Some(value) } else { None })
        }
    }

    impl<W> IntoIterator for FlaggedVec<W> {
        type Item = Option<W>;
        type IntoIter = FlaggedIter<W>;

        fn into_iter(self) -> Self::IntoIter {
            FlaggedIter {
                inner: self.flags.into_iter().zip(self.data),
            }
        }
    }

    impl<W: Weight> MatrixResize<W> for FlaggedVec<W> {
        fn with_capacity(capacity: usize) -> Self {
            Self::with_capacity(capacity)
        }

        fn resize_with_none(&mut self, new_len: usize) {
            self.resize(new_len)
        }

        fn push(&mut self, value: Option<W>) {
            self.push(value)
        }

        fn len(&self) -> usize {
            self.len()
        }
    }

    #[derive(Debug)]
    pub struct Matrix<W> {
        data: FlaggedVec<W>,
        capacity: usize,
        edge_type: EdgeType,
    }

    impl<W: Weight> Matrix<W> {
        pub fn with_capacity(edge_type: EdgeType, capacity: usize) -> Self {
            if capacity == 0 {
                return Self {
                    data: FlaggedVec::default(),
                    capacity,
                    edge_type,
                };
            }

            let capacity = capacity.next_power_of_two();
            let len = size_of(edge_type, capacity);
            let mut data = FlaggedVec::with_capacity(len);
            data.resize(len);

            Self {
                data,
                capacity,
                edge_type,
            }
        }

        pub fn ensure_capacity(&mut self, capacity: usize) {
            if self.capacity < capacity {
                self.capacity = (self.capacity * 2).max(capacity.next_power_of_two());
                resize(self.edge_type, &mut self.data, self.capacity);
            }
        }

        pub fn capacity(&self) -> usize {
            self.capacity
        }

        pub fn edge_type(&self) -> EdgeType {
            self.edge_type
        }

        pub fn contains(&self, row: usize, col: usize) -> bool {
            self.data.contains(self.index(row, col))
        }

        pub fn get(&self, row: usize, col: usize) -> Option<W> {
            self.data.get(self.index(row, col))
        }

        pub fn insert(&mut self, row: usize, col: usize, weight: W) -> Option<W> {
            let index = self.index(row, col);
            self.data.insert(index, weight)
        }

        pub fn remove(&mut self, row: usize, col: usize) -> Option<W> {
            let index = self.index(row, col);
            self.data.remove(index)
        }

        fn index(&self, row: usize, col: usize) -> usize {
            index(self.edge_type, row, col, self.capacity)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{infra::testing::check_consistency, storage::tests::*};

    use assert_matches::assert_matches;

    #[test]
    fn basic_undirected() {
        test_basic::<AdjMatrix<_, _>>(Undirected);
    }

    #[test]
    fn basic_directed() {
        test_basic::<AdjMatrix<_, _>>(Directed);
    }

    #[test]
    fn errors_undirected() {
        test_errors::<AdjMatrix<_, _>>(Undirected);
    }

    #[test]
    fn errors_directed() {
        test_errors::<AdjMatrix<_, _>>(Directed);
    }

    #[test]
    fn is_connected_undirected() {
        test_is_connected::<AdjMatrix<_, _>>(Undirected);
    }

    #[test]
    fn is_connected_directed() {
        test_is_connected::<AdjMatrix<_, _>>(Directed);
    }

    #[test]
    fn self_loop_undirected() {
        test_self_loop::<AdjMatrix<_, _>>(Undirected);
    }

    #[test]
    fn self_loop_directed() {
        test_self_loop::<AdjMatrix<_, _>>(Directed);
    }

    #[test]
    fn zero_weight_is_edge() {
        test_zero_weight_edge::<AdjMatrix<_, _>>(Directed);
    }

    #[test]
    fn zero_weight_absent() {
        let mut graph = AdjMatrix::with_zero_weight(false, ZeroWeight::Absent);
        graph.add_vertex("NYC").unwrap();
        graph.add_vertex("LA").unwrap();

        assert_eq!(graph.add_edge(&"NYC", &"LA", 0), Ok(()));
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.weight(&"NYC", &"LA"), None);
        assert!(!graph.is_connected());

        // The cell is still empty, so a real weight can be stored.
        assert_eq!(graph.add_edge(&"LA", &"NYC", 7), Ok(()));
        assert_eq!(graph.weight(&"NYC", &"LA"), Some(7));
        assert_matches!(graph.remove_edge(&"NYC", &"LA"), Ok(7));
    }

    #[test]
    fn neighbors_in_position_order() {
        let mut graph = AdjMatrix::new_directed();
        for city in ["NYC", "LA", "Chicago", "Denver"] {
            graph.add_vertex(city).unwrap();
        }

        graph.add_edge(&"NYC", &"Denver", 3).unwrap();
        graph.add_edge(&"NYC", &"LA", 1).unwrap();
        graph.add_edge(&"NYC", &"Chicago", 2).unwrap();

        let neighbors = graph
            .neighbors(VertexId::from_usize(0))
            .map(|(id, _)| *graph.vertex_value(id).unwrap())
            .collect::<Vec<_>>();

        assert_eq!(neighbors, vec!["LA", "Chicago", "Denver"]);
    }

    #[test]
    fn remove_vertex_unsupported() {
        let mut graph = AdjMatrix::new_undirected();
        graph.add_vertex("NYC").unwrap();
        graph.add_vertex("LA").unwrap();
        graph.add_edge(&"NYC", &"LA", 4).unwrap();

        assert_matches!(
            graph.remove_vertex(&"NYC"),
            Err(GraphError::UnsupportedOperation(_))
        );
        assert_matches!(
            graph.remove_vertex(&"Boston"),
            Err(GraphError::UnsupportedOperation(_))
        );
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn adjacency_matrix_undirected() {
        let mut graph = AdjMatrix::new_undirected();
        for city in ["NYC", "LA", "Chicago"] {
            graph.add_vertex(city).unwrap();
        }

        graph.add_edge(&"NYC", &"LA", 4).unwrap();
        graph.add_edge(&"Chicago", &"NYC", 2).unwrap();

        assert_eq!(
            graph.adjacency_matrix(),
            vec![vec![0, 4, 2], vec![4, 0, 0], vec![2, 0, 0]]
        );
    }

    #[test]
    fn growth_preserves_edges() {
        let mut graph = AdjMatrix::<u32, i64>::new_directed();
        graph.add_vertex(0).unwrap();
        graph.add_vertex(1).unwrap();
        graph.add_edge(&0, &1, -5).unwrap();
        graph.add_edge(&1, &0, 6).unwrap();
        graph.add_edge(&1, &1, 7).unwrap();

        for value in 2..37 {
            graph.add_vertex(value).unwrap();
            graph.add_edge(&value, &(value - 1), value as i64).unwrap();
        }

        assert_eq!(graph.weight(&0, &1), Some(-5));
        assert_eq!(graph.weight(&1, &0), Some(6));
        assert_eq!(graph.weight(&1, &1), Some(7));
        assert_eq!(graph.weight(&36, &35), Some(36));
        assert_eq!(graph.weight(&35, &36), None);
        assert_eq!(graph.weight(&0, &36), None);
        assert_eq!(graph.edge_count(), 38);

        check_consistency(&graph).unwrap();
    }

    #[test]
    fn add_vertex_duplicate_does_not_grow() {
        let mut graph = AdjMatrix::<_, i32>::new_undirected();
        graph.add_vertex("NYC").unwrap();
        let before = graph.adjacency_matrix();

        assert_matches!(
            graph.add_vertex("NYC"),
            Err(GraphError::DuplicateVertex("NYC"))
        );
        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(graph.adjacency_matrix(), before);
    }
}
