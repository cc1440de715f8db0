//! Shortest paths between all pairs of vertices using the [Floyd–Warshall
//! algorithm].
//!
//! Unlike [Dijkstra's algorithm](super::dijkstra), negative weights are fine.
//! Negative cycles are not rejected, but they make the distances on the
//! affected pairs meaningless, which can be detected with
//! [`AllPairs::has_negative_cycle`].
//!
//! [Floyd–Warshall algorithm]: https://en.wikipedia.org/wiki/Floyd%E2%80%93Warshall_algorithm

use tracing::debug;

use crate::core::{
    id::VertexId,
    weight::{improves, Weight},
    Graph,
};

/// Distances and predecessors for every ordered pair of vertices.
///
/// An absent path is represented by `None`, never by a sentinel weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllPairs<W> {
    vertex_count: usize,
    dist: Vec<Option<W>>,
    pred: Vec<Option<VertexId>>,
}

impl<W: Weight> AllPairs<W> {
    fn new(vertex_count: usize) -> Self {
        let mut dist = vec![None; vertex_count * vertex_count];
        for i in 0..vertex_count {
            dist[i * vertex_count + i] = Some(W::zero());
        }

        Self {
            vertex_count,
            dist,
            pred: vec![None; vertex_count * vertex_count],
        }
    }

    fn index(&self, from: VertexId, to: VertexId) -> Option<usize> {
        let (i, j) = (from.as_usize(), to.as_usize());
        (i < self.vertex_count && j < self.vertex_count).then(|| i * self.vertex_count + j)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Length of the shortest path, `None` if there is no path.
    pub fn dist(&self, from: VertexId, to: VertexId) -> Option<W> {
        self.dist[self.index(from, to)?]
    }

    /// The vertex preceding `to` on the shortest path from `from`, `None` if
    /// there is no path or the vertices are equal.
    pub fn pred(&self, from: VertexId, to: VertexId) -> Option<VertexId> {
        self.pred[self.index(from, to)?]
    }

    /// The vertices of the shortest path from `from` to `to`, both included.
    ///
    /// Returns `None` if there is no path, or if the walk does not reach `from`
    /// within the vertex count steps, which happens on negative cycles.
    pub fn reconstruct(&self, from: VertexId, to: VertexId) -> Option<Vec<VertexId>> {
        self.dist(from, to)?;

        let mut path = vec![to];
        let mut curr = to;

        while curr != from {
            if path.len() > self.vertex_count {
                return None;
            }

            curr = self.pred(from, curr)?;
            path.push(curr);
        }

        path.reverse();
        Some(path)
    }

    /// Whether some vertex lies on a cycle with negative total weight.
    pub fn has_negative_cycle(&self) -> bool {
        (0..self.vertex_count).any(|i| {
            self.dist[i * self.vertex_count + i]
                .map(|dist| dist.is_negative())
                .unwrap_or(false)
        })
    }
}

/// All pairs shortest paths.
///
/// The vertex records are left untouched. A distance matrix starts with zero on
/// the diagonal and the direct edge weights elsewhere (a self-loop replaces the
/// zero only if it is negative), then every vertex `k` in insertion order is
/// tried as an intermediate step. When going through `k` improves the
/// distance from `i` to `j`, the predecessor of `j` is taken over from the
/// path from `k` to `j`.
pub fn floyd_warshall<V, W, G>(graph: &G) -> AllPairs<W>
where
    V: PartialEq + Clone,
    W: Weight,
    G: Graph<V, W> + ?Sized,
{
    let n = graph.vertex_count();
    debug!(vertex_count = n, "floyd-warshall started");

    let mut result = AllPairs::new(n);

    for src in graph.vertex_ids() {
        for (dst, weight) in graph.neighbors(src) {
            let index = src.as_usize() * n + dst.as_usize();

            if improves(weight, result.dist[index]) {
                result.dist[index] = Some(weight);
                result.pred[index] = Some(src);
            }
        }
    }

    for k in 0..n {
        for i in 0..n {
            let Some(ik) = result.dist[i * n + k] else {
                continue;
            };

            for j in 0..n {
                let Some(kj) = result.dist[k * n + j] else {
                    continue;
                };

                let Some(through) = ik.checked_add(kj) else {
                    continue;
                };

                if improves(through, result.dist[i * n + j]) {
                    result.dist[i * n + j] = Some(through);
                    result.pred[i * n + j] = result.pred[k * n + j];
                }
            }
        }
    }

    debug!(
        vertex_count = n,
        negative_cycle = result.has_negative_cycle(),
        "floyd-warshall finished"
    );
    result
}
