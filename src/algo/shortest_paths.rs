//! Find [single source shortest paths] and their distances in a graph using
//! [Dijkstra's algorithm].
//!
//! Edge weights must not be negative. Negative weights are not detected and
//! the resulting distances are unspecified, although the run always terminates
//! and the predecessors always form a tree rooted in the source.
//!
//! [single source shortest paths]:
//!     https://en.wikipedia.org/wiki/Shortest_path_problem#Single-source_shortest_paths
//! [Dijkstra's algorithm]: https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
//!
//! # Examples
//!
//! ```
//! use wayfind::{
//!     core::{Graph, Vertices},
//!     storage::AdjList,
//! };
//!
//! let mut graph = AdjList::new(false);
//!
//! for city in ["NYC", "LA", "Chicago", "Denver", "Miami"] {
//!     graph.add_vertex(city)?;
//! }
//!
//! graph.add_edge(&"NYC", &"LA", 4)?;
//! graph.add_edge(&"NYC", &"Chicago", 2)?;
//! graph.add_edge(&"LA", &"Denver", 1)?;
//! graph.add_edge(&"Chicago", &"Denver", 5)?;
//! graph.add_edge(&"Denver", &"Miami", 3)?;
//!
//! let shortest_paths = graph.dijkstra(&"NYC")?;
//! let miami = graph.find_vertex(&"Miami").unwrap();
//!
//! let path = shortest_paths
//!     .path_to(miami)
//!     .unwrap()
//!     .into_iter()
//!     .map(|id| *graph.vertex_value(id).unwrap())
//!     .collect::<Vec<_>>();
//!
//! assert_eq!(shortest_paths.dist(miami), Some(8));
//! assert_eq!(path, ["NYC", "LA", "Denver", "Miami"]);
//! # Ok::<(), wayfind::core::GraphError<&str>>(())
//! ```

use fixedbitset::FixedBitSet;
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::core::{
    error::GraphError,
    id::VertexId,
    weight::{improves, Weight},
    Graph,
};

use super::queue::MinQueue;

/// Shortest paths and their distances from a single source vertex.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone)]
pub struct ShortestPaths<W> {
    source: VertexId,
    dist: Vec<Option<W>>,
    pred: FxHashMap<VertexId, VertexId>,
}

impl<W: Copy> ShortestPaths<W> {
    /// Source vertex where the search was started.
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Returns the path distance between the source vertex and the given
    /// vertex, or `None` if the vertex is not reachable.
    pub fn dist(&self, to: VertexId) -> Option<W> {
        self.dist.get(to.as_usize()).copied().flatten()
    }

    /// Predecessor of the vertex on its shortest path, `None` for the source
    /// and unreachable vertices.
    pub fn pred(&self, to: VertexId) -> Option<VertexId> {
        self.pred.get(&to).copied()
    }

    /// Mapping of every reached vertex except the source to its predecessor.
    pub fn predecessors(&self) -> &FxHashMap<VertexId, VertexId> {
        &self.pred
    }

    /// Returns an iterator over vertices on the path between the given vertex
    /// and the source vertex, in this order, excluding the given vertex.
    ///
    /// The iterator is empty if the vertex is the source or is not reachable.
    pub fn reconstruct(&self, to: VertexId) -> PathReconstruction<'_> {
        PathReconstruction {
            curr: to,
            pred: &self.pred,
        }
    }

    /// The vertices of the shortest path from the source to the given vertex,
    /// both included, or `None` if the vertex is not reachable.
    pub fn path_to(&self, to: VertexId) -> Option<Vec<VertexId>> {
        self.dist(to)?;

        let mut path = vec![to];
        path.extend(self.reconstruct(to));
        path.reverse();
        Some(path)
    }
}

/// Iterator over the vertices on the path from a vertex to the source vertex.
///
/// Returned by [`ShortestPaths::reconstruct`].
pub struct PathReconstruction<'a> {
    curr: VertexId,
    pred: &'a FxHashMap<VertexId, VertexId>,
}

impl Iterator for PathReconstruction<'_> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        self.curr = self.pred.get(&self.curr).copied()?;
        Some(self.curr)
    }
}

/// Single source shortest paths from `source`.
///
/// Besides the returned [`ShortestPaths`], the distance and the predecessor of
/// every vertex are written to its [`distance`](crate::core::Vertex::distance)
/// and [`parent`](crate::core::Vertex::parent). Vertices not reachable from the
/// source have infinite distance and no parent.
///
/// All vertices enter the priority queue at the start in insertion order and
/// vertices with equal distance are extracted in the order they were
/// (re)inserted. An extracted vertex is final and is never relaxed again.
pub fn dijkstra<V, W, G>(graph: &mut G, source: &V) -> Result<ShortestPaths<W>, GraphError<V>>
where
    V: PartialEq + Clone,
    W: Weight,
    G: Graph<V, W> + ?Sized,
{
    let source = graph.require_vertex(source)?;
    let vertex_count = graph.vertex_count();
    debug!(%source, vertex_count, "dijkstra started");

    let mut states = graph.states();
    for state in states.iter_mut() {
        state.distance = None;
        state.parent = None;
    }
    states[source.as_usize()].distance = Some(W::zero());

    let mut queue = MinQueue::new(vertex_count);
    for (id, state) in graph.vertex_ids().zip(states.iter()) {
        queue.push(id, state.distance);
    }

    let mut settled = FixedBitSet::with_capacity(vertex_count);
    let mut pred = FxHashMap::default();

    while let Some((vertex, vertex_dist)) = queue.pop() {
        settled.insert(vertex.as_usize());

        // Everything left in the queue is unreachable.
        let Some(vertex_dist) = vertex_dist else {
            break;
        };

        for (next, edge_dist) in graph.neighbors(vertex) {
            if settled.contains(next.as_usize()) {
                continue;
            }

            // An overflowing sum can't be an improvement.
            let Some(next_dist) = vertex_dist.checked_add(edge_dist) else {
                continue;
            };

            let state = &mut states[next.as_usize()];

            if improves(next_dist, state.distance) {
                trace!(from = %vertex, to = %next, dist = ?next_dist, "relaxed");

                state.distance = Some(next_dist);
                state.parent = Some(vertex);
                pred.insert(next, vertex);
                queue.push(next, Some(next_dist));
            }
        }
    }

    let dist = states.iter().map(|state| state.distance).collect();
    graph.commit_states(states);

    debug!(%source, reached = pred.len() + 1, "dijkstra finished");
    Ok(ShortestPaths { source, dist, pred })
}
