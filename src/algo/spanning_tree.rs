//! Minimum spanning forest using [Prim's algorithm].
//!
//! Negative weights are fine. The algorithm is meant for undirected graphs; on
//! a directed graph it follows the outgoing edges only and the result is not
//! necessarily minimal.
//!
//! [Prim's algorithm]: https://en.wikipedia.org/wiki/Prim%27s_algorithm

use tracing::{debug, trace};

use crate::core::{
    error::GraphError,
    id::VertexId,
    vertex::Color,
    weight::{improves, Weight},
    Graph,
};

use super::queue::MinQueue;

/// Summary of a spanning forest found by [`prim`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningForest<W> {
    edges: Vec<(VertexId, VertexId, W)>,
    roots: Vec<VertexId>,
}

impl<W: Weight> SpanningForest<W> {
    /// The tree edges as `(parent, child, weight)` in the insertion order of
    /// the children.
    pub fn edges(&self) -> &[(VertexId, VertexId, W)] {
        &self.edges
    }

    /// Roots of the trees in the order they were started. The first one is the
    /// source.
    pub fn roots(&self) -> &[VertexId] {
        &self.roots
    }

    /// Whether the forest consists of a single tree.
    pub fn is_tree(&self) -> bool {
        self.roots.len() == 1
    }

    /// Sum of the tree edge weights, `None` if it overflows.
    pub fn total_weight(&self) -> Option<W> {
        self.edges
            .iter()
            .try_fold(W::zero(), |total, &(_, _, weight)| total.checked_add(weight))
    }
}

/// Minimum spanning forest grown from `source`.
///
/// Each vertex ends up with the weight of the edge connecting it to its tree in
/// [`distance`](crate::core::Vertex::distance) and the other endpoint of that
/// edge in [`parent`](crate::core::Vertex::parent). A tree root has no parent;
/// the source has distance zero and the roots of further trees keep infinite
/// distance. The further trees are started from the vertex that comes first in
/// insertion order among those not reached yet.
pub fn prim<V, W, G>(graph: &mut G, source: &V) -> Result<SpanningForest<W>, GraphError<V>>
where
    V: PartialEq + Clone,
    W: Weight,
    G: Graph<V, W> + ?Sized,
{
    let source = graph.require_vertex(source)?;
    let vertex_count = graph.vertex_count();
    debug!(%source, vertex_count, "prim started");

    let mut states = graph.states();
    for state in states.iter_mut() {
        state.color = Color::Unvisited;
        state.distance = None;
        state.parent = None;
    }
    states[source.as_usize()].distance = Some(W::zero());

    let mut queue = MinQueue::new(vertex_count);
    for (id, state) in graph.vertex_ids().zip(states.iter()) {
        queue.push(id, state.distance);
    }

    let mut roots = Vec::new();

    while let Some((vertex, _)) = queue.pop() {
        if states[vertex.as_usize()].parent.is_none() {
            trace!(root = %vertex, "tree started");
            roots.push(vertex);
        }

        for (next, weight) in graph.neighbors(vertex) {
            if !queue.contains(next) {
                continue;
            }

            let state = &mut states[next.as_usize()];

            if improves(weight, state.distance) {
                trace!(from = %vertex, to = %next, ?weight, "relaxed");

                state.distance = Some(weight);
                state.parent = Some(vertex);
                queue.push(next, Some(weight));
            }
        }

        states[vertex.as_usize()].color = Color::Done;
    }

    let edges = graph
        .vertex_ids()
        .zip(states.iter())
        .filter_map(|(id, state)| match (state.parent, state.distance) {
            (Some(parent), Some(weight)) => Some((parent, id, weight)),
            _ => None,
        })
        .collect::<Vec<_>>();

    graph.commit_states(states);

    debug!(%source, trees = roots.len(), edges = edges.len(), "prim finished");
    Ok(SpanningForest { edges, roots })
}
