use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::core::{id::VertexId, Graph, Weight};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsistencyCheckError {
    #[error("vertex ids iterator count ({0}) is not equal to vertex count ({1})")]
    VertexIdsVertexCountMismatch(usize, usize),
    #[error("vertices iterator count ({0}) is not equal to vertex count ({1})")]
    VerticesVertexCountMismatch(usize, usize),
    #[error("vertex {0} has a value equal to an earlier vertex")]
    DuplicateValue(VertexId),
    #[error("vertex {0} has neighbor {1} which does not exist")]
    NeighborOutOfBounds(VertexId, VertexId),
    #[error("vertex {0} lists neighbor {1} more than once")]
    NeighborRepeated(VertexId, VertexId),
    #[error("edge weight from {0} to {1} does not agree with the neighbors iterator")]
    EdgeWeightMismatch(VertexId, VertexId),
    #[error("undirected edge from {0} to {1} is not symmetric")]
    UndirectedAsymmetric(VertexId, VertexId),
    #[error("sum of out degrees ({0}) is not equal to edge count ({1})")]
    HandshakingLemmaDirected(usize, usize),
    #[error("sum of degrees with loops counted twice ({0}) is not equal to doubled edge count ({1})")]
    HandshakingLemma(usize, usize),
    #[error("vertex {0} has parent {1} which does not exist")]
    ParentOutOfBounds(VertexId, VertexId),
}

pub fn check_consistency<V, W, G>(graph: &G) -> Result<(), ConsistencyCheckError>
where
    V: PartialEq + Clone,
    W: Weight,
    G: Graph<V, W> + ?Sized,
{
    fn cmp<F, E>(actual: usize, expected: usize, error: F) -> Result<(), E>
    where
        F: FnOnce(usize, usize) -> E,
    {
        if actual == expected {
            Ok(())
        } else {
            Err(error(actual, expected))
        }
    }

    let vertex_count = graph.vertex_count();

    cmp(
        graph.vertex_ids().count(),
        vertex_count,
        ConsistencyCheckError::VertexIdsVertexCountMismatch,
    )?;
    cmp(
        graph.vertices().count(),
        vertex_count,
        ConsistencyCheckError::VerticesVertexCountMismatch,
    )?;

    for (id, vertex) in graph.vertex_ids().zip(graph.vertices()) {
        if graph.find_vertex(vertex.value()) != Some(id) {
            return Err(ConsistencyCheckError::DuplicateValue(id));
        }

        if let Some(parent) = vertex.parent() {
            if parent.as_usize() >= vertex_count {
                return Err(ConsistencyCheckError::ParentOutOfBounds(id, parent));
            }
        }
    }

    let mut deg_sum = 0;
    let mut loops = 0;

    for src in graph.vertex_ids() {
        let mut seen = FxHashSet::default();

        for (dst, weight) in graph.neighbors(src) {
            if dst.as_usize() >= vertex_count {
                return Err(ConsistencyCheckError::NeighborOutOfBounds(src, dst));
            }

            if !seen.insert(dst) {
                return Err(ConsistencyCheckError::NeighborRepeated(src, dst));
            }

            if graph.edge_weight(src, dst) != Some(weight) {
                return Err(ConsistencyCheckError::EdgeWeightMismatch(src, dst));
            }

            if !graph.is_directed() && graph.edge_weight(dst, src) != Some(weight) {
                return Err(ConsistencyCheckError::UndirectedAsymmetric(src, dst));
            }

            if src == dst {
                loops += 1;
            }

            deg_sum += 1;
        }
    }

    let edge_count = graph.edge_count();

    // https://en.wikipedia.org/wiki/Handshaking_lemma
    if graph.is_directed() {
        cmp(
            deg_sum,
            edge_count,
            ConsistencyCheckError::HandshakingLemmaDirected,
        )?;
    } else {
        // A loop is listed once among the neighbors of its vertex.
        cmp(
            deg_sum + loops,
            2 * edge_count,
            ConsistencyCheckError::HandshakingLemma,
        )?;
    }

    Ok(())
}

// A fast check for graphs similarity. This is not a full isomorphism check!
pub fn check_potential_isomorphism<V, W, G1, G2>(lhs: &G1, rhs: &G2) -> bool
where
    V: PartialEq + Clone,
    W: Weight,
    G1: Graph<V, W> + ?Sized,
    G2: Graph<V, W> + ?Sized,
{
    if lhs.vertex_count() != rhs.vertex_count() {
        return false;
    }

    if lhs.edge_count() != rhs.edge_count() {
        return false;
    }

    if lhs.is_directed() != rhs.is_directed() {
        return false;
    }

    let mut deg_seq_lhs = lhs
        .vertex_ids()
        .map(|id| lhs.degree(id))
        .collect::<Vec<_>>();

    let mut deg_seq_rhs = rhs
        .vertex_ids()
        .map(|id| rhs.degree(id))
        .collect::<Vec<_>>();

    deg_seq_lhs.sort_unstable();
    deg_seq_rhs.sort_unstable();

    deg_seq_lhs == deg_seq_rhs
}
