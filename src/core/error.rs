use thiserror::Error;

/// Failure of a graph operation.
///
/// An operation that returns an error has not modified the graph.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GraphError<V> {
    /// A vertex with an equal value already exists.
    #[error("vertex {0:?} already exists")]
    DuplicateVertex(V),

    /// No vertex has the given value.
    #[error("vertex {0:?} does not exist")]
    UnknownVertex(V),

    /// An edge between the ordered pair already exists and the graph does not
    /// allow multi edges.
    #[error("edge from {src:?} to {dst:?} already exists")]
    DuplicateEdge { src: V, dst: V },

    /// There is no edge between the ordered pair.
    #[error("edge from {src:?} to {dst:?} does not exist")]
    EdgeNotFound { src: V, dst: V },

    /// The storage cannot perform the operation.
    #[error("operation not supported: {0}")]
    UnsupportedOperation(&'static str),
}

impl<V> GraphError<V> {
    pub(crate) fn unknown(value: &V) -> Self
    where
        V: Clone,
    {
        Self::UnknownVertex(value.clone())
    }

    pub(crate) fn duplicate_edge(src: &V, dst: &V) -> Self
    where
        V: Clone,
    {
        Self::DuplicateEdge {
            src: src.clone(),
            dst: dst.clone(),
        }
    }

    pub(crate) fn edge_not_found(src: &V, dst: &V) -> Self
    where
        V: Clone,
    {
        Self::EdgeNotFound {
            src: src.clone(),
            dst: dst.clone(),
        }
    }
}
